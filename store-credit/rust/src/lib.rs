use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

pub mod parse;
pub mod report;
pub mod solve;
pub mod store;
pub mod telemetry;

pub use parse::{parse_input, ParseError};
pub use report::CaseReport;
pub use solve::{find_pair, NotFound, SortedView};
pub use store::{Item, Pair, Store};

#[derive(Error, Debug)]
pub enum RunError {
    #[error("malformed input")]
    Parse(#[from] ParseError),
    #[error("failed to write results")]
    Io(#[from] std::io::Error),
}

/// Parses every case from `input`, then solves and writes them one by one.
///
/// Nothing is written when the input is malformed. A case without a solution is
/// reported as `no result` and does not stop the run.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), RunError> {
    let stores = parse_input(input)?;
    info!(cases = stores.len(), "parsed input");

    let mut solved = 0;
    for (i, store) in stores.iter().enumerate() {
        let report = CaseReport::new(i + 1, find_pair(store));
        debug!(
            case = i + 1,
            credit = store.credit(),
            items = store.item_count(),
            solved = report.is_solved(),
            "solved case"
        );

        if report.is_solved() {
            solved += 1;
        }
        writeln!(output, "{report}")?;
    }

    output.flush()?;
    info!(cases = stores.len(), solved, "done");
    Ok(())
}
