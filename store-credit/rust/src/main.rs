use std::io::{self, BufWriter};

use anyhow::Result;

fn main() -> Result<()> {
    store_credit::telemetry::init()?;

    let stdin = io::stdin().lock();
    let stdout = BufWriter::with_capacity(1024 * 8, io::stdout().lock());

    store_credit::run(stdin, stdout)?;
    Ok(())
}
