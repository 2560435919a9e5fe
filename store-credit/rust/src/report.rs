use std::fmt::{self, Display, Formatter};

use crate::solve::NotFound;
use crate::store::Pair;

/// One output line, `Case #<n>: ...`, for the 1-based case `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseReport {
    number: usize,
    outcome: Result<Pair, NotFound>,
}

impl CaseReport {
    pub fn new(number: usize, outcome: Result<Pair, NotFound>) -> Self {
        Self { number, outcome }
    }

    pub fn is_solved(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl Display for CaseReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Ok(pair) => {
                let (first, second) = pair.one_based();
                write!(f, "Case #{}: {} {}", self.number, first, second)
            }
            Err(NotFound) => write!(f, "Case #{}: no result", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved() {
        let report = CaseReport::new(3, Ok(Pair::ordered(3, 1)));
        assert!(report.is_solved());
        assert_eq!("Case #3: 2 4", report.to_string());
    }

    #[test]
    fn unsolved() {
        let report = CaseReport::new(12, Err(NotFound));
        assert!(!report.is_solved());
        assert_eq!("Case #12: no result", report.to_string());
    }
}
