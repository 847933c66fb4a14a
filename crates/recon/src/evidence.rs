use crate::model::{CheckSummary, MatchOutput};

/// Compute summary counts from match output.
pub fn compute_summary(output: &MatchOutput<'_>) -> CheckSummary {
    let found = output.found.len();
    let missing = output.missing.len();
    CheckSummary {
        qualifying: found + missing,
        found,
        missing,
    }
}
