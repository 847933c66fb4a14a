//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success (report produced)                |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, bad date)     |
//! | 3-9     | recon            | Consistency-check codes                  |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use dugout_recon::ReconError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Recon (3-9)
// =============================================================================

/// Qualifying events are missing from the performance dataset
/// (only with --fail-on-missing; otherwise a report with gaps exits 0).
pub const EXIT_RECON_MISSING: u8 = 3;

/// Check config failed to parse or validate.
pub const EXIT_RECON_INVALID_CONFIG: u8 = 4;

/// A dataset file is unreadable or not valid JSON.
pub const EXIT_RECON_DATA_LOAD: u8 = 5;

/// The performance dataset has no record list.
pub const EXIT_RECON_MISSING_DATA: u8 = 6;

/// Writing the report failed.
pub const EXIT_RECON_OUTPUT: u8 = 7;

/// Map a ReconError to its exit code.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_RECON_INVALID_CONFIG,
        ReconError::DataLoad { .. } => EXIT_RECON_DATA_LOAD,
        ReconError::MissingData { .. } => EXIT_RECON_MISSING_DATA,
    }
}
