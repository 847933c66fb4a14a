//! `dugout-recon` — cross-dataset consistency checks.
//!
//! Finds qualifying events in a daily player dataset that have no matching
//! record in a cumulative performance dataset. The engine works on decoded
//! records; file access is confined to [`load::load_input`].

pub mod config;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod load;
pub mod matcher;
pub mod model;
pub mod qualify;
pub mod range;
pub mod report;

pub use config::{CheckConfig, MatchStrategy};
pub use engine::run;
pub use error::{Dataset, ReconError};
pub use model::{CheckInput, CheckReport, CheckSummary, MissingEvent};
pub use range::{date_range, run_range, RangeReport};
pub use report::{render_range_text, render_text};
