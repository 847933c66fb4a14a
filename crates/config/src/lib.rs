// Configuration loading

pub mod paths;
pub mod settings;

pub use paths::{DataPaths, RootSource, DATA_PATH_ENV};
pub use settings::Settings;
