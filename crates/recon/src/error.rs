use std::fmt;

/// Which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Daily,
    Performance,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Performance => write!(f, "performance"),
        }
    }
}

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty file name, bad threshold, etc.).
    ConfigValidation(String),
    /// Dataset unreadable, not valid JSON, or its record field is not an array.
    DataLoad { dataset: Dataset, message: String },
    /// Dataset parsed but its required record sequence is absent.
    MissingData { dataset: Dataset, field: String },
}

impl ReconError {
    pub fn data_load(dataset: Dataset, message: impl Into<String>) -> Self {
        Self::DataLoad { dataset, message: message.into() }
    }
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::DataLoad { dataset, message } => {
                write!(f, "cannot load {dataset} dataset: {message}")
            }
            Self::MissingData { dataset, field } => {
                write!(f, "{dataset} dataset has no '{field}' record list")
            }
        }
    }
}

impl std::error::Error for ReconError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_dataset_and_field() {
        let err = ReconError::MissingData {
            dataset: Dataset::Performance,
            field: "players".into(),
        };
        assert_eq!(err.to_string(), "performance dataset has no 'players' record list");

        let err = ReconError::data_load(Dataset::Daily, "expected value at line 1 column 1");
        assert!(err.to_string().starts_with("cannot load daily dataset:"));
    }
}
