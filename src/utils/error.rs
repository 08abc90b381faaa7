use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column '{column}' in CSV header")]
    MissingColumn { column: String },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: u64, message: String },

    #[error("Invalid record at line {line}: field '{field}' {reason}")]
    InvalidRecord {
        line: u64,
        field: String,
        reason: String,
    },

    #[error("No records loaded from '{path}'")]
    EmptyInput { path: String },

    #[error("Chart rendering failed: {message}")]
    RenderError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    EmptyInput,
    Render,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlotError {
    pub fn render<E: std::fmt::Display>(err: E) -> Self {
        PlotError::RenderError {
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlotError::IoError(_) => ErrorCategory::Io,
            // csv 的 IO 錯誤（檔案不存在等）歸類為 IO，其餘都是解析錯誤
            PlotError::CsvError(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                ErrorCategory::Io
            }
            PlotError::CsvError(_)
            | PlotError::MissingColumn { .. }
            | PlotError::ParseError { .. }
            | PlotError::InvalidRecord { .. } => ErrorCategory::Parse,
            PlotError::EmptyInput { .. } => ErrorCategory::EmptyInput,
            PlotError::RenderError { .. } => ErrorCategory::Render,
            PlotError::SerializationError(_)
            | PlotError::ConfigError { .. }
            | PlotError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::EmptyInput | ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Render => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the CLI. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Parse | ErrorCategory::Render => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::EmptyInput => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlotError::EmptyInput { path } => {
                format!("CSV '{}' is empty or could not be parsed", path)
            }
            PlotError::MissingColumn { column } => {
                format!("Input CSV has no '{}' column", column)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
            ErrorCategory::Parse => {
                "Check the CSV header and make sure every numeric column holds a valid number"
            }
            ErrorCategory::EmptyInput => "Run the benchmark first so the results CSV contains data rows",
            ErrorCategory::Render => "Check that system fonts are installed and the output path is valid",
            ErrorCategory::Config => "Check command-line flags and the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = vec![
            PlotError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            PlotError::MissingColumn {
                column: "algo".to_string(),
            },
            PlotError::EmptyInput {
                path: "results.csv".to_string(),
            },
            PlotError::RenderError {
                message: "boom".to_string(),
            },
            PlotError::ConfigError {
                message: "bad".to_string(),
            },
        ];

        for e in errors {
            assert_ne!(e.exit_code(), 0, "{e}");
        }
    }

    #[test]
    fn test_categories() {
        let empty = PlotError::EmptyInput {
            path: "x.csv".to_string(),
        };
        assert_eq!(empty.category(), ErrorCategory::EmptyInput);
        assert_eq!(empty.exit_code(), 3);

        let parse = PlotError::ParseError {
            line: 2,
            message: "invalid digit".to_string(),
        };
        assert_eq!(parse.category(), ErrorCategory::Parse);
        assert_eq!(parse.severity(), ErrorSeverity::High);
    }
}
