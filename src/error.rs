use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    #[diagnostic(code(iconpack::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconpack::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconpack::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(iconpack::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(iconpack::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(iconpack::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PackError {
    /// Wrap an IO failure on a known path.
    pub(crate) fn io(path: &std::path::Path, action: &str, err: impl std::fmt::Display) -> Self {
        PackError::Io {
            path: path.to_path_buf(),
            message: format!("{}: {}", action, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
