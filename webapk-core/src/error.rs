use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebApkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Random source error: {0}")]
    Random(#[from] getrandom::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Format error: {0}")]
    Format(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, WebApkError>;
