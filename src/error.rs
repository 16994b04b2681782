use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("A logger was already installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),

    #[error("Selector error: {0}")]
    Selector(#[from] cssb::SelectorError),

    #[error("Object error: {0}")]
    Object(#[from] objects::ObjectError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, KitError>;
