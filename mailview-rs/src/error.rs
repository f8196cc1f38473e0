use thiserror::Error;

/// Boxed error for wrapped transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum MailviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no template configured for {0}")]
    TemplateConfig(&'static str),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template render failed: {0}")]
    Render(#[source] minijinja::Error),

    #[error("message construction failed: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("invalid header name: {0}")]
    InvalidHeader(String),

    #[error("invalid email address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),

    #[error("mail transport error: {0}")]
    Transport(#[source] BoxError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MailviewError>;
