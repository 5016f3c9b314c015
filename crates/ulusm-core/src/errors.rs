/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the dispatcher
/// can decide between a user-facing message and a fatal startup failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("country catalog unavailable: {0}")]
    Catalog(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
