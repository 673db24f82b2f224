use thiserror::Error;

/// Prosecap's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prosecap's crate-wide error type.
///
/// Reconstruction itself never fails; these variants come from the page accessor, the output
/// encoders and the file/network helpers around it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    /// A required element was not present in the page snapshot.
    #[error("missing page element: {what}")]
    MissingElement { what: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub(crate) fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement { what: what.into() }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}
