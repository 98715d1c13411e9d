use mongodb::error::ErrorKind;
use thiserror::Error;

/// Failure kinds distinguished at the top level.
///
/// `Connection` and `Operation` are handled: logged and turned into a
/// non-zero exit without a trace. `Fatal` covers everything else (malformed
/// URI, report I/O, driver internals) and surfaces as a crash.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("cannot reach MongoDB: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("MongoDB operation failed: {0}")]
    Operation(#[source] mongodb::error::Error),

    #[error(transparent)]
    Fatal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;

impl From<mongodb::error::Error> for StatsError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => Self::Connection(err),
            ErrorKind::Command(_) | ErrorKind::Authentication { .. } => Self::Operation(err),
            _ => Self::Fatal(err.into()),
        }
    }
}

impl From<std::io::Error> for StatsError {
    fn from(err: std::io::Error) -> Self {
        Self::Fatal(err.into())
    }
}
