//! Contains the `Error` and `Result` types that `mongo-read` uses.

use std::{collections::HashSet, sync::Arc};

use thiserror::Error;

use crate::{bson::Document, protocol::Operation};

/// Potential reconfiguration error label. This label is added to every
/// [`ErrorKind::ReadFailure`]: the failure may have been caused by a topology change on the
/// server side (such as a primary stepping down) rather than by the read itself, so callers may
/// rediscover the topology and retry the read against a different node.
pub const POTENTIAL_RECONFIGURATION: &str = "PotentialReconfiguration";

/// The result type for all methods that can return an error in the `mongo-read` crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur in the `mongo-read` crate. The inner
/// [`ErrorKind`](enum.ErrorKind.html) is wrapped in a `Box` to keep the error small.
#[derive(Clone, Debug, Error)]
#[error("Kind: {kind}, labels: {labels:?}")]
#[non_exhaustive]
pub struct Error {
    /// The type of error that occurred.
    pub kind: Box<ErrorKind>,

    labels: HashSet<String>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, labels: Option<impl IntoIterator<Item = String>>) -> Self {
        let labels: HashSet<String> = labels
            .map(|labels| labels.into_iter().collect())
            .unwrap_or_default();
        Self {
            kind: Box::new(kind),
            labels,
        }
    }

    /// Creates the terminal failure for a read whose reply indicated an error. `details` is the
    /// first document of the failing reply.
    pub(crate) fn read_failure(operation: Operation, details: Option<Document>) -> Self {
        Self::new(
            ErrorKind::ReadFailure { operation, details },
            Some([POTENTIAL_RECONFIGURATION.to_string()]),
        )
    }

    /// Creates an `Authentication` error with the provided reason.
    pub fn authentication_error(reason: impl Into<String>) -> Self {
        ErrorKind::Authentication {
            message: reason.into(),
        }
        .into()
    }

    /// Creates an `InvalidResponse` error with the provided message.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ErrorKind::InvalidResponse {
            message: message.into(),
        }
        .into()
    }

    /// Returns the labels for this error.
    pub fn labels(&self) -> &HashSet<String> {
        &self.labels
    }

    /// Whether this error contains the specified label.
    pub fn contains_label<T: AsRef<str>>(&self, label: T) -> bool {
        self.labels.contains(label.as_ref())
    }

    /// Whether this error may have been caused by a server-side reconfiguration, in which case the
    /// read may succeed against another node.
    pub fn is_potential_reconfiguration(&self) -> bool {
        self.contains_label(POTENTIAL_RECONFIGURATION)
    }

    /// Whether this error is a terminal read failure reported by the server.
    pub fn is_read_failure(&self) -> bool {
        matches!(self.kind.as_ref(), ErrorKind::ReadFailure { .. })
    }

    /// Whether this error occurred while authenticating.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind.as_ref(), ErrorKind::Authentication { .. })
    }

    /// Whether this error is a network error.
    pub fn is_network_error(&self) -> bool {
        matches!(self.kind.as_ref(), ErrorKind::Io(..))
    }

    /// The operation that failed, if this is a read failure.
    pub fn failed_operation(&self) -> Option<&Operation> {
        match self.kind.as_ref() {
            ErrorKind::ReadFailure { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// The first document of the failing reply, if this is a read failure and the reply carried
    /// any documents.
    pub fn failure_details(&self) -> Option<&Document> {
        match self.kind.as_ref() {
            ErrorKind::ReadFailure { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}

impl<E> From<E> for Error
where
    ErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        Error::new(err.into(), None::<Option<String>>)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<std::io::ErrorKind> for ErrorKind {
    fn from(err: std::io::ErrorKind) -> Self {
        Self::Io(Arc::new(err.into()))
    }
}

/// The types of errors that can occur.
#[allow(missing_docs)]
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The server reported a failure for a read operation that could not be resolved by
    /// re-authenticating. Errors of this kind always carry the
    /// [`POTENTIAL_RECONFIGURATION`] label.
    #[error("Read failed: {}", failure_message(.operation, .details))]
    #[non_exhaustive]
    ReadFailure {
        /// The operation that failed.
        operation: Operation,

        /// The first document of the failing reply.
        details: Option<Document>,
    },

    /// An error occurred while a node attempted to authenticate.
    #[error("{message}")]
    #[non_exhaustive]
    Authentication { message: String },

    /// Wrapper around [`std::io::Error`](https://doc.rust-lang.org/std/io/struct.Error.html).
    #[error("I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The server returned an invalid reply to a database operation.
    #[error("The server returned an invalid reply to a database operation: {message}")]
    #[non_exhaustive]
    InvalidResponse { message: String },
}

fn failure_message(operation: &Operation, details: &Option<Document>) -> String {
    let target = format!(
        "{} on database \"{}\"",
        operation.name(),
        operation.database()
    );
    match details {
        Some(details) => format!("{target}: {details}"),
        None => format!("{target} with no details"),
    }
}
