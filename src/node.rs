use crate::{
    auth::Credential,
    error::Result,
    protocol::{Operation, Reply},
    BoxFuture,
};

/// A handle to one live session with one server.
///
/// Implementations own connection establishment, message framing and the table of credentials
/// the session is logged in with. A [`Read`](crate::Read) only sends operations through
/// [`process`](Node::process), looks up stored credentials, and asks the node to
/// [`login`](Node::login) again when the server rejects the session.
///
/// Errors returned by `process` or `login` (network failures, timeouts, failed authentication)
/// are propagated to the caller of [`Read::execute`](crate::Read::execute) unchanged.
pub trait Node: Send + Sync {
    /// Sends `operation` to the server and resolves to its reply.
    fn process<'a>(&'a self, operation: &'a Operation) -> BoxFuture<'a, Result<Reply>>;

    /// The credential this node is logged in to `database` with, if any. A `None` means the node
    /// is not authenticated for that database.
    fn credential(&self, database: &str) -> Option<Credential>;

    /// Authenticates against `database` with `credential`, replacing any existing session for
    /// that database. Implementations are expected to serialize concurrent logins.
    fn login<'a>(
        &'a self,
        database: &'a str,
        credential: &'a Credential,
    ) -> BoxFuture<'a, Result<()>>;
}
