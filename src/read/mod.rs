
use crate::{
    auth::Credential,
    error::{Error, Result},
    node::Node,
    options::ReadOptions,
    protocol::{Operation, Reply},
    trace::{TracingRepresentation, READ_TRACING_EVENT_TARGET},
};

/// A read against the database, executed on a node chosen by the caller.
///
/// A `Read` holds no connection state, so the same value can be executed any number of times
/// against any node.
#[derive(Clone, Debug, PartialEq)]
pub struct Read {
    database: String,
    operation: Operation,
}

/// What the executor does with a single reply.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Disposition {
    /// The read succeeded and the reply is its result.
    Succeeded(Reply),

    /// The node rejected its session for the read's database. The node is logged in again with
    /// this credential and the read is resent.
    Reauthenticate(Credential),

    /// The read failed and will not be resent.
    Failed(Error),
}

impl Read {
    /// Creates a read for the given operation. The read targets the operation's database.
    pub fn new(operation: impl Into<Operation>) -> Self {
        let operation = operation.into();
        Self {
            database: operation.database().to_string(),
            operation,
        }
    }

    /// The database the read targets.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The operation this read sends.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Executes the read on `node` with the default [`ReadOptions`].
    ///
    /// If the node rejects the read because its session is no longer authorized for the
    /// database, and the node holds a credential for that database, the node logs in again and
    /// the read is resent once. Any other failure, or a second authorization failure, is returned
    /// as a [`ReadFailure`](crate::error::ErrorKind::ReadFailure). Errors from the node itself
    /// are returned unchanged.
    pub async fn execute<N: Node + ?Sized>(&self, node: &N) -> Result<Reply> {
        self.execute_with_options(node, &ReadOptions::default()).await
    }

    /// Executes the read on `node`, re-authenticating at most
    /// [`max_reauthentication_attempts`](ReadOptions::max_reauthentication_attempts) times.
    pub async fn execute_with_options<N: Node + ?Sized>(
        &self,
        node: &N,
        options: &ReadOptions,
    ) -> Result<Reply> {
        let mut attempts_remaining = options.resolved_max_reauthentication_attempts();

        loop {
            tracing::debug!(
                target: READ_TRACING_EVENT_TARGET,
                operation = %self.operation,
                databaseName = self.database.as_str(),
                "Read started"
            );
            let reply = node.process(&self.operation).await?;

            match self.disposition(reply, node, attempts_remaining) {
                Disposition::Succeeded(reply) => {
                    tracing::debug!(
                        target: READ_TRACING_EVENT_TARGET,
                        operation = %self.operation,
                        databaseName = self.database.as_str(),
                        cursorId = reply.cursor_id(),
                        documents = reply.documents().len(),
                        "Read succeeded"
                    );
                    return Ok(reply);
                }
                Disposition::Reauthenticate(credential) => {
                    tracing::warn!(
                        target: READ_TRACING_EVENT_TARGET,
                        operation = %self.operation,
                        databaseName = self.database.as_str(),
                        attemptsRemaining = attempts_remaining,
                        "Read unauthorized, logging in again"
                    );
                    node.login(&self.database, &credential).await?;
                    attempts_remaining -= 1;
                }
                Disposition::Failed(error) => {
                    tracing::debug!(
                        target: READ_TRACING_EVENT_TARGET,
                        operation = %self.operation,
                        databaseName = self.database.as_str(),
                        failure = error.failure_details().tracing_representation(),
                        error = error.tracing_representation(),
                        "Read failed"
                    );
                    return Err(error);
                }
            }
        }
    }

    /// Decides what to do with `reply`. A reauthentication is only chosen if the failure was an
    /// authorization failure, `node` holds a credential for the read's database, and
    /// `attempts_remaining` is nonzero.
    pub fn disposition<N: Node + ?Sized>(
        &self,
        reply: Reply,
        node: &N,
        attempts_remaining: u32,
    ) -> Disposition {
        if !reply.query_failed() {
            return Disposition::Succeeded(reply);
        }

        if reply.unauthorized() && attempts_remaining > 0 {
            if let Some(credential) = node.credential(&self.database) {
                return Disposition::Reauthenticate(credential);
            }
        }

        let details = reply.into_documents().into_iter().next();
        Disposition::Failed(Error::read_failure(self.operation.clone(), details))
    }
}

impl From<Operation> for Read {
    fn from(operation: Operation) -> Self {
        Self::new(operation)
    }
}
