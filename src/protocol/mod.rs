//! The operations a read can carry and the reply a node returns for them.
//!
//! Encoding these to and decoding them from the wire is the responsibility of the
//! [`Node`](crate::Node) implementation.

mod command;
mod flags;
mod get_more;
mod kill_cursors;
mod query;
mod reply;

use derive_more::{Display, From};

pub use self::{
    command::Command,
    flags::{QueryFlags, ResponseFlags},
    get_more::GetMore,
    kill_cursors::KillCursors,
    query::Query,
    reply::Reply,
};

/// One of the operations that can be executed as a [`Read`](crate::Read).
#[derive(Clone, Debug, Display, From, PartialEq)]
#[non_exhaustive]
pub enum Operation {
    /// A query against a collection.
    #[display("query on {}", _0.full_collection_name())]
    Query(Query),

    /// A request for the next batch of a cursor.
    #[display("getMore of cursor {} on {}", _0.cursor_id, _0.full_collection_name())]
    GetMore(GetMore),

    /// A database command.
    #[display("command on {}", _0.database)]
    Command(Command),

    /// A request to close cursors.
    #[display("killCursors of {} cursor(s) on {}", _0.cursor_ids.len(), _0.database)]
    KillCursors(KillCursors),
}

impl Operation {
    /// The database the operation targets.
    pub fn database(&self) -> &str {
        match self {
            Self::Query(query) => &query.database,
            Self::GetMore(get_more) => &get_more.database,
            Self::Command(command) => &command.database,
            Self::KillCursors(kill_cursors) => &kill_cursors.database,
        }
    }

    /// The short name of the operation, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
            Self::GetMore(_) => "getMore",
            Self::Command(_) => "command",
            Self::KillCursors(_) => "killCursors",
        }
    }
}
