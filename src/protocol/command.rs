use super::{Query, QueryFlags};
use crate::bson::Document;

/// The collection name commands are sent to.
const COMMAND_COLLECTION: &str = "$cmd";

/// A database command.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Command {
    /// The database the command runs against.
    pub database: String,

    /// The command document, e.g. `{ "ping": 1 }`.
    pub selector: Document,
}

impl Command {
    /// Commands always ask for exactly one reply document.
    pub const LIMIT: i32 = -1;

    /// Creates a new command against the given database.
    pub fn new(database: impl Into<String>, selector: Document) -> Self {
        Self {
            database: database.into(),
            selector,
        }
    }

    /// The namespace the command is addressed to, in the form `database.$cmd`.
    pub fn full_collection_name(&self) -> String {
        format!("{}.{}", self.database, COMMAND_COLLECTION)
    }

    /// The command expressed as the query on the `$cmd` collection that carries it.
    pub fn as_query(&self, flags: QueryFlags) -> Query {
        Query::builder()
            .database(self.database.clone())
            .collection(COMMAND_COLLECTION)
            .selector(self.selector.clone())
            .limit(Self::LIMIT)
            .flags(flags)
            .build()
    }
}
