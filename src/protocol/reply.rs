use typed_builder::TypedBuilder;

use super::ResponseFlags;
use crate::bson::{Bson, Document};

/// Server error codes that mean the session is not authorized for the target database.
const UNAUTHORIZED_CODES: [i64; 4] = [13, 391, 10057, 16550];

/// The keys under which a node reports an error message, in order of priority.
const ERROR_MESSAGE_KEYS: [&str; 3] = ["err", "errmsg", "$err"];

/// A node's response to an operation.
///
/// Replies are produced by [`Node`](crate::Node) implementations, typically by decoding a reply
/// message off the wire:
///
/// ```
/// use mongo_read::{bson::doc, protocol::{Reply, ResponseFlags}};
///
/// let reply = Reply::builder()
///     .flags(ResponseFlags::QUERY_FAILURE)
///     .documents(vec![doc! { "$err": "not authorized for query on admin.users", "code": 13 }])
///     .build();
///
/// assert!(reply.query_failed());
/// assert!(reply.unauthorized());
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Reply {
    #[builder(default)]
    flags: ResponseFlags,

    #[builder(default)]
    cursor_id: i64,

    #[builder(default)]
    starting_from: i32,

    #[builder(default)]
    documents: Vec<Document>,
}

impl Reply {
    /// The flags the node set on this reply.
    pub fn flags(&self) -> ResponseFlags {
        self.flags
    }

    /// The id of the cursor this reply belongs to, or zero if the cursor is exhausted.
    pub fn cursor_id(&self) -> i64 {
        self.cursor_id
    }

    /// The position of this reply's first document within the cursor.
    pub fn starting_from(&self) -> i32 {
        self.starting_from
    }

    /// The documents returned. When the reply indicates a failure, the first document describes
    /// it.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Consumes the reply and returns its documents.
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    fn result(&self) -> Option<&Document> {
        self.documents.first()
    }

    /// The error message carried by the first document, if any.
    pub fn error_message(&self) -> Option<&str> {
        let result = self.result()?;
        ERROR_MESSAGE_KEYS
            .iter()
            .find_map(|key| result.get_str(key).ok())
    }

    /// Whether the operation failed. This is the case when the node set the query failure flag or
    /// when the first document carries an error message.
    pub fn query_failed(&self) -> bool {
        self.flags.contains(ResponseFlags::QUERY_FAILURE) || self.error_message().is_some()
    }

    /// Whether a command failed. A command succeeded only if the first document has an `ok` value
    /// of `1` or `true` and no error message.
    pub fn command_failure(&self) -> bool {
        let Some(result) = self.result() else {
            return true;
        };
        let ok = match result.get("ok") {
            Some(Bson::Boolean(b)) => *b,
            Some(val) => get_int(val) == Some(1),
            None => false,
        };
        !ok || self.error_message().is_some()
    }

    /// Whether the failure was caused by the session not being authorized for the operation.
    /// Only meaningful when [`query_failed`](Reply::query_failed) is true.
    pub fn unauthorized(&self) -> bool {
        let Some(result) = self.result() else {
            return false;
        };
        let code_matches = ["code", "assertionCode"].iter().any(|key| {
            result
                .get(key)
                .and_then(get_int)
                .is_some_and(|code| UNAUTHORIZED_CODES.contains(&code))
        });
        code_matches
            || self
                .error_message()
                .is_some_and(|msg| msg.contains("unauthorized") || msg.contains("not authorized"))
    }

    /// Whether the node no longer has the cursor a get-more asked for.
    pub fn cursor_not_found(&self) -> bool {
        self.flags.contains(ResponseFlags::CURSOR_NOT_FOUND)
    }
}

/// Coerce numeric types into an `i64` if it would be lossless to do so.
fn get_int(val: &Bson) -> Option<i64> {
    match *val {
        Bson::Int32(i) => Some(i64::from(i)),
        Bson::Int64(i) => Some(i),
        Bson::Double(f) if (f - (f as i64 as f64)).abs() <= f64::EPSILON => Some(f as i64),
        _ => None,
    }
}
