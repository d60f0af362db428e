/// A request to close open cursors.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct KillCursors {
    /// The database the cursors were opened on.
    pub database: String,

    /// The ids of the cursors to close.
    pub cursor_ids: Vec<i64>,
}

impl KillCursors {
    /// Creates a request to close the given cursors.
    pub fn new(database: impl Into<String>, cursor_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            database: database.into(),
            cursor_ids: cursor_ids.into_iter().collect(),
        }
    }
}
