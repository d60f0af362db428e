use typed_builder::TypedBuilder;

/// A request for the next batch of an open cursor.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[non_exhaustive]
pub struct GetMore {
    /// The database containing the collection.
    #[builder(setter(into))]
    pub database: String,

    /// The collection the cursor was opened on.
    #[builder(setter(into))]
    pub collection: String,

    /// The id of the cursor.
    pub cursor_id: i64,

    /// The number of documents to return. Zero lets the server decide.
    #[builder(default)]
    pub limit: i32,
}

impl GetMore {
    /// The namespace of the cursor, in the form `database.collection`.
    pub fn full_collection_name(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
