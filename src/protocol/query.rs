use typed_builder::TypedBuilder;

use super::QueryFlags;
use crate::bson::Document;

/// A query against a collection.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[non_exhaustive]
pub struct Query {
    /// The database containing the collection.
    #[builder(setter(into))]
    pub database: String,

    /// The collection to query.
    #[builder(setter(into))]
    pub collection: String,

    /// The query selector.
    #[builder(default)]
    pub selector: Document,

    /// The fields to return. All fields are returned if this is not set.
    #[builder(default, setter(strip_option))]
    pub fields: Option<Document>,

    /// The number of documents to skip.
    #[builder(default)]
    pub skip: i32,

    /// The number of documents to return in the first batch. Zero lets the server decide, and a
    /// negative value closes the cursor after the first batch.
    #[builder(default)]
    pub limit: i32,

    /// Flags that modify the query's behavior.
    #[builder(default)]
    pub flags: QueryFlags,
}

impl Query {
    /// The namespace of the query, in the form `database.collection`.
    pub fn full_collection_name(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
