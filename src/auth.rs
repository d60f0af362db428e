//! Contains the credential type a [`Node`](crate::Node) stores for each database it is
//! authenticated against.

use std::fmt::Debug;

use serde::Deserialize;
use typed_builder::TypedBuilder;

/// A struct containing authentication information.
///
/// A node keeps one credential per database it has logged in to, and the executor hands that
/// credential back to [`Node::login`](crate::Node::login) when the session needs to be
/// re-established.
#[derive(Clone, Default, Deserialize, PartialEq, TypedBuilder)]
#[builder(field_defaults(default, setter(into, strip_option)))]
#[non_exhaustive]
pub struct Credential {
    /// The username to authenticate with.
    pub username: Option<String>,

    /// The password to authenticate with.
    pub password: Option<String>,

    /// The database used to authenticate. Defaults to the database being logged in to.
    pub source: Option<String>,
}

impl Credential {
    /// The database to authenticate against when logging in to `database`.
    pub fn resolved_source<'a>(&'a self, database: &'a str) -> &'a str {
        self.source.as_deref().unwrap_or(database)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential")
            .field(&"REDACTED".to_string())
            .finish()
    }
}
