//! This crate executes a single read-style operation (a query, a get-more, a command or a
//! kill-cursors) against one already-selected MongoDB node.
//!
//! Node discovery, connection pooling, read-preference selection and the wire protocol are owned
//! by the caller, who exposes them through the [`Node`] trait. What this crate decides is how to
//! interpret the [`Reply`](protocol::Reply): a read that failed because the node's session was
//! invalidated (for example after a primary stepped down) is re-authenticated with the credential
//! the node already holds for that database and sent again, a bounded number of times. Any other
//! failure is surfaced as an [`ErrorKind::ReadFailure`](error::ErrorKind::ReadFailure) tagged as
//! a potential reconfiguration, so callers may choose to rediscover the topology and route the
//! read elsewhere.
//!
//! ```no_run
//! # async fn foo(node: impl mongo_read::Node) -> mongo_read::error::Result<()> {
//! use mongo_read::{bson::doc, protocol::Query, Read};
//!
//! let query = Query::builder()
//!     .database("admin")
//!     .collection("users")
//!     .selector(doc! { "name": "tester" })
//!     .build();
//!
//! let reply = Read::new(query).execute(&node).await?;
//! for document in reply.documents() {
//!     println!("{}", document);
//! }
//! # Ok(()) }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod error;
mod node;
pub mod options;
pub mod protocol;
mod read;
mod trace;

pub use bson;

pub use crate::{
    auth::Credential,
    node::Node,
    options::ReadOptions,
    read::{Disposition, Read},
};

/// A boxed future, as returned by [`Node`] implementations.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;
