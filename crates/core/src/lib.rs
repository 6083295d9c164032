//! Documentation registry and query engine for the Codebolt SDK.
//!
//! The [`Catalog`] holds the module, function and parameter tree. The
//! [`query`] functions read it, [`Response`] renders their results, and
//! [`Operation`] names the four externally callable operations.

pub mod catalog;
pub mod error;
pub mod format;
pub mod operation;
pub mod query;

pub use catalog::{Catalog, Function, Module, Parameter};
pub use error::{CatalogError, QueryError};
pub use format::Response;
pub use operation::Operation;
