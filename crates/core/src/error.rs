//! Error types for catalog construction and queries.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a [`Catalog`](crate::Catalog) from its definitions.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Read {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The catalog file is not valid TOML or does not match the catalog shape.
    #[error("Failed to parse catalog file {}: {source}", .path.display())]
    Parse {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// Two modules share a name.
    #[error("Duplicate module '{module}'")]
    DuplicateModule {
        /// The repeated module name.
        module: String,
    },
    /// Two functions in one module share a name.
    #[error("Duplicate function '{function}' in module '{module}'")]
    DuplicateFunction {
        /// Module containing the functions.
        module: String,
        /// The repeated function name.
        function: String,
    },
    /// Two parameters of one function share a name.
    #[error("Duplicate parameter '{parameter}' in function '{module}.{function}'")]
    DuplicateParameter {
        /// Module containing the function.
        module: String,
        /// Function declaring the parameters.
        function: String,
        /// The repeated parameter name.
        parameter: String,
    },
    /// A required parameter declares a default value.
    #[error("Required parameter '{parameter}' in function '{module}.{function}' has a default value")]
    RequiredWithDefault {
        /// Module containing the function.
        module: String,
        /// Function declaring the parameter.
        function: String,
        /// The offending parameter.
        parameter: String,
    },
}

/// Outcome of a query that did not produce a value.
///
/// `NoResults` is not a failure from the caller's point of view; see
/// [`QueryError::is_error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested module is not in the catalog.
    #[error("Module '{module}' not found in the Codebolt SDK")]
    ModuleNotFound {
        /// Requested module name.
        module: String,
    },
    /// The module exists but does not declare the requested function.
    #[error("Function '{function}' not found in module '{module}'")]
    FunctionNotFound {
        /// Requested module name.
        module: String,
        /// Requested function name.
        function: String,
    },
    /// A search matched nothing.
    #[error("No results found for query: \"{query}\". Try a different search term.")]
    NoResults {
        /// The query exactly as received.
        query: String,
    },
}

impl QueryError {
    /// Whether the outcome is surfaced to callers with the error flag set.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::NoResults { .. })
    }
}
