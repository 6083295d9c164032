//! The externally callable operations as a typed sum.

use crate::catalog::Catalog;
use crate::format::Response;
use crate::query;

/// External name of [`Operation::ListFunctions`].
pub const LIST_FUNCTIONS: &str = "getSdkFunctionsList";
/// External name of [`Operation::FunctionDetail`].
pub const FUNCTION_DETAIL: &str = "getSdkFunctionDetail";
/// External name of [`Operation::SetupInfo`].
pub const SETUP_INFO: &str = "getSdkSetupInfo";
/// External name of [`Operation::Search`].
pub const SEARCH: &str = "searchSdkDocs";

/// A request against the documentation catalog with validated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// List every function with its signature.
    ListFunctions,
    /// Fetch one function's full record.
    FunctionDetail {
        /// Module containing the function.
        module_name: String,
        /// Function to describe.
        function_name: String,
    },
    /// Fetch SDK setup instructions.
    SetupInfo,
    /// Free-text search across the catalog.
    Search {
        /// Text to look for.
        query: String,
    },
}

impl Operation {
    /// Stable external name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListFunctions => LIST_FUNCTIONS,
            Self::FunctionDetail { .. } => FUNCTION_DETAIL,
            Self::SetupInfo => SETUP_INFO,
            Self::Search { .. } => SEARCH,
        }
    }

    /// One-line description shown to tool clients.
    pub fn description(&self) -> &'static str {
        describe(self.name()).unwrap_or_default()
    }

    /// Run the operation against `catalog`.
    pub fn execute(&self, catalog: &Catalog) -> Response {
        tracing::debug!("Executing {}", self.name());
        match self {
            Self::ListFunctions => Response::from_result(Ok(query::list_functions(catalog))),
            Self::FunctionDetail {
                module_name,
                function_name,
            } => Response::from_result(query::function_detail(catalog, module_name, function_name)),
            Self::SetupInfo => Response::from_result(Ok(query::setup_info())),
            Self::Search { query: text } => Response::from_result(query::search(catalog, text)),
        }
    }
}

/// Description for an external operation name.
pub fn describe(name: &str) -> Option<&'static str> {
    match name {
        LIST_FUNCTIONS => Some("Get a concise list of all functions available in the Codebolt SDK"),
        FUNCTION_DETAIL => Some("Get detailed information about a specific function in the Codebolt SDK"),
        SETUP_INFO => Some("Get information about initializing and setting up the Codebolt SDK"),
        SEARCH => Some("Search the Codebolt SDK documentation for specific terms"),
        _ => None,
    }
}
