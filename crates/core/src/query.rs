//! Read-only queries over a [`Catalog`].
//!
//! Every function here is pure: results depend only on the catalog and the
//! arguments, so repeated calls yield identical output.

use crate::catalog::{Catalog, Function, Parameter};
use crate::error::QueryError;
use serde::Serialize;

/// One row of the function listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSummary<'a> {
    /// Owning module.
    pub module: &'a str,
    /// Function name.
    pub function: &'a str,
    /// Rendered call shape, see [`render_signature`].
    pub signature: String,
    /// Function description.
    pub description: &'a str,
}

/// Detail view of one function. The name is implied by the request and is
/// not repeated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FunctionDetail<'a> {
    /// Function description.
    pub description: &'a str,
    /// Parameters in declaration order.
    pub parameters: &'a [Parameter],
    /// Return type description.
    pub returns: &'a str,
    /// Usage example.
    pub example: &'a str,
}

impl<'a> From<&'a Function> for FunctionDetail<'a> {
    fn from(function: &'a Function) -> Self {
        Self {
            description: &function.description,
            parameters: &function.parameters,
            returns: &function.returns,
            example: &function.example,
        }
    }
}

/// Static bootstrap instructions for the documented SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetupInfo {
    /// How to import the SDK.
    pub import: &'static str,
    /// How to wait for the SDK to become ready.
    pub initialization: &'static str,
    /// A first call against the SDK.
    pub usage: &'static str,
    /// The available modules.
    pub modules: &'static str,
}

const SETUP_INFO: SetupInfo = SetupInfo {
    import: "import codebolt from '@codebolt/codeboltjs';",
    initialization: "// Wait for connection to be established\nawait codebolt.waitForConnection();",
    usage: "// Example of using the SDK\nconst fileContent = await codebolt.fs.readFile('/path/to/file.txt');",
    modules: "// Available modules\n\
              // codebolt.fs - File system operations\n\
              // codebolt.git - Git operations\n\
              // codebolt.terminal - Terminal commands\n\
              // codebolt.codeutils - Code analysis utilities\n\
              // codebolt.project - Project management\n\
              // codebolt.search - Codebase search\n\
              // codebolt.llm - LLM integration\n\
              // codebolt.tools - MCP tools management\n\
              // codebolt.browser - Browser automation",
};

/// Why a search hit matched. Every tier tests name and description together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchReason {
    /// The query is a substring of the entry's name or description.
    NameOrDescription,
}

/// A single search match, tagged by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SearchHit<'a> {
    /// A module matched.
    Module {
        /// Module name.
        name: &'a str,
        /// Module description.
        description: &'a str,
        /// Match reason.
        match_reason: MatchReason,
    },
    /// A function matched.
    Function {
        /// Owning module.
        module: &'a str,
        /// Function name.
        name: &'a str,
        /// Function description.
        description: &'a str,
        /// Match reason.
        match_reason: MatchReason,
    },
    /// A parameter matched.
    Parameter {
        /// Owning module.
        module: &'a str,
        /// Owning function.
        function: &'a str,
        /// Parameter name.
        name: &'a str,
        /// Parameter description.
        description: &'a str,
        /// Match reason.
        match_reason: MatchReason,
    },
}

/// Render `name(p1: t1, p2?: t2) => returns`.
pub fn render_signature(function: &Function) -> String {
    let params = function
        .parameters
        .iter()
        .map(|p| {
            let marker = if p.optional { "?" } else { "" };
            format!("{}{marker}: {}", p.name, p.ty)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({params}) => {}", function.name, function.returns)
}

/// Every function of every module, in catalog order.
pub fn list_functions(catalog: &Catalog) -> Vec<FunctionSummary<'_>> {
    catalog
        .modules()
        .flat_map(|module| {
            module.functions.iter().map(move |function| FunctionSummary {
                module: &module.name,
                function: &function.name,
                signature: render_signature(function),
                description: &function.description,
            })
        })
        .collect()
}

/// Description, parameters, return type and example of one function.
pub fn function_detail<'a>(
    catalog: &'a Catalog,
    module: &str,
    function: &str,
) -> Result<FunctionDetail<'a>, QueryError> {
    if catalog.module(module).is_none() {
        tracing::debug!("Module '{module}' not found");
        return Err(QueryError::ModuleNotFound {
            module: module.to_string(),
        });
    }
    catalog
        .function(module, function)
        .map(FunctionDetail::from)
        .ok_or_else(|| QueryError::FunctionNotFound {
            module: module.to_string(),
            function: function.to_string(),
        })
}

/// SDK bootstrap text. Independent of the catalog contents.
pub fn setup_info() -> SetupInfo {
    SETUP_INFO
}

/// Case-insensitive substring search over modules, functions and parameters.
///
/// Hits are emitted while walking the catalog: each module, then each of its
/// functions followed by that function's parameters. An empty query matches
/// every entry.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Result<Vec<SearchHit<'a>>, QueryError> {
    let needle = query.to_lowercase();
    let is_match = |name: &str, description: &str| {
        name.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
    };

    let mut hits = Vec::new();
    for module in catalog.modules() {
        if is_match(&module.name, &module.description) {
            hits.push(SearchHit::Module {
                name: &module.name,
                description: &module.description,
                match_reason: MatchReason::NameOrDescription,
            });
        }

        for function in &module.functions {
            if is_match(&function.name, &function.description) {
                hits.push(SearchHit::Function {
                    module: &module.name,
                    name: &function.name,
                    description: &function.description,
                    match_reason: MatchReason::NameOrDescription,
                });
            }

            for param in &function.parameters {
                if is_match(&param.name, &param.description) {
                    hits.push(SearchHit::Parameter {
                        module: &module.name,
                        function: &function.name,
                        name: &param.name,
                        description: &param.description,
                        match_reason: MatchReason::NameOrDescription,
                    });
                }
            }
        }
    }

    tracing::debug!("Search for {query:?} matched {} entries", hits.len());

    if hits.is_empty() {
        return Err(QueryError::NoResults {
            query: query.to_string(),
        });
    }
    Ok(hits)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_list_functions_covers_catalog_in_order() {
        let catalog = catalog();
        let summaries = list_functions(&catalog);
        assert_eq!(summaries.len(), catalog.function_count());

        assert_eq!(summaries[0].module, "fs");
        assert_eq!(summaries[0].function, "createFile");
        let last = summaries.last().unwrap();
        assert_eq!(last.module, "browser");
        assert_eq!(last.function, "openPage");
    }

    #[test]
    fn test_signature_marks_optional_parameters() {
        let catalog = catalog();
        let summaries = list_functions(&catalog);
        let list_file = summaries.iter().find(|s| s.function == "listFile").unwrap();
        assert_eq!(
            list_file.signature,
            "listFile(folderPath: string, isRecursive?: boolean) => Promise<FileListResponse>"
        );

        for summary in &summaries {
            let function = catalog.function(summary.module, summary.function).unwrap();
            for param in &function.parameters {
                assert_eq!(
                    summary.signature.contains(&format!("{}?:", param.name)),
                    param.optional,
                    "{} in {}",
                    param.name,
                    summary.signature
                );
            }
        }
    }

    #[test]
    fn test_signature_without_parameters() {
        let catalog = catalog();
        let info = catalog.function("project", "getProjectInfo").unwrap();
        assert_eq!(render_signature(info), "getProjectInfo() => Promise<ProjectInfo>");
    }

    #[test]
    fn test_function_detail_keeps_parameter_order() {
        let catalog = catalog();
        for module in catalog.modules() {
            for declared in &module.functions {
                let detail = function_detail(&catalog, &module.name, &declared.name).unwrap();
                let names: Vec<_> = detail.parameters.iter().map(|p| &p.name).collect();
                let expected: Vec<_> = declared.parameters.iter().map(|p| &p.name).collect();
                assert_eq!(names, expected);
            }
        }
    }

    #[test]
    fn test_function_detail_not_found() {
        let catalog = catalog();
        assert_eq!(
            function_detail(&catalog, "nope", "x").unwrap_err(),
            QueryError::ModuleNotFound {
                module: "nope".to_string()
            }
        );
        assert_eq!(
            function_detail(&catalog, "fs", "nope").unwrap_err(),
            QueryError::FunctionNotFound {
                module: "fs".to_string(),
                function: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_function_names_are_case_sensitive() {
        let catalog = catalog();
        assert!(function_detail(&catalog, "FS", "readFile").is_err());
        assert!(function_detail(&catalog, "fs", "readfile").is_err());
    }

    #[test]
    fn test_setup_info_fields() {
        let value = serde_json::to_value(setup_info()).unwrap();
        assert_eq!(value["import"], json!("import codebolt from '@codebolt/codeboltjs';"));
        let modules = value["modules"].as_str().unwrap();
        assert!(modules.starts_with("// Available modules\n// codebolt.fs - File system operations\n"));
        assert!(modules.ends_with("// codebolt.browser - Browser automation"));
    }

    #[test]
    fn test_search_git() {
        let catalog = catalog();
        let hits = search(&catalog, "git").unwrap();

        assert!(hits.contains(&SearchHit::Module {
            name: "git",
            description: "Git repository operations",
            match_reason: MatchReason::NameOrDescription,
        }));
        for hit in &hits {
            if let SearchHit::Function {
                module, description, ..
            } = hit
            {
                assert!(*module == "git" || description.to_lowercase().contains("git"));
            }
        }
    }

    #[test]
    fn test_search_lowercases_catalog_text() {
        let catalog = catalog();
        let hits = search(&catalog, "llm").unwrap();
        assert!(hits.contains(&SearchHit::Function {
            module: "llm",
            name: "getCompletion",
            description: "Get a completion from an LLM",
            match_reason: MatchReason::NameOrDescription,
        }));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(search(&catalog, "GIT").unwrap(), search(&catalog, "git").unwrap());
    }

    #[test]
    fn test_search_order_follows_traversal() {
        let catalog = catalog();
        let hits = search(&catalog, "repo").unwrap();

        // git module, then status with its repoPath parameter, then commit...
        assert!(matches!(hits[0], SearchHit::Module { name: "git", .. }));
        assert!(matches!(hits[1], SearchHit::Function { name: "status", .. }));
        assert!(matches!(
            hits[2],
            SearchHit::Parameter {
                function: "status",
                name: "repoPath",
                ..
            }
        ));
        assert!(matches!(hits[3], SearchHit::Function { name: "commit", .. }));
    }

    #[test]
    fn test_search_all_tiers_at_once() {
        let catalog = catalog();
        let hits = search(&catalog, "search").unwrap();
        assert!(hits.iter().any(|h| matches!(h, SearchHit::Module { name: "search", .. })));
        assert!(hits.iter().any(|h| matches!(h, SearchHit::Function { name: "searchCodebase", .. })));
        assert!(hits.iter().any(|h| matches!(h, SearchHit::Parameter { name: "query", .. })));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = catalog();
        let hits = search(&catalog, "").unwrap();

        let modules = catalog.modules().count();
        let functions = catalog.function_count();
        let params: usize = catalog
            .modules()
            .flat_map(|m| &m.functions)
            .map(|f| f.parameters.len())
            .sum();
        assert_eq!(hits.len(), modules + functions + params);
    }

    #[test]
    fn test_search_without_hits() {
        let catalog = catalog();
        assert_eq!(
            search(&catalog, "zzz-nonexistent-zzz").unwrap_err(),
            QueryError::NoResults {
                query: "zzz-nonexistent-zzz".to_string()
            }
        );
    }

    #[test]
    fn test_search_query_is_not_trimmed() {
        let catalog = catalog();
        assert!(search(&catalog, " git ").is_err());
    }

    #[test]
    fn test_search_hit_serialization() {
        let catalog = catalog();
        let hits = search(&catalog, "openPage").unwrap();
        assert_eq!(
            serde_json::to_value(&hits).unwrap(),
            json!([{
                "type": "function",
                "module": "browser",
                "name": "openPage",
                "description": "Open a web page in the browser",
                "matchReason": "name-or-description"
            }])
        );
    }

    #[test]
    fn test_search_is_idempotent() {
        let catalog = catalog();
        let first = serde_json::to_string(&search(&catalog, "file").unwrap()).unwrap();
        let second = serde_json::to_string(&search(&catalog, "file").unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
