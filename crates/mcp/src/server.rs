//! The four documentation tools wired onto [`McpServer`].

use crate::protocol::{McpServer, ToolResult};
use cbdocs_core::operation::{self, Operation};
use cbdocs_core::{Catalog, Response};
use serde::Deserialize;
use std::sync::Arc;

/// Name reported to MCP clients.
pub const SERVER_NAME: &str = "CodeboltDocs";

/// State shared by every tool handler.
#[derive(Debug)]
pub struct DocsContext {
    /// The catalog all queries read.
    pub catalog: Catalog,
}

impl From<Response> for ToolResult {
    fn from(response: Response) -> Self {
        if response.is_error {
            Self::error(response.payload)
        } else {
            Self::success(response.payload)
        }
    }
}

// --- Tools ---

/// Arguments of tools that take none.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EmptyArgs {
    /// Dummy parameter for no-parameter tools
    #[serde(default)]
    pub random_string: Option<String>,
}

/// Arguments of `getSdkFunctionDetail`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDetailArgs {
    /// The name of the module containing the function
    pub module_name: String,
    /// The name of the function to get details for
    pub function_name: String,
}

/// Arguments of `searchSdkDocs`.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchArgs {
    /// The search query
    pub query: String,
}

/// Build the documentation server around `catalog`.
pub fn build_server(catalog: Catalog) -> McpServer<DocsContext> {
    McpServer::new(DocsContext { catalog }, SERVER_NAME, env!("CARGO_PKG_VERSION"))
        .tool(
            operation::LIST_FUNCTIONS,
            describe(operation::LIST_FUNCTIONS),
            list_functions_tool,
        )
        .tool(
            operation::FUNCTION_DETAIL,
            describe(operation::FUNCTION_DETAIL),
            function_detail_tool,
        )
        .tool(
            operation::SETUP_INFO,
            describe(operation::SETUP_INFO),
            setup_info_tool,
        )
        .tool(operation::SEARCH, describe(operation::SEARCH), search_tool)
}

fn describe(name: &str) -> &'static str {
    operation::describe(name).unwrap_or_default()
}

async fn list_functions_tool(ctx: Arc<DocsContext>, _args: EmptyArgs) -> ToolResult {
    Operation::ListFunctions.execute(&ctx.catalog).into()
}

async fn function_detail_tool(ctx: Arc<DocsContext>, args: FunctionDetailArgs) -> ToolResult {
    Operation::FunctionDetail {
        module_name: args.module_name,
        function_name: args.function_name,
    }
    .execute(&ctx.catalog)
    .into()
}

async fn setup_info_tool(ctx: Arc<DocsContext>, _args: EmptyArgs) -> ToolResult {
    Operation::SetupInfo.execute(&ctx.catalog).into()
}

async fn search_tool(ctx: Arc<DocsContext>, args: SearchArgs) -> ToolResult {
    Operation::Search { query: args.query }
        .execute(&ctx.catalog)
        .into()
}
