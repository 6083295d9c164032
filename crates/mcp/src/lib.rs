//! MCP tool server exposing the Codebolt SDK documentation catalog.
//!
//! [`protocol`] speaks JSON-RPC over newline-delimited streams and validates
//! tool arguments against their declared types; [`server`] registers the
//! four documentation tools.

pub mod protocol;
pub mod server;

pub use protocol::{McpServer, ToolResult};
pub use server::{DocsContext, build_server};
