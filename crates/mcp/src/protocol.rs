//! Minimal JSON-RPC 2.0 / MCP tool server over newline-delimited streams.
//!
//! Wire types mirror the JSON-RPC and MCP field names one to one.

#![allow(missing_docs)]

use futures_util::future::BoxFuture;
use schemars::schema_for;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

// JSON-RPC constants
pub const JSONRPC_VERSION: &str = "2.0";
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

// JSON-RPC 2.0 Types
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    /// `None` when the member is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.jsonrpc != JSONRPC_VERSION {
            return Err("Invalid JSON-RPC version, expected 2.0");
        }
        Ok(())
    }

    /// A message without an `id` member expects no reply.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn new(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            JsonRpcError::internal_error(self.id.clone(), format!("Failed to serialize response: {e}"))
                .to_json()
        })
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub jsonrpc: &'static str,
    pub id: Value,
    pub error: ErrorObject,
}

impl JsonRpcError {
    pub fn new(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            error: ErrorObject {
                code,
                message: message.into(),
            },
        }
    }

    pub fn parse_error() -> Self {
        Self::new(Value::Null, PARSE_ERROR, "Parse error")
    }

    pub fn method_not_found(id: Value, method: &str) -> Self {
        Self::new(id, METHOD_NOT_FOUND, format!("Method not found: {method}"))
    }

    pub fn invalid_params(id: Value, message: impl Into<String>) -> Self {
        Self::new(id, INVALID_PARAMS, message)
    }

    pub fn internal_error(id: Value, message: impl Into<String>) -> Self {
        Self::new(id, INTERNAL_ERROR, message)
    }

    pub fn to_json(&self) -> String {
        // Only strings, integers and caller-supplied ids are involved.
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"jsonrpc":"2.0","id":null,"error":{{"code":{},"message":"Internal error"}}}}"#,
                self.error.code
            )
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

// MCP Protocol Types
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Outcome of `tools/call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(text: String) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: false,
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: String) -> Self {
        Self {
            content_type: "text".to_string(),
            text,
        }
    }
}

/// Type-erased async tool handler.
pub type ToolHandler<C> = Arc<dyn Fn(Arc<C>, Value) -> BoxFuture<'static, ToolResult> + Send + Sync>;

pub struct ToolDef<C> {
    pub description: String,
    pub input_schema: Value,
    pub handler: ToolHandler<C>,
}

impl<C> fmt::Debug for ToolDef<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDef")
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

/// Tool server sharing a context `C` with all handlers.
pub struct McpServer<C> {
    pub ctx: Arc<C>,
    pub tools: BTreeMap<String, ToolDef<C>>,
    pub info: ServerInfo,
}

impl<C> fmt::Debug for McpServer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McpServer")
            .field("info", &self.info)
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<C: Send + Sync + 'static> McpServer<C> {
    pub fn new(ctx: C, name: &str, version: &str) -> Self {
        Self {
            ctx: Arc::new(ctx),
            tools: BTreeMap::new(),
            info: ServerInfo {
                name: name.to_string(),
                version: version.to_string(),
            },
        }
    }

    /// Register a tool whose arguments deserialize into `A`.
    ///
    /// The JSON Schema of `A` is published in `tools/list`. Arguments that do
    /// not deserialize produce an error result without calling `handler`.
    pub fn tool<A, F, Fut>(mut self, name: &str, description: &str, handler: F) -> Self
    where
        A: DeserializeOwned + schemars::JsonSchema + Send + 'static,
        F: Fn(Arc<C>, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult> + Send + 'static,
    {
        let schema = schema_for!(A);
        let input_schema = serde_json::to_value(&schema).unwrap_or_else(|e| {
            tracing::warn!("Failed to serialize input schema for tool {name}: {e}");
            json!({ "type": "object" })
        });
        let handler = Arc::new(handler);
        let tool_name = name.to_string();
        let handler = Arc::new(move |ctx: Arc<C>, arguments: Value| -> BoxFuture<'static, ToolResult> {
            let handler = Arc::clone(&handler);
            let tool_name = tool_name.clone();
            Box::pin(async move {
                let parsed: Result<A, _> = serde_json::from_value(arguments);
                match parsed {
                    Ok(args) => handler(ctx, args).await,
                    Err(err) => {
                        tracing::warn!("Rejected arguments for tool {tool_name}: {err}");
                        ToolResult::error(format!("Invalid tool arguments: {err}"))
                    }
                }
            })
        });

        self.tools.insert(
            name.to_string(),
            ToolDef {
                description: description.to_string(),
                input_schema,
                handler,
            },
        );
        self
    }

    /// Registered tools, sorted by name.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .iter()
            .map(|(name, def)| Tool {
                name: name.clone(),
                description: def.description.clone(),
                input_schema: def.input_schema.clone(),
            })
            .collect()
    }

    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolResult, String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| format!("Unknown tool: {name}"))?;
        Ok((tool.handler)(Arc::clone(&self.ctx), arguments).await)
    }

    /// Result body of `initialize`.
    pub fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": self.info,
        })
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn run_stdio(&self) -> Result<(), String> {
        tracing::info!("{} {} listening on stdio", self.info.name, self.info.version);
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve one JSON message per line from `reader`, replying on `writer`.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), String>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .await
                .map_err(|e| format!("Error reading request: {e}"))?;
            if read == 0 {
                tracing::debug!("Input closed, stopping");
                return Ok(());
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(trimmed).await {
                write_response(&mut writer, &response).await?;
            }
        }
    }

    /// Handle one raw message, returning the reply line if one is due.
    pub async fn handle_message(&self, msg: &str) -> Option<String> {
        let request: JsonRpcRequest = match serde_json::from_str(msg) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!("Unparseable message: {e}");
                return Some(JsonRpcError::parse_error().to_json());
            }
        };

        if let Err(e) = request.validate() {
            tracing::warn!("Invalid request: {e}");
            return Some(JsonRpcError::parse_error().to_json());
        }

        if request.is_notification() {
            tracing::debug!("Notification {}", request.method);
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        let params = request.params.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::new(id, self.initialize_result()).to_json(),
            "ping" => JsonRpcResponse::new(id, json!({})).to_json(),
            "tools/list" => JsonRpcResponse::new(id, json!({ "tools": self.list_tools() })).to_json(),
            "tools/call" => self.handle_tools_call(id, params).await,
            method => {
                tracing::warn!("Unknown method {method}");
                JsonRpcError::method_not_found(id, method).to_json()
            }
        };

        Some(response)
    }

    async fn handle_tools_call(&self, id: Value, params: Value) -> String {
        let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
            return JsonRpcError::invalid_params(id, "Missing 'name' parameter").to_json();
        };

        let arguments = match params.get("arguments") {
            Some(Value::Null) | None => json!({}),
            Some(args) => args.clone(),
        };

        tracing::debug!("Calling tool {tool_name}");
        match self.call_tool(tool_name, arguments).await {
            Ok(result) => match serde_json::to_value(result) {
                Ok(value) => JsonRpcResponse::new(id, value).to_json(),
                Err(e) => JsonRpcError::internal_error(id, format!("Failed to serialize result: {e}")).to_json(),
            },
            Err(err) => JsonRpcError::invalid_params(id, err).to_json(),
        }
    }
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &str) -> Result<(), String> {
    writer
        .write_all(response.as_bytes())
        .await
        .map_err(|e| format!("Failed to write response: {e}"))?;
    writer
        .write_all(b"\n")
        .await
        .map_err(|e| format!("Failed to write newline: {e}"))?;
    writer
        .flush()
        .await
        .map_err(|e| format!("Failed to flush output: {e}"))?;
    Ok(())
}
