//! End-to-end tests of the documentation server's JSON-RPC loop.
//!
//! Requests are fed through an in-memory reader and replies collected from
//! an in-memory writer, one JSON document per line.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use cbdocs_core::Catalog;
use cbdocs_mcp::build_server;
use cbdocs_mcp::protocol::{INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION};
use serde_json::{Value, json};

/// Send each request as one line and parse every reply line.
async fn exchange(requests: &[Value]) -> Vec<Value> {
    let server = build_server(Catalog::builtin().unwrap());
    let input: String = requests.iter().map(|r| format!("{r}\n")).collect();
    let mut output = Vec::new();

    server.serve(input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

async fn call(name: &str, arguments: Value) -> Value {
    let replies = exchange(&[json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })])
    .await;
    replies[0]["result"].clone()
}

fn payload(result: &Value) -> &str {
    result["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn test_initialize_and_list_tools() {
    let replies = exchange(&[
        json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
        json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
    ])
    .await;

    // The notification produces no reply.
    assert_eq!(replies.len(), 2);

    assert_eq!(replies[0]["id"], 1);
    assert_eq!(replies[0]["result"]["protocolVersion"], PROTOCOL_VERSION);
    assert_eq!(replies[0]["result"]["serverInfo"]["name"], "CodeboltDocs");

    let names: Vec<_> = replies[1]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "getSdkFunctionDetail",
            "getSdkFunctionsList",
            "getSdkSetupInfo",
            "searchSdkDocs"
        ]
    );
}

#[tokio::test]
async fn test_functions_list() {
    let result = call("getSdkFunctionsList", json!({})).await;
    assert_eq!(result["isError"], false);

    let list: Value = serde_json::from_str(payload(&result)).unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 20);
    let llm = list.iter().find(|s| s["module"] == "llm").unwrap();
    assert_eq!(
        llm["signature"],
        "getCompletion(prompt: string, model?: string, maxTokens?: number) => Promise<LLMCompletionResponse>"
    );
}

#[tokio::test]
async fn test_no_argument_tools_accept_missing_or_dummy_arguments() {
    let replies = exchange(&[
        json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": { "name": "getSdkSetupInfo" } }),
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": { "name": "getSdkSetupInfo", "arguments": { "random_string": "x" } }
        }),
    ])
    .await;

    for reply in &replies {
        let result = &reply["result"];
        assert_eq!(result["isError"], false);
        let info: Value = serde_json::from_str(payload(result)).unwrap();
        assert_eq!(info["import"], "import codebolt from '@codebolt/codeboltjs';");
    }
}

#[tokio::test]
async fn test_function_detail() {
    let result = call(
        "getSdkFunctionDetail",
        json!({ "moduleName": "fs", "functionName": "listFile" }),
    )
    .await;
    assert_eq!(result["isError"], false);

    let detail: Value = serde_json::from_str(payload(&result)).unwrap();
    let object = detail.as_object().unwrap();
    assert!(!object.contains_key("name"));
    assert_eq!(object.len(), 4);
    assert_eq!(detail["description"], "Lists all files and directories in the specified path");
    assert_eq!(detail["returns"], "Promise<FileListResponse>");
    assert_eq!(
        detail["parameters"][1],
        json!({
            "name": "isRecursive",
            "type": "boolean",
            "description": "Whether to list files recursively",
            "optional": true,
            "default": false
        })
    );
}

#[tokio::test]
async fn test_function_detail_not_found() {
    let result = call(
        "getSdkFunctionDetail",
        json!({ "moduleName": "nope", "functionName": "x" }),
    )
    .await;
    assert_eq!(result["isError"], true);
    assert_eq!(payload(&result), "Module 'nope' not found in the Codebolt SDK");

    let result = call(
        "getSdkFunctionDetail",
        json!({ "moduleName": "fs", "functionName": "nope" }),
    )
    .await;
    assert_eq!(result["isError"], true);
    assert_eq!(payload(&result), "Function 'nope' not found in module 'fs'");
}

#[tokio::test]
async fn test_missing_argument_is_rejected_before_query() {
    let result = call("getSdkFunctionDetail", json!({ "moduleName": "fs" })).await;
    assert_eq!(result["isError"], true);
    assert!(payload(&result).starts_with("Invalid tool arguments"));
}

#[tokio::test]
async fn test_search() {
    let result = call("searchSdkDocs", json!({ "query": "git" })).await;
    assert_eq!(result["isError"], false);

    let hits: Value = serde_json::from_str(payload(&result)).unwrap();
    assert_eq!(
        hits[0],
        json!({
            "type": "module",
            "name": "git",
            "description": "Git repository operations",
            "matchReason": "name-or-description"
        })
    );
}

#[tokio::test]
async fn test_search_no_results() {
    let result = call("searchSdkDocs", json!({ "query": "zzz-nonexistent-zzz" })).await;
    assert_eq!(result["isError"], false);
    assert_eq!(
        payload(&result),
        "No results found for query: \"zzz-nonexistent-zzz\". Try a different search term."
    );
}

#[tokio::test]
async fn test_search_is_byte_identical_on_repeat() {
    let first = call("searchSdkDocs", json!({ "query": "path" })).await;
    let second = call("searchSdkDocs", json!({ "query": "path" })).await;
    assert_eq!(payload(&first), payload(&second));
}

#[tokio::test]
async fn test_protocol_errors() {
    let server = build_server(Catalog::builtin().unwrap());
    let input = concat!(
        "not json\n",
        "\n",
        r#"{"jsonrpc":"2.0","id":7,"method":"resources/list"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"nope"}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":10,"method":"ping"}"#,
        "\n",
    );
    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    let replies: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // The blank line is skipped.
    assert_eq!(replies.len(), 5);
    assert_eq!(replies[0]["error"]["code"], PARSE_ERROR);
    assert_eq!(replies[1]["error"]["code"], METHOD_NOT_FOUND);
    assert_eq!(replies[1]["id"], 7);
    assert_eq!(replies[2]["error"]["code"], INVALID_PARAMS);
    assert_eq!(replies[2]["error"]["message"], "Unknown tool: nope");
    assert_eq!(replies[3]["error"]["code"], INVALID_PARAMS);
    assert_eq!(replies[4]["result"], json!({}));
}
