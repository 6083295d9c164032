//! The hand-authored Codebolt SDK catalog.

use super::{Catalog, Function, Module, Parameter};
use crate::error::CatalogError;
use serde_json::json;

impl Catalog {
    /// The Codebolt SDK documentation shipped with this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(vec![
            fs(),
            git(),
            terminal(),
            codeutils(),
            project(),
            search(),
            llm(),
            tools(),
            browser(),
        ])
    }
}

fn fs() -> Module {
    Module::new("fs", "File system operations")
        .function(
            Function::new(
                "createFile",
                "Creates a new file with the specified content",
                "Promise<CreateFileResponse>",
                "codebolt.fs.createFile('example.txt', 'Hello World', '/path/to/dir')",
            )
            .param(Parameter::required("fileName", "string", "The name of the file to create"))
            .param(Parameter::required(
                "source",
                "string",
                "The source content to write into the file",
            ))
            .param(Parameter::required(
                "filePath",
                "string",
                "The path where the file should be created",
            )),
        )
        .function(
            Function::new(
                "readFile",
                "Reads the content of a file",
                "Promise<ReadFileResponse>",
                "codebolt.fs.readFile('/path/to/file.txt')",
            )
            .param(Parameter::required("filePath", "string", "The path of the file to read")),
        )
        .function(
            Function::new(
                "updateFile",
                "Updates the content of a file",
                "Promise<UpdateFileResponse>",
                "codebolt.fs.updateFile('example.txt', '/path/to/dir', 'Updated content')",
            )
            .param(Parameter::required("filename", "string", "The name of the file to update"))
            .param(Parameter::required("filePath", "string", "The path of the file to update"))
            .param(Parameter::required(
                "newContent",
                "string",
                "The new content to write into the file",
            )),
        )
        .function(
            Function::new(
                "deleteFile",
                "Deletes a file",
                "Promise<DeleteFileResponse>",
                "codebolt.fs.deleteFile('example.txt', '/path/to/dir')",
            )
            .param(Parameter::required("filename", "string", "The name of the file to delete"))
            .param(Parameter::required("filePath", "string", "The path of the file to delete")),
        )
        .function(
            Function::new(
                "createFolder",
                "Creates a new folder",
                "Promise<CreateFolderResponse>",
                "codebolt.fs.createFolder('newDir', '/path/to/parent')",
            )
            .param(Parameter::required(
                "folderName",
                "string",
                "The name of the folder to create",
            ))
            .param(Parameter::required(
                "folderPath",
                "string",
                "The path where the folder should be created",
            )),
        )
        .function(
            Function::new(
                "deleteFolder",
                "Deletes a folder",
                "Promise<DeleteFolderResponse>",
                "codebolt.fs.deleteFolder('oldDir', '/path/to/parent')",
            )
            .param(Parameter::required(
                "foldername",
                "string",
                "The name of the folder to delete",
            ))
            .param(Parameter::required(
                "folderpath",
                "string",
                "The path of the folder to delete",
            )),
        )
        .function(
            Function::new(
                "listFile",
                "Lists all files and directories in the specified path",
                "Promise<FileListResponse>",
                "codebolt.fs.listFile('/path/to/dir', true)",
            )
            .param(Parameter::required("folderPath", "string", "The path to list files from"))
            .param(Parameter::optional(
                "isRecursive",
                "boolean",
                "Whether to list files recursively",
                Some(json!(false)),
            )),
        )
}

fn git() -> Module {
    let repo_path = || Parameter::required("repoPath", "string", "The path to the git repository");

    Module::new("git", "Git repository operations")
        .function(
            Function::new(
                "status",
                "Get the status of a git repository",
                "Promise<GitStatusResponse>",
                "codebolt.git.status('/path/to/repo')",
            )
            .param(repo_path()),
        )
        .function(
            Function::new(
                "commit",
                "Commit changes to a git repository",
                "Promise<GitCommitResponse>",
                "codebolt.git.commit('/path/to/repo', 'Add new feature')",
            )
            .param(repo_path())
            .param(Parameter::required("message", "string", "The commit message")),
        )
        .function(
            Function::new(
                "push",
                "Push committed changes to a remote repository",
                "Promise<GitPushResponse>",
                "codebolt.git.push('/path/to/repo')",
            )
            .param(repo_path()),
        )
        .function(
            Function::new(
                "pull",
                "Pull changes from a remote repository",
                "Promise<GitPullResponse>",
                "codebolt.git.pull('/path/to/repo')",
            )
            .param(repo_path()),
        )
}

fn terminal() -> Module {
    Module::new("terminal", "Terminal command execution").function(
        Function::new(
            "executeCommand",
            "Execute a command in the terminal",
            "Promise<CommandExecutionResponse>",
            "codebolt.terminal.executeCommand('ls -la', '/home/user')",
        )
        .param(Parameter::required("command", "string", "The command to execute"))
        .param(Parameter::optional(
            "cwd",
            "string",
            "The current working directory",
            None,
        )),
    )
}

fn codeutils() -> Module {
    Module::new("codeutils", "Utilities for code analysis and manipulation").function(
        Function::new(
            "analyzeCode",
            "Analyze code to extract functions, classes, and other definitions",
            "Promise<CodeAnalysisResult>",
            "codebolt.codeutils.analyzeCode('function add(a, b) { return a + b; }', 'javascript')",
        )
        .param(Parameter::required("code", "string", "The code to analyze"))
        .param(Parameter::required(
            "language",
            "string",
            "The programming language of the code",
        )),
    )
}

fn project() -> Module {
    Module::new("project", "Project management functionality").function(Function::new(
        "getProjectInfo",
        "Get information about the current project",
        "Promise<ProjectInfo>",
        "codebolt.project.getProjectInfo()",
    ))
}

fn search() -> Module {
    Module::new("search", "Search functionality within the codebase").function(
        Function::new(
            "searchCodebase",
            "Search the codebase for a specific query",
            "Promise<SearchResults>",
            "codebolt.search.searchCodebase('function main', '/src', '*.js')",
        )
        .param(Parameter::required("query", "string", "The search query"))
        .param(Parameter::optional("path", "string", "The path to search in", None))
        .param(Parameter::optional(
            "filePattern",
            "string",
            "Pattern to match files",
            None,
        )),
    )
}

fn llm() -> Module {
    Module::new("llm", "Large Language Model integration").function(
        Function::new(
            "getCompletion",
            "Get a completion from an LLM",
            "Promise<LLMCompletionResponse>",
            "codebolt.llm.getCompletion('Write a function that adds two numbers', 'gpt-4', 500)",
        )
        .param(Parameter::required("prompt", "string", "The prompt to send to the LLM"))
        .param(Parameter::optional(
            "model",
            "string",
            "The model to use",
            Some(json!("gpt-4")),
        ))
        .param(Parameter::optional(
            "maxTokens",
            "number",
            "The maximum number of tokens to generate",
            Some(json!(1000)),
        )),
    )
}

fn tools() -> Module {
    Module::new("tools", "Tools management for external MCP toolboxes")
        .function(Function::new(
            "getAvailableToolBoxes",
            "Get all available toolboxes",
            "Promise<ToolboxList>",
            "codebolt.tools.getAvailableToolBoxes()",
        ))
        .function(
            Function::new(
                "searchAvailableToolBoxes",
                "Search for available toolboxes matching a query",
                "Promise<ToolboxList>",
                "codebolt.tools.searchAvailableToolBoxes('git')",
            )
            .param(Parameter::required("query", "string", "The search query")),
        )
        .function(
            Function::new(
                "executeTool",
                "Execute a specific tool with provided parameters",
                "Promise<ToolExecutionResult>",
                "codebolt.tools.executeTool('GitTools', 'commit', { path: '/repo', message: 'Update' })",
            )
            .param(Parameter::required(
                "toolbox",
                "string",
                "The name of the toolbox containing the tool",
            ))
            .param(Parameter::required("toolName", "string", "The name of the tool to execute"))
            .param(Parameter::required(
                "params",
                "object",
                "Parameters to pass to the tool",
            )),
        )
}

fn browser() -> Module {
    Module::new("browser", "Browser automation and interaction").function(
        Function::new(
            "openPage",
            "Open a web page in the browser",
            "Promise<BrowserPageResponse>",
            "codebolt.browser.openPage('https://example.com')",
        )
        .param(Parameter::required("url", "string", "The URL to open")),
    )
}
