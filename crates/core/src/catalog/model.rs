//! Module, function and parameter records.
//!
//! Type descriptors (`type`, `returns`) are opaque text describing the
//! documented SDK. They are never interpreted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A documented SDK module such as `fs` or `git`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module name, unique across the catalog.
    pub name: String,
    /// Human readable summary.
    pub description: String,
    /// Functions in declaration order.
    #[serde(default)]
    pub functions: Vec<Function>,
}

/// A documented function of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// Function name, unique within its module.
    pub name: String,
    /// Human readable summary.
    pub description: String,
    /// Parameters in call order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type descriptor, e.g. `Promise<ReadFileResponse>`.
    pub returns: String,
    /// Usage sample.
    pub example: String,
}

/// A documented function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, unique within its function.
    pub name: String,
    /// Type descriptor, e.g. `string`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Human readable summary.
    pub description: String,
    /// Whether callers may omit the argument.
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// Value used when an optional argument is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl Module {
    /// Create a module with no functions.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            functions: Vec::new(),
        }
    }

    /// Append a function.
    pub fn function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }
}

impl Function {
    /// Create a function with no parameters.
    pub fn new(name: &str, description: &str, returns: &str, example: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: Vec::new(),
            returns: returns.to_string(),
            example: example.to_string(),
        }
    }

    /// Append a parameter.
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

impl Parameter {
    /// A parameter callers must supply.
    pub fn required(name: &str, ty: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            description: description.to_string(),
            optional: false,
            default: None,
        }
    }

    /// A parameter callers may omit, with an optional documented default.
    pub fn optional(name: &str, ty: &str, description: &str, default: Option<Value>) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            description: description.to_string(),
            optional: true,
            default,
        }
    }
}
