//! Loading a catalog from a hand-authored TOML file.
//!
//! ```toml
//! [[modules]]
//! name = "fs"
//! description = "File system operations"
//!
//! [[modules.functions]]
//! name = "listFile"
//! description = "Lists all files and directories in the specified path"
//! returns = "Promise<FileListResponse>"
//! example = "codebolt.fs.listFile('/path/to/dir', true)"
//!
//! [[modules.functions.parameters]]
//! name = "isRecursive"
//! type = "boolean"
//! description = "Whether to list files recursively"
//! optional = true
//! default = false
//! ```

use super::{Catalog, Module};
use crate::error::CatalogError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    modules: Vec<Module>,
}

impl Catalog {
    /// Read and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded catalog file {}", path.display());
        Self::new(file.modules)
    }

    /// Parse and validate catalog TOML held in memory.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents).map_err(|source| CatalogError::Parse {
            path: "<inline>".into(),
            source,
        })?;
        Self::new(file.modules)
    }
}
