//! The immutable documentation catalog.
//!
//! A [`Catalog`] is built once, validated, and then only read. Modules and
//! functions iterate in declaration order; lookups by name go through hash
//! indexes built at construction.

mod builtin;
mod file;
mod model;

pub use model::{Function, Module, Parameter};

use crate::error::CatalogError;
use std::collections::{HashMap, HashSet};

/// Validated Module -> Function -> Parameter tree.
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<Module>,
    module_index: HashMap<String, usize>,
    /// Per module (same position as `modules`), function name -> position.
    function_index: Vec<HashMap<String, usize>>,
}

impl Catalog {
    /// Validate `modules` and index them for lookup.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        let mut module_index = HashMap::with_capacity(modules.len());
        let mut function_index = Vec::with_capacity(modules.len());

        for (position, module) in modules.iter().enumerate() {
            if module_index.insert(module.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateModule {
                    module: module.name.clone(),
                });
            }

            let mut functions = HashMap::with_capacity(module.functions.len());
            for (fn_position, function) in module.functions.iter().enumerate() {
                if functions.insert(function.name.clone(), fn_position).is_some() {
                    return Err(CatalogError::DuplicateFunction {
                        module: module.name.clone(),
                        function: function.name.clone(),
                    });
                }
                validate_parameters(module, function)?;
            }
            function_index.push(functions);
        }

        tracing::debug!(
            "Catalog built with {} modules and {} functions",
            modules.len(),
            function_index.iter().map(HashMap::len).sum::<usize>()
        );

        Ok(Self {
            modules,
            module_index,
            function_index,
        })
    }

    /// Modules in declaration order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Look up a module by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.module_index.get(name).map(|&i| &self.modules[i])
    }

    /// Look up a function by module and function name.
    pub fn function(&self, module: &str, function: &str) -> Option<&Function> {
        let &m = self.module_index.get(module)?;
        let &f = self.function_index[m].get(function)?;
        Some(&self.modules[m].functions[f])
    }

    /// Total number of functions across all modules.
    pub fn function_count(&self) -> usize {
        self.modules.iter().map(|m| m.functions.len()).sum()
    }
}

fn validate_parameters(module: &Module, function: &Function) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(function.parameters.len());
    for param in &function.parameters {
        if !seen.insert(param.name.as_str()) {
            return Err(CatalogError::DuplicateParameter {
                module: module.name.clone(),
                function: function.name.clone(),
                parameter: param.name.clone(),
            });
        }
        if !param.optional && param.default.is_some() {
            return Err(CatalogError::RequiredWithDefault {
                module: module.name.clone(),
                function: function.name.clone(),
                parameter: param.name.clone(),
            });
        }
    }
    Ok(())
}
