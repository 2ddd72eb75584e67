//! Template registry backed by Handlebars

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use handlebars::{Handlebars, Template};
use tracing::{debug, info, warn};

use super::embedded;
use crate::config::Config;
use crate::error::CompileError;
use crate::helpers;

/// Template file extension picked up by [`TemplateRegistry::register_dir`]
pub const TEMPLATE_EXTENSION: &str = "hbs";

/// Mapping from element type to compiled template
///
/// Built once at startup; rendering only ever takes `&self`, so a registry can
/// be shared across threads without locking.
pub struct TemplateRegistry {
    /// Handlebars engine holding the compiled templates and helpers
    hbs: Handlebars<'static>,
    /// Source text per element type
    sources: BTreeMap<String, String>,
}

impl TemplateRegistry {
    /// Create an empty registry with the predicate helpers installed
    ///
    /// Strict mode is on: a template that reads a field the element does not
    /// have fails to render instead of printing nothing.
    pub fn new() -> Self {
        debug!("TemplateRegistry::new: called");
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        helpers::register_helpers(&mut hbs);
        Self {
            hbs,
            sources: BTreeMap::new(),
        }
    }

    /// Create a registry holding the five built-in templates
    pub fn with_builtins() -> Result<Self, CompileError> {
        debug!("TemplateRegistry::with_builtins: called");
        let mut registry = Self::new();
        for (name, source) in embedded::BUILTIN_TEMPLATES {
            registry.register(name, source)?;
        }
        info!("Compiled {} built-in templates", registry.len());
        Ok(registry)
    }

    /// Create a registry from configuration: built-ins, then the template directory
    pub fn from_config(config: &Config) -> Result<Self, CompileError> {
        debug!(
            template_dir = ?config.template_dir,
            strict_mode = config.strict_mode,
            "TemplateRegistry::from_config: called"
        );
        let mut registry = Self::with_builtins()?;
        registry.set_strict_mode(config.strict_mode);
        if let Some(ref dir) = config.template_dir {
            let count = registry.register_dir(dir)?;
            info!("Registered {} templates from {}", count, dir.display());
        } else {
            debug!("TemplateRegistry::from_config: no template directory configured");
        }
        Ok(registry)
    }

    /// Compile `source` and store it under `element_type`
    ///
    /// On failure the registry is left exactly as it was.
    pub fn register(&mut self, element_type: &str, source: &str) -> Result<(), CompileError> {
        debug!(%element_type, source_len = source.len(), "TemplateRegistry::register: called");
        self.hbs
            .register_template_string(element_type, source)
            .map_err(|e| CompileError::Syntax {
                name: element_type.to_string(),
                source: Box::new(e),
            })?;

        if self.sources.insert(element_type.to_string(), source.to_string()).is_some() {
            warn!("Template '{}' replaced an existing registration", element_type);
        }
        Ok(())
    }

    /// Register every `*.hbs` file in `dir`, named by file stem
    ///
    /// Files are registered in sorted path order. Returns how many were registered.
    pub fn register_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, CompileError> {
        let dir = dir.as_ref();
        debug!(?dir, "TemplateRegistry::register_dir: called");
        let read_err = |path: &Path, source| CompileError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| read_err(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION))
            .collect();
        paths.sort();

        let mut count = 0;
        for path in paths {
            let Some(element_type) = path.file_stem().and_then(|s| s.to_str()) else {
                debug!(?path, "TemplateRegistry::register_dir: skipping non-UTF-8 file name");
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|e| read_err(&path, e))?;
            if embedded::get_embedded(element_type).is_some() {
                warn!("Overriding built-in template '{}' with {}", element_type, path.display());
            }
            self.register(element_type, &source)?;
            count += 1;
        }
        Ok(count)
    }

    /// Compiled template for an element type
    pub fn lookup(&self, element_type: &str) -> Option<&Template> {
        debug!(%element_type, "TemplateRegistry::lookup: called");
        self.hbs.get_template(element_type)
    }

    /// Source text a template was compiled from
    pub fn source(&self, element_type: &str) -> Option<&str> {
        self.sources.get(element_type).map(String::as_str)
    }

    pub fn contains(&self, element_type: &str) -> bool {
        self.sources.contains_key(element_type)
    }

    /// Registered element types, sorted
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn set_strict_mode(&mut self, strict: bool) {
        debug!(%strict, "TemplateRegistry::set_strict_mode: called");
        self.hbs.set_strict_mode(strict);
    }

    pub fn strict_mode(&self) -> bool {
        self.hbs.strict_mode()
    }

    pub(crate) fn handlebars(&self) -> &Handlebars<'static> {
        &self.hbs
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("types", &self.sources.keys().collect::<Vec<_>>())
            .field("strict_mode", &self.hbs.strict_mode())
            .finish()
    }
}
