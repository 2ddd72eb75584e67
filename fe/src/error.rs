//! Error types for template compilation and rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while registering a template
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Failed to compile template '{name}': {source}")]
    Syntax {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    /// Name of the template that failed, when known
    pub fn template_name(&self) -> Option<&str> {
        match self {
            CompileError::Syntax { name, .. } => Some(name),
            CompileError::Read { .. } => None,
        }
    }
}

/// Errors raised while rendering one element
///
/// Both variants are recoverable per element: nothing in the registry changes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No template registered for element type '{element_type}'")]
    TemplateNotFound { element_type: String },

    #[error("Failed to render element type '{element_type}': {source}")]
    Execution {
        element_type: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl RenderError {
    /// Element type the failed render was for
    pub fn element_type(&self) -> &str {
        match self {
            RenderError::TemplateNotFound { element_type } => element_type,
            RenderError::Execution { element_type, .. } => element_type,
        }
    }

    /// Check if this error means the element type is unsupported
    pub fn is_not_found(&self) -> bool {
        matches!(self, RenderError::TemplateNotFound { .. })
    }
}
