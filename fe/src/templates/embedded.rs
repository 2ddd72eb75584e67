//! Embedded templates
//!
//! The built-in Bootstrap-flavoured templates, compiled into the binary from
//! .hbs files at build time.

use tracing::debug;

use crate::element::{ALERT_MESSAGES, HR, PDF_FILE, SELECT_ELEMENT, TEXTAREA};

/// Alert banner listing each message on its own line
pub const ALERT_MESSAGES_TEMPLATE: &str = include_str!("../../templates/alert_messages.hbs");

/// Labelled select list with a default unselected option and optional help text
pub const SELECT_ELEMENT_TEMPLATE: &str = include_str!("../../templates/select_element.hbs");

/// Labelled read-only textarea
pub const TEXTAREA_TEMPLATE: &str = include_str!("../../templates/textarea.hbs");

/// Placeholder container for client-side PDF embedding
pub const PDF_FILE_TEMPLATE: &str = include_str!("../../templates/pdf_file.hbs");

/// Bare horizontal rule
pub const HR_TEMPLATE: &str = include_str!("../../templates/hr.hbs");

/// Every built-in template as (element type, source)
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (ALERT_MESSAGES, ALERT_MESSAGES_TEMPLATE),
    (SELECT_ELEMENT, SELECT_ELEMENT_TEMPLATE),
    (TEXTAREA, TEXTAREA_TEMPLATE),
    (PDF_FILE, PDF_FILE_TEMPLATE),
    (HR, HR_TEMPLATE),
];

/// Get the embedded template source for an element type
pub fn get_embedded(element_type: &str) -> Option<&'static str> {
    debug!(%element_type, "get_embedded: called");
    BUILTIN_TEMPLATES
        .iter()
        .find(|(name, _)| *name == element_type)
        .map(|(_, source)| *source)
}
