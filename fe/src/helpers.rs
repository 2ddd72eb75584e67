//! Predicate helpers callable from template logic
//!
//! Every registry installs the same fixed set, so templates can rely on them
//! regardless of how the registry was built.

use handlebars::{Handlebars, handlebars_helper};
use serde_json::Value;
use tracing::debug;

/// True when the string has zero length
///
/// No trimming: a whitespace-only string is not blank.
pub fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// Blank test over a template value; `null` counts as blank
fn is_blank_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => is_blank(s),
        _ => false,
    }
}

handlebars_helper!(is_blank_helper: |value: Json| is_blank_value(value));

/// Names of the helpers installed by [`register_helpers`]
pub const HELPER_NAMES: &[&str] = &["is_blank"];

/// Install the fixed helper set on a Handlebars instance
///
/// Templates gate optional fragments with
/// `{{#unless (is_blank help_text)}}...{{/unless}}`.
pub fn register_helpers(hbs: &mut Handlebars<'_>) {
    debug!("register_helpers: called");
    hbs.register_helper("is_blank", Box::new(is_blank_helper));
}
