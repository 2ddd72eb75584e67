//! Render engine
//!
//! Binds one element to the template registered for its type. The template
//! sees a serialized snapshot of the element plus the fixed helper set, so
//! rendering cannot write back into the element or the registry.

use tracing::{debug, warn};

use crate::element::Element;
use crate::error::RenderError;
use crate::templates::TemplateRegistry;

/// Renders elements against a borrowed registry
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        debug!(types = registry.len(), "Renderer::new: called");
        Self { registry }
    }

    /// Render one element to HTML
    ///
    /// The output is returned exactly as the template produced it. On error no
    /// partial output is returned.
    pub fn render(&self, element: &Element) -> Result<String, RenderError> {
        let element_type = element.element_type.as_str();
        debug!(%element_type, id = %element.id, "Renderer::render: called");

        if !self.registry.contains(element_type) {
            debug!(%element_type, "Renderer::render: no template registered");
            return Err(RenderError::TemplateNotFound {
                element_type: element_type.to_string(),
            });
        }

        self.registry
            .handlebars()
            .render(element_type, element)
            .map_err(|e| {
                warn!("Failed to render element '{}' of type '{}': {}", element.id, element_type, e);
                RenderError::Execution {
                    element_type: element_type.to_string(),
                    source: Box::new(e),
                }
            })
    }

    /// Render each element independently, in the order supplied
    ///
    /// One failing element does not affect the others.
    pub fn render_all(&self, elements: &[Element]) -> Vec<Result<String, RenderError>> {
        debug!(count = elements.len(), "Renderer::render_all: called");
        elements.iter().map(|e| self.render(e)).collect()
    }

    /// Render every element and join the fragments with newlines
    ///
    /// Fails on the first element that fails; nothing is returned in that case.
    pub fn render_fragment(&self, elements: &[Element]) -> Result<String, RenderError> {
        debug!(count = elements.len(), "Renderer::render_fragment: called");
        let fragments = elements
            .iter()
            .map(|e| self.render(e))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(fragments.join("\n"))
    }
}

/// Render one element against a registry
pub fn render(registry: &TemplateRegistry, element: &Element) -> Result<String, RenderError> {
    Renderer::new(registry).render(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ALERT_MESSAGES, HR, PDF_FILE, SELECT_ELEMENT, SelectOption, TEXTAREA};

    fn registry() -> TemplateRegistry {
        TemplateRegistry::with_builtins().unwrap()
    }

    fn select(help_text: Option<&str>) -> Element {
        let element = Element::new(SELECT_ELEMENT)
            .with_id("f1")
            .with_name("choice")
            .with_label("Pick one")
            .with_option(SelectOption::new("a", "A"));
        match help_text {
            Some(text) => element.with_help_text(text),
            None => element,
        }
    }

    #[test]
    fn test_render_hr() {
        let registry = registry();
        let html = render(&registry, &Element::new(HR)).unwrap();
        assert_eq!(html.trim(), "<hr>");
        assert_eq!(html.matches("<hr").count(), 1);
    }

    #[test]
    fn test_render_empty_select() {
        let registry = registry();
        let element = Element::new(SELECT_ELEMENT).with_id("f1").with_label("Pick one");
        let html = render(&registry, &element).unwrap();

        assert_eq!(html.matches("<select").count(), 1);
        assert_eq!(html.matches("<option").count(), 1);
        assert!(html.contains(r#"<option value="not_selected" selected>-- Select --</option>"#));
        assert!(html.contains(r#"<label for="f1">Pick one</label>"#));
        assert!(html.contains(r#"id="f1""#));
    }

    #[test]
    fn test_render_select_option_order() {
        let registry = registry();
        let element = Element::new(SELECT_ELEMENT)
            .with_id("f1")
            .with_option(SelectOption::new("a", "A").with_order(2))
            .with_option(SelectOption::new("b", "B").with_order(1));
        let html = render(&registry, &element).unwrap();

        let default = html.find("not_selected").unwrap();
        let a = html.find(r#"<option value="a">A</option>"#).unwrap();
        let b = html.find(r#"<option value="b">B</option>"#).unwrap();
        assert!(default < a);
        assert!(a < b, "options render in supplied order, not by their order field");
        assert_eq!(html.matches("not_selected").count(), 1);
    }

    #[test]
    fn test_render_select_flags_and_classes() {
        let registry = registry();
        let element = select(None)
            .with_class("wide")
            .with_class("dark")
            .multi_select(true)
            .required(true);
        let html = render(&registry, &element).unwrap();
        assert!(html.contains(r#"class="form-select wide dark" multiple required>"#));
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn test_help_text_shown_when_not_blank() {
        let registry = registry();
        let html = render(&registry, &select(Some("Choose wisely"))).unwrap();
        assert!(html.contains(r#"<small class="form-text text-muted">Choose wisely</small>"#));
    }

    #[test]
    fn test_help_text_hidden_when_blank() {
        let registry = registry();
        let html = render(&registry, &select(Some(""))).unwrap();
        assert!(!html.contains("<small"));
    }

    #[test]
    fn test_help_text_hidden_when_absent() {
        let registry = registry();
        let html = render(&registry, &select(None)).unwrap();
        assert!(!html.contains("<small"));
    }

    #[test]
    fn test_help_text_whitespace_is_not_blank() {
        let registry = registry();
        let html = render(&registry, &select(Some(" "))).unwrap();
        assert!(html.contains("<small"));
    }

    #[test]
    fn test_render_alert_messages() {
        let registry = registry();
        let element = Element::new(ALERT_MESSAGES)
            .with_alert_class("alert-danger")
            .with_alert_message("Required field")
            .with_alert_message("Invalid format");
        let html = render(&registry, &element).unwrap();

        assert!(html.contains(r#"<div class="alert alert-danger" role="alert">"#));
        assert_eq!(html.matches("Required field").count(), 1);
        assert_eq!(html.matches("Invalid format").count(), 1);
        assert!(html.find("Required field").unwrap() < html.find("Invalid format").unwrap());
    }

    #[test]
    fn test_render_textarea() {
        let registry = registry();
        let element = Element::new(TEXTAREA)
            .with_id("notes")
            .with_label("Notes")
            .with_value("Hello there");
        let html = render(&registry, &element).unwrap();
        assert!(html.contains(r#"<label for="notes">Notes</label>"#));
        assert!(html.contains("readonly>Hello there</textarea>"));
    }

    #[test]
    fn test_render_pdf_file() {
        let registry = registry();
        let html = render(&registry, &Element::new(PDF_FILE).with_id("doc7")).unwrap();
        assert!(html.contains(r#"<div id="doc7_pdf"></div>"#));
    }

    #[test]
    fn test_values_are_html_escaped() {
        let registry = registry();
        let element = Element::new(TEXTAREA).with_label("Tom & <Jerry>");
        let html = render(&registry, &element).unwrap();
        assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(!html.contains("<Jerry>"));
    }

    #[test]
    fn test_unknown_type() {
        let registry = registry();
        let err = render(&registry, &Element::new("checkbox")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.element_type(), "checkbox");
    }

    #[test]
    fn test_missing_field_is_execution_error() {
        let mut registry = registry();
        registry.register("custom", "<p>{{no_such_field}}</p>").unwrap();
        let err = render(&registry, &Element::new("custom")).unwrap_err();
        assert!(matches!(err, RenderError::Execution { .. }));
        assert_eq!(err.element_type(), "custom");
    }

    #[test]
    fn test_missing_field_renders_empty_when_not_strict() {
        let mut registry = registry();
        registry.set_strict_mode(false);
        registry.register("custom", "<p>{{no_such_field}}</p>").unwrap();
        assert_eq!(render(&registry, &Element::new("custom")).unwrap(), "<p></p>");
    }

    #[test]
    fn test_render_all_isolates_failures() {
        let registry = registry();
        let elements = vec![Element::new(HR), Element::new("nope"), Element::new(PDF_FILE).with_id("p")];
        let results = Renderer::new(&registry).render_all(&elements);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().unwrap_err().is_not_found());
        assert!(results[2].as_ref().unwrap().contains("p_pdf"));
    }

    #[test]
    fn test_render_fragment() {
        let registry = registry();
        let renderer = Renderer::new(&registry);
        let html = renderer.render_fragment(&[Element::new(HR), Element::new(HR)]).unwrap();
        assert_eq!(html, "<hr>\n<hr>");

        assert!(renderer.render_fragment(&[Element::new(HR), Element::new("nope")]).is_err());
    }

    #[test]
    fn test_render_does_not_reorder() {
        let registry = registry();
        let elements = vec![
            Element::new(PDF_FILE).with_id("second").with_order(2),
            Element::new(PDF_FILE).with_id("first").with_order(1),
        ];
        let html = Renderer::new(&registry).render_fragment(&elements).unwrap();
        assert!(html.find("second_pdf").unwrap() < html.find("first_pdf").unwrap());
    }

    #[test]
    fn test_render_leaves_element_untouched() {
        let registry = registry();
        let element = select(Some("help"));
        let before = element.clone();
        render(&registry, &element).unwrap();
        assert_eq!(element, before);
    }
}
