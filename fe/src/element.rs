//! Element model
//!
//! One `Element` describes one form control. Field names on the wire are the
//! contract with the stores that hold campaign/form definitions, so every field
//! carries its stored name via serde.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Built-in element type: alert banner with a list of messages
pub const ALERT_MESSAGES: &str = "alert_messages";
/// Built-in element type: dropdown select list
pub const SELECT_ELEMENT: &str = "select_element";
/// Built-in element type: read-only text area
pub const TEXTAREA: &str = "textarea";
/// Built-in element type: placeholder for client-side PDF embedding
pub const PDF_FILE: &str = "pdf_file";
/// Built-in element type: horizontal rule
pub const HR: &str = "hr";

/// One selectable entry within a dropdown element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    /// Advisory position; options render in the order they are supplied
    pub order: i64,
    /// Submitted value
    pub value: String,
    /// Text shown to the user
    pub display: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            order: 0,
            value: value.into(),
            display: display.into(),
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

/// Declarative description of one form control
///
/// Optional fields serialize as `null` rather than being skipped, so the
/// snapshot a template sees always carries every key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    /// Unique element identifier
    #[serde(rename = "docid_form_element")]
    pub id: String,
    /// Auxiliary identifiers by name
    #[serde(rename = "docids")]
    pub ids: BTreeMap<String, String>,
    /// Owning campaign
    #[serde(rename = "docid_campaign")]
    pub campaign_id: String,
    /// Selects the template used to render this element
    #[serde(rename = "type")]
    pub element_type: String,
    /// Position among sibling elements; never applied by the renderer
    pub order: i64,
    pub name: String,
    pub label: String,
    pub help_text: Option<String>,
    /// CSS class names (older stored documents keep these under `string`)
    #[serde(alias = "string")]
    pub classes: Vec<String>,
    pub alert_class: Option<String>,
    pub select_options: Vec<SelectOption>,
    pub is_multi_select: bool,
    pub is_hidden: bool,
    pub is_required: bool,
    /// Current value
    pub value: String,
    pub placeholder: Option<String>,
    pub alert_messages: Vec<String>,
    pub checkbox_value: Option<String>,
    pub radio_label_1: Option<String>,
    pub radio_value_1: Option<String>,
    pub radio_label_2: Option<String>,
    pub radio_value_2: Option<String>,
}

impl Element {
    /// Create an element of the given type with every other field empty
    pub fn new(element_type: impl Into<String>) -> Self {
        let element_type = element_type.into();
        debug!(%element_type, "Element::new: called");
        Self {
            element_type,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_campaign_id(mut self, campaign_id: impl Into<String>) -> Self {
        self.campaign_id = campaign_id.into();
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_alert_class(mut self, alert_class: impl Into<String>) -> Self {
        self.alert_class = Some(alert_class.into());
        self
    }

    /// Append an option; options keep the order they are appended in
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.select_options.push(option);
        self
    }

    pub fn with_alert_message(mut self, message: impl Into<String>) -> Self {
        self.alert_messages.push(message.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn multi_select(mut self, yes: bool) -> Self {
        self.is_multi_select = yes;
        self
    }

    pub fn hidden(mut self, yes: bool) -> Self {
        self.is_hidden = yes;
        self
    }

    pub fn required(mut self, yes: bool) -> Self {
        self.is_required = yes;
        self
    }

    /// Parse a single element from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        debug!(len = json.len(), "Element::from_json: called");
        serde_json::from_str(json)
    }

    /// Parse a single element from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        debug!(len = yaml.len(), "Element::from_yaml: called");
        serde_yaml::from_str(yaml)
    }

    /// Parse either one element or an array of elements from JSON
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        debug!(len = json.len(), "Element::list_from_json: called");
        serde_json::from_str::<OneOrMany>(json).map(OneOrMany::into_vec)
    }

    /// Parse either one element or a sequence of elements from YAML
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        debug!(len = yaml.len(), "Element::list_from_yaml: called");
        serde_yaml::from_str::<OneOrMany>(yaml).map(OneOrMany::into_vec)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Element>),
    One(Box<Element>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<Element> {
        match self {
            Self::Many(elements) => elements,
            Self::One(element) => vec![*element],
        }
    }
}

/// Stable sort of sibling elements by their `order` field
///
/// Rendering never reorders; callers that want positional order apply this first.
pub fn sort_by_order(elements: &mut [Element]) {
    debug!(count = elements.len(), "sort_by_order: called");
    elements.sort_by_key(|e| e.order);
}
