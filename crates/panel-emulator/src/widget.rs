//! Button widgets placed on the emulated front panel

use platform::{ButtonId, PanelButton};
use serde::{Deserialize, Serialize};

/// A labelled push button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Widget {
    /// Identifier carried in button events.
    pub id: ButtonId,
    /// Name used to address the button from scripts and the CLI.
    pub label: String,
}

impl Widget {
    /// Create a widget.
    pub fn new(id: u8, label: impl Into<String>) -> Self {
        Self {
            id: ButtonId::new(id),
            label: label.into(),
        }
    }

    /// Whether `key` addresses this widget, either by label or by decimal ID.
    ///
    /// The ID must be written in canonical form: `"3"` matches button 3,
    /// `"03"` and `"+3"` do not.
    pub fn matches(&self, key: &str) -> bool {
        self.label == key || self.id.get().to_string() == key
    }
}

impl PanelButton for Widget {
    fn id(&self) -> ButtonId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_label_or_id() {
        let w = Widget::new(3, "USER");
        assert!(w.matches("USER"));
        assert!(w.matches("3"));
        assert!(!w.matches("user"));
        assert!(!w.matches("4"));
        assert!(!w.matches("-3"));
    }

    #[test]
    fn id_must_be_canonical_decimal() {
        let w = Widget::new(3, "USER");
        for key in ["03", "+3", " 3", "3 ", "0x3"] {
            assert!(!w.matches(key), "{key} should not address button 3");
        }
    }

    #[test]
    fn json_shape() {
        let w: Widget = serde_json::from_str(r#"{"id": 7, "label": "BACK"}"#).unwrap();
        assert_eq!(w, Widget::new(7, "BACK"));
        assert!(serde_json::from_str::<Widget>(r#"{"id": 300, "label": "X"}"#).is_err());
    }
}
