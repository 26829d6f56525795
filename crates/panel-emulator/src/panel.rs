//! Emulated front panel: widgets plus the listener they report to

use std::collections::BTreeSet;

use platform::{ButtonId, ButtonListener};

use crate::error::PanelError;
use crate::widget::Widget;

/// Host front panel.
///
/// Every press and release is handed to the listener synchronously, in call
/// order. The panel does not filter: a release without a preceding press
/// still reaches the listener.
pub struct FrontPanel {
    widgets: Vec<Widget>,
    listener: Box<dyn ButtonListener + Send>,
    held: BTreeSet<ButtonId>,
}

impl FrontPanel {
    /// Create an empty panel reporting to `listener`.
    pub fn new(listener: impl ButtonListener + Send + 'static) -> Self {
        Self {
            widgets: Vec::new(),
            listener: Box::new(listener),
            held: BTreeSet::new(),
        }
    }

    /// Place a button on the panel.
    pub fn add_button(&mut self, widget: Widget) -> Result<(), PanelError> {
        if widget.label.is_empty() {
            return Err(PanelError::EmptyLabel);
        }
        if self.widgets.iter().any(|w| w.id == widget.id) {
            return Err(PanelError::DuplicateId(widget.id));
        }
        if self.widgets.iter().any(|w| w.label == widget.label) {
            return Err(PanelError::DuplicateLabel(widget.label));
        }
        tracing::debug!(id = %widget.id, label = %widget.label, "button added");
        self.widgets.push(widget);
        Ok(())
    }

    /// Buttons in placement order.
    pub fn buttons(&self) -> &[Widget] {
        &self.widgets
    }

    /// Look a button up by label or decimal ID. Labels win.
    pub fn resolve(&self, key: &str) -> Result<&Widget, PanelError> {
        find(&self.widgets, key)
    }

    /// Whether the button is currently held down on the panel.
    pub fn is_pressed(&self, key: &str) -> Result<bool, PanelError> {
        let widget = self.resolve(key)?;
        Ok(self.held.contains(&widget.id))
    }

    /// Push a button down.
    pub fn press(&mut self, key: &str) -> Result<ButtonId, PanelError> {
        let widget = find(&self.widgets, key)?;
        tracing::debug!(id = %widget.id, label = %widget.label, "press");
        self.held.insert(widget.id);
        self.listener.press(widget);
        Ok(widget.id)
    }

    /// Let a button go.
    pub fn release(&mut self, key: &str) -> Result<ButtonId, PanelError> {
        let widget = find(&self.widgets, key)?;
        if !self.held.remove(&widget.id) {
            tracing::warn!(id = %widget.id, label = %widget.label, "release without press");
        } else {
            tracing::debug!(id = %widget.id, label = %widget.label, "release");
        }
        self.listener.release(widget);
        Ok(widget.id)
    }

    /// Press then release.
    pub fn click(&mut self, key: &str) -> Result<ButtonId, PanelError> {
        self.press(key)?;
        self.release(key)
    }
}

/// Exact label match first, then a numeric ID match.
fn find<'a>(widgets: &'a [Widget], key: &str) -> Result<&'a Widget, PanelError> {
    widgets
        .iter()
        .find(|w| w.label == key)
        .or_else(|| widgets.iter().find(|w| w.matches(key)))
        .ok_or_else(|| PanelError::UnknownButton(key.to_owned()))
}
