//! Template slots
//!
//! Each message part (subject, body, HTML body) owns a slot that is either
//! unset, bound to a template name (or an ordered candidate list), or given
//! an explicit source override. An override always wins over names. Name
//! resolution runs once per slot instance and the chosen candidate is
//! memoized for the life of the view; there is no invalidation path.

use crate::error::{MailviewError, Result};
use crate::message::{Context, Renderer};
use std::sync::OnceLock;

#[derive(Debug)]
pub struct TemplateSlot {
    /// Slot label used in configuration errors.
    label: &'static str,
    /// Name the slot renders source overrides under. The engine keys its
    /// escaping policy off this name.
    synthetic_name: &'static str,
    names: Vec<String>,
    source: Option<String>,
    resolved: OnceLock<String>,
}

impl TemplateSlot {
    pub fn new(label: &'static str, synthetic_name: &'static str) -> Self {
        Self {
            label,
            synthetic_name,
            names: Vec::new(),
            source: None,
            resolved: OnceLock::new(),
        }
    }

    /// Binds the slot to a single template name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.names = vec![name.into()];
    }

    /// Binds the slot to an ordered candidate list; the first existing
    /// template wins.
    pub fn set_candidates(&mut self, names: Vec<String>) {
        self.names = names;
    }

    /// Sets an explicit source override. Takes precedence over any
    /// configured name.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    pub fn is_set(&self) -> bool {
        self.source.is_some() || !self.names.is_empty()
    }

    /// Renders the slot against `context`. Fails with
    /// [`MailviewError::TemplateConfig`] when the slot was never set and
    /// with [`MailviewError::TemplateNotFound`] when none of the configured
    /// names resolve.
    pub fn render(&self, renderer: &Renderer, context: &Context) -> Result<String> {
        if let Some(source) = &self.source {
            return renderer.render_source(self.synthetic_name, source, context);
        }

        if self.names.is_empty() {
            return Err(MailviewError::TemplateConfig(self.label));
        }

        let name = match self.resolved.get() {
            Some(name) => name,
            None => {
                let selected = renderer.select(&self.names)?;
                self.resolved.get_or_init(|| selected)
            }
        };

        renderer.render(name, context)
    }
}
