//! Binding to the email template engine
//!
//! Wraps a [`minijinja::Environment`] behind a cheap-clone handle. Template
//! names are resolved against an optional on-disk directory plus any sources
//! registered in code. Escaping follows the engine's name-based policy:
//! templates named `*.html` (or `.htm`/`.xml`) render with HTML escaping,
//! everything else renders raw, which is what plain-text subject and body
//! templates need.

use crate::error::{MailviewError, Result};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Shared handle to the template environment.
///
/// Cloning is cheap; the underlying environment is immutable once built, so
/// handles can be passed freely between views and the preview site.
#[derive(Clone)]
pub struct Renderer {
    env: Arc<minijinja::Environment<'static>>,
}

impl Renderer {
    /// An environment with no templates. Only source overrides can render
    /// against it.
    pub fn empty() -> Self {
        RendererBuilder::new().build()
    }

    /// An environment resolving names against a template directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        RendererBuilder::new().template_dir(dir).build()
    }

    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    /// Whether a template with this exact name can be resolved.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders the named template. A missing template surfaces as
    /// [`MailviewError::TemplateNotFound`], any other engine failure as
    /// [`MailviewError::Render`].
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String> {
        let template = self.env.get_template(name).map_err(|err| {
            if matches!(err.kind(), minijinja::ErrorKind::TemplateNotFound) {
                MailviewError::TemplateNotFound(name.to_string())
            } else {
                MailviewError::Render(err)
            }
        })?;

        template.render(context).map_err(MailviewError::Render)
    }

    /// First-match resolution over an ordered candidate list. Returns the
    /// name of the first template that exists. Only "template not found"
    /// moves resolution along; a broken candidate propagates its error.
    pub fn select(&self, names: &[String]) -> Result<String> {
        for name in names {
            match self.env.get_template(name) {
                Ok(_) => return Ok(name.clone()),
                Err(err) if matches!(err.kind(), minijinja::ErrorKind::TemplateNotFound) => {}
                Err(err) => return Err(MailviewError::Render(err)),
            }
        }

        Err(MailviewError::TemplateNotFound(names.join(", ")))
    }

    /// Renders an in-memory source under a synthetic name. The name matters:
    /// it decides the escaping policy, exactly as it would for a loaded
    /// template.
    pub fn render_source<S: Serialize>(
        &self,
        name: &str,
        source: &str,
        context: S,
    ) -> Result<String> {
        self.env
            .render_named_str(name, source, context)
            .map_err(MailviewError::Render)
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

/// Assembles a [`Renderer`] from a template directory and/or named sources.
pub struct RendererBuilder {
    env: minijinja::Environment<'static>,
}

impl RendererBuilder {
    pub fn new() -> Self {
        let mut env = minijinja::Environment::new();
        // Per spec, a rendered body's trailing newline comes from the
        // template file, not the engine; disable the engine's default
        // stripping of a single trailing newline.
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Resolve template names against this directory.
    pub fn template_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.env.set_loader(minijinja::path_loader(dir));
        self
    }

    /// Register a named template source.
    pub fn template(
        mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self> {
        self.env
            .add_template_owned(name.into(), source.into())
            .map_err(MailviewError::Render)?;
        Ok(self)
    }

    pub fn build(self) -> Renderer {
        Renderer {
            env: Arc::new(self.env),
        }
    }
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}
