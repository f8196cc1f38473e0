//! Message views
//!
//! A message view knows how to produce a deterministic rendered message
//! from a data context. The trait keeps rendering synchronous and
//! object-safe so the preview site can hold views behind `dyn`; sending
//! lives in [`crate::message::Mailer`].

use crate::error::Result;
use crate::message::{
    Context, Envelope, Headers, RenderedMessage, Renderer, TemplateSlot, TEXT_HTML,
};

pub trait MessageView {
    /// View-level headers merged into every message this view renders.
    /// They survive collisions with caller-supplied headers.
    fn headers(&self) -> Headers {
        Headers::new()
    }

    /// Builds the rendering context. Implementations compose explicitly:
    /// start from the view's own fields and merge `extra` on top.
    fn context(&self, extra: Context) -> Context {
        extra
    }

    /// Renders the message subject: a single line, plain text, with
    /// leading and trailing whitespace stripped.
    fn render_subject(&self, context: &Context) -> Result<String>;

    /// Renders the plain-text body. Unlike the subject, whitespace is
    /// preserved exactly as the template produced it.
    fn render_body(&self, context: &Context) -> Result<String>;

    /// The HTML rendition of this message, when the view produces one.
    fn html_alternative(&self, _context: &Context) -> Result<Option<String>> {
        Ok(None)
    }

    /// Renders and returns an unsent message.
    ///
    /// Customizing this method is sufficient to change every downstream
    /// behavior; [`crate::message::Mailer::send`] has no other path to a
    /// message.
    fn render_to_message(&self, extra_context: Context, envelope: Envelope) -> Result<RenderedMessage> {
        let context = self.context(extra_context);
        let subject = self.render_subject(&context)?;
        let body = self.render_body(&context)?;

        let mut message = RenderedMessage::new(subject, body, self.headers(), envelope);
        if let Some(html) = self.html_alternative(&context)? {
            message.attach_alternative(html, TEXT_HTML);
        }

        Ok(message)
    }
}

/// A message view rendering subject and plain-text body from named
/// templates.
#[derive(Debug)]
pub struct TemplatedMessageView {
    renderer: Renderer,
    subject: TemplateSlot,
    body: TemplateSlot,
    headers: Headers,
    base_context: Context,
}

impl TemplatedMessageView {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            subject: TemplateSlot::new("subject", "subject"),
            body: TemplateSlot::new("body", "body"),
            headers: Headers::new(),
            base_context: Context::new(),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Template name rendered for the subject. The rendered subject should
    /// be a single line; trailing whitespace is stripped automatically.
    pub fn subject_template(mut self, name: impl Into<String>) -> Self {
        self.subject.set_name(name);
        self
    }

    /// Ordered subject template candidates; the first that exists wins.
    pub fn subject_template_any(mut self, names: Vec<String>) -> Self {
        self.subject.set_candidates(names);
        self
    }

    /// Explicit subject template source. Takes precedence over any
    /// configured name.
    pub fn subject_source(mut self, source: impl Into<String>) -> Self {
        self.subject.set_source(source);
        self
    }

    pub fn body_template(mut self, name: impl Into<String>) -> Self {
        self.body.set_name(name);
        self
    }

    pub fn body_template_any(mut self, names: Vec<String>) -> Self {
        self.body.set_candidates(names);
        self
    }

    pub fn body_source(mut self, source: impl Into<String>) -> Self {
        self.body.set_source(source);
        self
    }

    /// Adds a view-level header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Adds a field to the view's base context. Caller-supplied extra
    /// context overrides these on key collision.
    pub fn context_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.base_context.insert(key, value);
        self
    }
}

impl MessageView for TemplatedMessageView {
    fn headers(&self) -> Headers {
        self.headers.clone()
    }

    fn context(&self, extra: Context) -> Context {
        let mut context = self.base_context.clone();
        context.merge(extra);
        context
    }

    fn render_subject(&self, context: &Context) -> Result<String> {
        let rendered = self.subject.render(&self.renderer, context)?;
        Ok(rendered.trim().to_string())
    }

    fn render_body(&self, context: &Context) -> Result<String> {
        self.body.render(&self.renderer, context)
    }
}

/// A message view that additionally renders an HTML alternative. Composes
/// a [`TemplatedMessageView`] rather than inheriting from it; the HTML
/// slot renders with HTML escaping.
#[derive(Debug)]
pub struct TemplatedHtmlMessageView {
    inner: TemplatedMessageView,
    html_body: TemplateSlot,
}

impl TemplatedHtmlMessageView {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            inner: TemplatedMessageView::new(renderer),
            html_body: TemplateSlot::new("HTML body", "body.html"),
        }
    }

    pub fn subject_template(mut self, name: impl Into<String>) -> Self {
        self.inner = self.inner.subject_template(name);
        self
    }

    pub fn subject_template_any(mut self, names: Vec<String>) -> Self {
        self.inner = self.inner.subject_template_any(names);
        self
    }

    pub fn subject_source(mut self, source: impl Into<String>) -> Self {
        self.inner = self.inner.subject_source(source);
        self
    }

    pub fn body_template(mut self, name: impl Into<String>) -> Self {
        self.inner = self.inner.body_template(name);
        self
    }

    pub fn body_template_any(mut self, names: Vec<String>) -> Self {
        self.inner = self.inner.body_template_any(names);
        self
    }

    pub fn body_source(mut self, source: impl Into<String>) -> Self {
        self.inner = self.inner.body_source(source);
        self
    }

    pub fn html_template(mut self, name: impl Into<String>) -> Self {
        self.html_body.set_name(name);
        self
    }

    pub fn html_template_any(mut self, names: Vec<String>) -> Self {
        self.html_body.set_candidates(names);
        self
    }

    pub fn html_source(mut self, source: impl Into<String>) -> Self {
        self.html_body.set_source(source);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner = self.inner.header(name, value);
        self
    }

    pub fn context_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.inner = self.inner.context_value(key, value);
        self
    }

    /// Renders the HTML body for the given context.
    pub fn render_html_body(&self, context: &Context) -> Result<String> {
        self.html_body.render(self.inner.renderer(), context)
    }
}

impl MessageView for TemplatedHtmlMessageView {
    fn headers(&self) -> Headers {
        MessageView::headers(&self.inner)
    }

    fn context(&self, extra: Context) -> Context {
        self.inner.context(extra)
    }

    fn render_subject(&self, context: &Context) -> Result<String> {
        self.inner.render_subject(context)
    }

    fn render_body(&self, context: &Context) -> Result<String> {
        self.inner.render_body(context)
    }

    fn html_alternative(&self, context: &Context) -> Result<Option<String>> {
        self.render_html_body(context).map(Some)
    }
}
