//! Message views
//!
//! Composition of templated email messages: template resolution, context
//! rendering, header merging and construction of transport-ready messages.

pub mod context;
pub mod envelope;
pub mod headers;
pub mod mailer;
pub mod rendered;
pub mod renderer;
pub mod template;
pub mod view;

pub use context::Context;
pub use envelope::Envelope;
pub use headers::Headers;
pub use mailer::Mailer;
pub use rendered::{Alternative, RenderedMessage, TEXT_HTML};
pub use renderer::Renderer;
pub use template::TemplateSlot;
pub use view::{MessageView, TemplatedHtmlMessageView, TemplatedMessageView};
