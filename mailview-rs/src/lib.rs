//! mailview-rs: Class-based templated email messages with a preview site
//!
//! Compose email messages (subject, plain-text body, optional HTML
//! alternative) from named templates, and browse rendered messages in a
//! developer preview site without sending anything.
//!
//! # Features
//!
//! - **Message views**: deterministic subject/body/HTML rendering from a
//!   data context, with lazy name resolution and candidate lists
//! - **Header merging**: view-level headers that survive caller overrides
//! - **Sending**: any lettre transport via [`message::Mailer`]
//! - **Preview site**: axum pages listing and rendering registered views
//!   for manual QA
//!
//! # Example
//!
//! ```no_run
//! use mailview_rs::message::{Context, Envelope, MessageView, Renderer, TemplatedMessageView};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let renderer = Renderer::from_dir("templates/emails");
//!
//!     let view = TemplatedMessageView::new(renderer)
//!         .subject_template("welcome/subject.txt")
//!         .body_template("welcome/body.txt");
//!
//!     let message = view.render_to_message(
//!         Context::new().set("name", "Ada"),
//!         Envelope::new()
//!             .from_address("noreply@example.com".parse()?)
//!             .to("ada@example.com".parse()?),
//!     )?;
//!
//!     println!("{}", message.subject());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`message`]: Message views, rendering and sending
//! - [`preview`]: Preview registry and HTTP pages

pub mod config;
pub mod error;
pub mod message;
pub mod preview;

// Re-export commonly used types
pub use config::Config;
pub use error::{MailviewError, Result};
pub use message::{
    Context, Envelope, Headers, Mailer, MessageView, RenderedMessage, Renderer,
    TemplatedHtmlMessageView, TemplatedMessageView,
};
pub use preview::{FormField, FormSpec, Preview, PreviewServer, PreviewSite};
