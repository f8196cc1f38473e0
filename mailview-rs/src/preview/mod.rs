//! Preview site
//!
//! Registry and HTTP pages for browsing rendered message views during
//! development, without sending anything.

pub mod form;
pub mod handlers;
pub mod server;
pub mod site;

pub use form::{FormField, FormSpec, FormState, Widget};
pub use handlers::PreviewState;
pub use server::PreviewServer;
pub use site::{ModulePreviews, Preview, PreviewSite, ViewFactory};
