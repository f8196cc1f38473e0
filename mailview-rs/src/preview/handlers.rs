//! Preview site HTTP handlers
//!
//! List and detail pages for registered previews. Lookup misses map to
//! 404; template failures while rendering a message surface as 500 and
//! are never swallowed.

use askama_axum::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use lettre::message::Mailbox;
use std::collections::HashMap;
use std::sync::Arc;

use crate::message::{Context, Envelope, RenderedMessage, TEXT_HTML};
use crate::preview::form::{FormState, FormSpec, Widget};
use crate::preview::site::PreviewSite;

/// Shared, read-only state behind the preview routes.
pub struct PreviewState {
    pub site: PreviewSite,
    /// Placeholder sender shown on detail pages.
    pub from_address: Mailbox,
    /// Placeholder recipient shown on detail pages.
    pub to_address: Mailbox,
}

#[derive(Template)]
#[template(path = "previews/list.html")]
struct ListTemplate {
    modules: Vec<ModuleEntry>,
}

struct ModuleEntry {
    module: String,
    previews: Vec<PreviewEntry>,
}

struct PreviewEntry {
    display_name: String,
    description: String,
    url: String,
}

#[derive(Template)]
#[template(path = "previews/detail.html")]
struct DetailTemplate {
    display_name: String,
    description: String,
    url: String,
    form_fields: Vec<FormFieldEntry>,
    form_errors: Vec<String>,
    show_message: bool,
    subject: String,
    headers: Vec<HeaderEntry>,
    body: String,
    has_html: bool,
    html_base64: String,
}

struct FormFieldEntry {
    name: String,
    label: String,
    value: String,
    required: bool,
    textarea: bool,
}

pub(crate) struct HeaderEntry {
    pub name: String,
    pub value: String,
}

// Preview index page
pub async fn list(State(state): State<Arc<PreviewState>>) -> impl IntoResponse {
    let modules = state
        .site
        .modules()
        .into_iter()
        .map(|group| ModuleEntry {
            module: group.module.to_string(),
            previews: group
                .previews
                .iter()
                .map(|preview| PreviewEntry {
                    display_name: preview.display_name().to_string(),
                    description: preview.description_text().unwrap_or_default().to_string(),
                    url: preview.url_path(),
                })
                .collect(),
        })
        .collect();

    ListTemplate { modules }
}

// Preview detail page, optionally driven by query-string form fields
pub async fn detail(
    State(state): State<Arc<PreviewState>>,
    Path((module, name)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(preview) = state.site.get(&module, &name) else {
        return (StatusCode::NOT_FOUND, "no such preview").into_response();
    };

    let mut template = DetailTemplate {
        display_name: preview.display_name().to_string(),
        description: preview.description_text().unwrap_or_default().to_string(),
        url: preview.url_path(),
        form_fields: Vec::new(),
        form_errors: Vec::new(),
        show_message: false,
        subject: String::new(),
        headers: Vec::new(),
        body: String::new(),
        has_html: false,
        html_base64: String::new(),
    };

    let mut view_args = HashMap::new();
    if let Some(spec) = preview.form_spec() {
        match spec.bind(&params) {
            FormState::Unbound => {
                template.form_fields = form_fields(spec, &HashMap::new());
                return template.into_response();
            }
            FormState::Invalid { values, errors } => {
                template.form_fields = form_fields(spec, &values);
                template.form_errors = errors;
                return template.into_response();
            }
            FormState::Valid(values) => {
                template.form_fields = form_fields(spec, &values);
                view_args = values;
            }
        }
    }

    let view = preview.build_view(&view_args);
    let envelope = Envelope::new()
        .from_address(state.from_address.clone())
        .to(state.to_address.clone());

    match view.render_to_message(Context::new(), envelope) {
        Ok(message) => {
            let context = message_context(&message);
            template.show_message = true;
            template.subject = context.subject;
            template.headers = context.headers;
            template.body = context.body;
            template.has_html = context.html_base64.is_some();
            template.html_base64 = context.html_base64.unwrap_or_default();
            template.into_response()
        }
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

// Bundled stylesheet, mounted only when the host is not serving static
// assets itself
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/style.css"),
    )
}

fn form_fields(spec: &FormSpec, values: &HashMap<String, String>) -> Vec<FormFieldEntry> {
    spec.fields()
        .iter()
        .map(|field| FormFieldEntry {
            name: field.name.clone(),
            label: field.label.clone(),
            value: values
                .get(&field.name)
                .cloned()
                .or_else(|| field.default.clone())
                .unwrap_or_default(),
            required: field.required,
            textarea: field.widget == Widget::TextArea,
        })
        .collect()
}

/// Display context for a rendered message: the fixed Subject/From/To
/// header subset, the plain body, and the HTML alternative base64-encoded
/// for embedding in a `data:` URI.
pub(crate) struct MessageContext {
    pub subject: String,
    pub headers: Vec<HeaderEntry>,
    pub body: String,
    pub html_base64: Option<String>,
}

pub(crate) fn message_context(message: &RenderedMessage) -> MessageContext {
    let envelope = message.envelope();
    let from = envelope
        .from
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let to = envelope
        .to
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let headers = vec![
        HeaderEntry {
            name: "Subject".to_string(),
            value: message.subject().to_string(),
        },
        HeaderEntry {
            name: "From".to_string(),
            value: from,
        },
        HeaderEntry {
            name: "To".to_string(),
            value: to,
        },
    ];

    let html_base64 = message
        .alternative()
        .filter(|alternative| alternative.mimetype == TEXT_HTML)
        .map(|alternative| BASE64.encode(alternative.content.as_bytes()));

    MessageContext {
        subject: message.subject().to_string(),
        headers,
        body: message.body().to_string(),
        html_base64,
    }
}
