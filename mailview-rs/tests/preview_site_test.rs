//! Integration tests for the preview site
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`; no
//! listener is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mailview_rs::config::Config;
use mailview_rs::message::{Renderer, TemplatedHtmlMessageView, TemplatedMessageView};
use mailview_rs::preview::{FormField, FormSpec, Preview, PreviewServer, PreviewSite};
use tower::ServiceExt;

fn demo_site() -> PreviewSite {
    let mut site = PreviewSite::new();

    site.register(
        Preview::new("b.views", "SecondMessage", |_args| {
            Box::new(
                TemplatedMessageView::new(Renderer::empty())
                    .subject_source("second subject")
                    .body_source("second body"),
            )
        })
        .verbose_name("Second Message"),
    );

    site.register(
        Preview::new("a.views", "BasicMessage", |_args| {
            Box::new(
                TemplatedMessageView::new(Renderer::empty())
                    .subject_source("basic subject")
                    .body_source("basic body"),
            )
        })
        .verbose_name("Basic Message")
        .description("A basic text email message."),
    );

    site.register(
        Preview::new("a.views", "HtmlMessage", |_args| {
            Box::new(
                TemplatedHtmlMessageView::new(Renderer::empty())
                    .subject_source("html subject")
                    .body_source("plain fallback")
                    .html_source("<p>hi</p>"),
            )
        })
        .verbose_name("HTML Message"),
    );

    site.register(
        Preview::new("a.views", "CustomizableMessage", |args| {
            let subject = args.get("subject").cloned().unwrap_or_default();
            Box::new(
                TemplatedMessageView::new(Renderer::empty())
                    .subject_source("{{ subject }}")
                    .body_source("customized body")
                    .context_value("subject", subject),
            )
        })
        .verbose_name("Customizable Message")
        .form(FormSpec::new().field(FormField::new("subject", "Subject"))),
    );

    site
}

fn server(site: PreviewSite) -> PreviewServer {
    PreviewServer::new(&Config::default(), site).unwrap()
}

async fn get(server: &PreviewServer, uri: &str) -> (StatusCode, String) {
    let response = server
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_list_page_sorted_by_module_then_name() {
    let server = server(demo_site());
    let (status, body) = get(&server, "/").await;

    assert_eq!(status, StatusCode::OK);
    let a = body.find("a.views").unwrap();
    let b = body.find("b.views").unwrap();
    assert!(a < b);

    let basic = body.find("Basic Message").unwrap();
    let customizable = body.find("Customizable Message").unwrap();
    let html = body.find("HTML Message").unwrap();
    assert!(basic < customizable && customizable < html);

    assert!(body.contains("A basic text email message."));
}

#[tokio::test]
async fn test_list_page_with_no_previews() {
    let server = server(PreviewSite::new());
    let (status, body) = get(&server, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No previews registered."));
}

#[tokio::test]
async fn test_detail_unknown_preview_is_404() {
    let server = server(demo_site());
    let (status, _) = get(&server, "/a.views/Unknown/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_detail_renders_message() {
    let server = server(demo_site());
    let (status, body) = get(&server, "/a.views/BasicMessage/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("basic subject"));
    assert!(body.contains("basic body"));
    // Fixed header subset, with the configured placeholder addresses.
    assert!(body.contains("Subject"));
    assert!(body.contains("webmaster@example.com"));
    assert!(body.contains("recipient@example.com"));
}

#[tokio::test]
async fn test_detail_embeds_html_alternative_as_base64() {
    let server = server(demo_site());
    let (status, body) = get(&server, "/a.views/HtmlMessage/").await;

    assert_eq!(status, StatusCode::OK);
    // base64 of "<p>hi</p>"
    assert!(body.contains("PHA+aGk8L3A+"));
    assert!(body.contains("data:text/html"));
}

#[tokio::test]
async fn test_form_preview_without_query_shows_form_only() {
    let server = server(demo_site());
    let (status, body) = get(&server, "/a.views/CustomizableMessage/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<form"));
    assert!(!body.contains("customized body"));
}

#[tokio::test]
async fn test_form_preview_with_valid_query_renders_message() {
    let server = server(demo_site());
    let (status, body) = get(&server, "/a.views/CustomizableMessage/?subject=From+the+form").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("From the form"));
    assert!(body.contains("customized body"));
}

#[tokio::test]
async fn test_form_preview_with_invalid_query_shows_errors() {
    let server = server(demo_site());
    let (status, body) = get(&server, "/a.views/CustomizableMessage/?subject=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Subject is required"));
    assert!(!body.contains("customized body"));
}

#[tokio::test]
async fn test_stylesheet_served_when_enabled() {
    let server = server(demo_site());
    let (status, body) = get(&server, "/static/style.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("font-family"));
}

#[tokio::test]
async fn test_stylesheet_absent_when_disabled() {
    let mut config = Config::default();
    config.preview.serve_static = false;

    let server = PreviewServer::new(&config, demo_site()).unwrap();
    let response = server
        .router()
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
