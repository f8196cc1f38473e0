use mailview_rs::config::Config;
use mailview_rs::message::{Renderer, TemplatedHtmlMessageView, TemplatedMessageView};
use mailview_rs::preview::{FormField, FormSpec, Preview, PreviewServer, PreviewSite};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const DEMO_SUBJECT: &str = "A rose by any other name";
const DEMO_CONTENT: &str = "\
Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer nec \
odio. Praesent libero. Sed cursus ante dapibus diam.

Sed nisi. Nulla quis sem at nibh elementum imperdiet. Duis sagittis \
ipsum. Praesent mauris. Fusce nec tellus sed augue semper porta.";

fn demo_site(renderer: &Renderer) -> PreviewSite {
    let mut site = PreviewSite::new();

    let basic_renderer = renderer.clone();
    site.register(
        Preview::new(module_path!(), "BasicMessage", move |_args| {
            Box::new(
                TemplatedMessageView::new(basic_renderer.clone())
                    .subject_source("{{ subject }}")
                    .body_source("{{ content }}")
                    .context_value("subject", DEMO_SUBJECT)
                    .context_value("content", DEMO_CONTENT),
            )
        })
        .verbose_name("Basic Message")
        .description("A basic text email message."),
    );

    let html_renderer = renderer.clone();
    site.register(
        Preview::new(module_path!(), "BasicHtmlMessage", move |_args| {
            Box::new(
                TemplatedHtmlMessageView::new(html_renderer.clone())
                    .subject_source("{{ subject }}")
                    .body_source("{{ content }}")
                    .html_source("<h1>{{ subject }}</h1><p>{{ content }}</p>")
                    .context_value("subject", DEMO_SUBJECT)
                    .context_value("content", DEMO_CONTENT),
            )
        })
        .verbose_name("Basic HTML Message")
        .description("A basic HTML email message."),
    );

    let form_renderer = renderer.clone();
    site.register(
        Preview::new(module_path!(), "CustomizableMessage", move |args| {
            let subject = args.get("subject").cloned().unwrap_or_default();
            let content = args.get("content").cloned().unwrap_or_default();
            Box::new(
                TemplatedMessageView::new(form_renderer.clone())
                    .subject_source("{{ subject }}")
                    .body_source("{{ content }}")
                    .context_value("subject", subject)
                    .context_value("content", content),
            )
        })
        .verbose_name("Basic Message, with Form")
        .description("A basic text email message, but customizable.")
        .form(
            FormSpec::new()
                .field(FormField::new("subject", "Subject"))
                .field(FormField::new("content", "Content").text_area()),
        ),
    );

    site
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting mailview-rs preview site");

    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    info!("Configuration loaded");
    info!("  Listening on: {}", config.server.listen_addr);
    if let Some(dir) = &config.templates.dir {
        info!("  Template directory: {}", dir);
    }

    let renderer = match &config.templates.dir {
        Some(dir) => Renderer::from_dir(dir),
        None => Renderer::empty(),
    };

    let site = demo_site(&renderer);
    info!("Registered {} demo previews", site.len());

    PreviewServer::new(&config, site)?.run().await?;

    Ok(())
}
