//! Preview site server
//!
//! Assembles the axum router for the preview pages and runs it. The
//! registry is frozen into shared state before the listener starts;
//! nothing mutates it afterwards.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::preview::handlers::{self, PreviewState};
use crate::preview::site::PreviewSite;

pub struct PreviewServer {
    state: Arc<PreviewState>,
    addr: String,
    serve_static: bool,
}

impl PreviewServer {
    /// Creates a server for a fully-registered site. Fails when the
    /// configured placeholder addresses do not parse.
    pub fn new(config: &Config, site: PreviewSite) -> Result<Self> {
        let state = Arc::new(PreviewState {
            site,
            from_address: config.preview.from_address.parse()?,
            to_address: config.preview.to_address.parse()?,
        });

        Ok(Self {
            state,
            addr: config.server.listen_addr.clone(),
            serve_static: config.preview.serve_static,
        })
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::list))
            .route("/:module/:preview/", get(handlers::detail));

        if self.serve_static {
            router = router.route("/static/style.css", get(handlers::stylesheet));
        }

        router
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.state))
    }

    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Preview site listening on {}", self.addr);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
