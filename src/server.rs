use axum::response::IntoResponse;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) api: std::sync::Arc<dyn crate::hn_api::HnApi>,
    pub(crate) renderer: std::sync::Arc<dyn crate::render::Render>,
    pub(crate) num_stories: usize,
}

/// Every path serves the front page.
pub(crate) fn router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(front_page))
        .fallback(front_page)
        .with_state(state)
}

pub(crate) async fn serve(port: u16, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error =? e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

async fn front_page(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::response::Response {
    match render_front_page(&state).await {
        Ok(html) => axum::response::Html(html).into_response(),
        Err(e) => {
            tracing::error!(error =? e, "Failed to serve front page");
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                e.public_message(),
            )
                .into_response()
        }
    }
}

async fn render_front_page(state: &AppState) -> Result<String, crate::error::Error> {
    let page = crate::handler::top_stories(state.api.clone(), state.num_stories).await?;
    if page.completion == crate::collector::Completion::Exhausted {
        tracing::warn!(
            wanted = state.num_stories,
            found = page.stories.len(),
            fetch_failed = page.stats.fetch_failed,
            "Serving a short front page"
        );
    }
    Ok(state.renderer.render(&page.into_page_data())?)
}
