/// Failures that abort a front page request. A single item failing to load is
/// not one of them, the fetchers log it and move on.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("failed to load top stories")]
    Listing(#[source] crate::hn_api::FetchError),

    #[error("failed to render page")]
    Render(#[from] crate::render::RenderError),
}

impl Error {
    /// Text shown to the visitor. Details stay in the logs.
    pub(crate) fn public_message(&self) -> &'static str {
        match self {
            Error::Listing(_) => "Failed to load top stories",
            Error::Render(_) => "Failed to process the template",
        }
    }
}
