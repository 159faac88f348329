/// What one front page request produced, ready to be rendered.
#[derive(Debug)]
pub(crate) struct StoryPage {
    /// In the order the fetches finished, not in ranking order.
    pub(crate) stories: Vec<crate::story::DisplayItem>,
    pub(crate) time: std::time::Duration,
    pub(crate) completion: crate::collector::Completion,
    pub(crate) stats: crate::fetch::PoolStats,
}

impl StoryPage {
    pub(crate) fn into_page_data(self) -> crate::render::PageData {
        crate::render::PageData {
            stories: self.stories,
            time: self.time,
        }
    }
}

/// Lists the top items and gathers the first `num_stories` story links among
/// them. Everything this creates (token, channel, tasks) belongs to this call.
pub(crate) async fn top_stories(
    api: std::sync::Arc<dyn crate::hn_api::HnApi>,
    num_stories: usize,
) -> Result<StoryPage, crate::error::Error> {
    let start = std::time::Instant::now();

    let ids = match api.top_items().await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!(error = %e, "Error listing top stories");
            return Err(crate::error::Error::Listing(e));
        }
    };

    tracing::info!(num_ids = ids.len(), num_stories, "Got top story ids");

    let cancel = tokio_util::sync::CancellationToken::new();
    // Stop the fetchers if this request is dropped half way.
    let guard = cancel.clone().drop_guard();

    let pool = crate::fetch::spawn_fetchers(api, ids, num_stories, cancel.clone());
    let collected = crate::collector::collect(pool.stories, num_stories, &cancel).await;

    let stats = match pool.supervisor.await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!(error =? e, "Fetch supervisor did not finish");
            crate::fetch::PoolStats::default()
        }
    };
    guard.disarm();

    let time = start.elapsed();

    tracing::info!(
        num_stories = collected.stories.len(),
        completion =? collected.completion,
        spawned = stats.spawned,
        completed = stats.completed(),
        delivered = stats.delivered,
        not_qualifying = stats.not_qualifying,
        fetch_failed = stats.fetch_failed,
        cancelled = stats.cancelled,
        panicked = stats.panicked,
        elapsed =? time,
        "Collected stories"
    );

    Ok(StoryPage {
        stories: collected.stories,
        time,
        completion: collected.completion,
        stats,
    })
}
