//! Fetches items in parallel and hands qualifying stories to the collector.
//!
//! One task is spawned per id. Every task holds a clone of the sender, the
//! supervisor holds the original and drops it only after every task has been
//! joined, so the channel closes exactly once and never under a live sender.

use crate::hn_api::{HnApi, ItemId};
use crate::story::DisplayItem;

/// How a single fetch task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Delivered,
    NotQualifying,
    FetchFailed,
    /// Cancellation was observed before the fetch started or while waiting
    /// to deliver.
    Cancelled,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PoolStats {
    pub(crate) spawned: usize,
    pub(crate) delivered: usize,
    pub(crate) not_qualifying: usize,
    pub(crate) fetch_failed: usize,
    pub(crate) cancelled: usize,
    pub(crate) panicked: usize,
}

impl PoolStats {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Delivered => self.delivered += 1,
            Outcome::NotQualifying => self.not_qualifying += 1,
            Outcome::FetchFailed => self.fetch_failed += 1,
            Outcome::Cancelled => self.cancelled += 1,
        }
    }

    /// Number of tasks that have signalled completion, whichever way they
    /// ended.
    pub(crate) fn completed(&self) -> usize {
        self.delivered + self.not_qualifying + self.fetch_failed + self.cancelled + self.panicked
    }
}

pub(crate) struct FetchPool {
    pub(crate) stories: tokio::sync::mpsc::Receiver<DisplayItem>,
    pub(crate) supervisor: tokio::task::JoinHandle<PoolStats>,
}

/// Spawns one fetch task per id. The returned receiver yields qualifying
/// stories in completion order and closes once every task is done.
pub(crate) fn spawn_fetchers(
    api: std::sync::Arc<dyn HnApi>,
    ids: Vec<ItemId>,
    capacity: usize,
    cancel: tokio_util::sync::CancellationToken,
) -> FetchPool {
    // A bounded channel needs room for at least one story.
    let (sender, stories) = tokio::sync::mpsc::channel(capacity.max(1));

    let mut tasks: tokio::task::JoinSet<Outcome> = tokio::task::JoinSet::new();
    for id in ids {
        tasks.spawn(fetch_one(
            std::sync::Arc::clone(&api),
            id,
            sender.clone(),
            cancel.clone(),
        ));
    }

    let supervisor = tokio::spawn(async move {
        let mut stats = PoolStats {
            spawned: tasks.len(),
            ..Default::default()
        };

        while let Some(res) = tasks.join_next().await {
            match res {
                Ok(outcome) => stats.record(outcome),
                Err(e) => {
                    tracing::error!(error =? e, "Fetch task did not finish");
                    stats.panicked += 1;
                }
            }
        }

        drop(sender);
        stats
    });

    FetchPool { stories, supervisor }
}

async fn fetch_one(
    api: std::sync::Arc<dyn HnApi>,
    id: ItemId,
    sender: tokio::sync::mpsc::Sender<DisplayItem>,
    cancel: tokio_util::sync::CancellationToken,
) -> Outcome {
    if cancel.is_cancelled() {
        return Outcome::Cancelled;
    }

    let item = match api.get_item(id).await {
        Ok(item) => item,
        Err(e) => {
            tracing::warn!(id, error = %e, "Error fetching item");
            return Outcome::FetchFailed;
        }
    };

    let story = DisplayItem::new(item);
    if !story.is_story_link() {
        tracing::debug!(id = story.item.id, kind =? story.item.kind, "Not a story link");
        return Outcome::NotQualifying;
    }

    tokio::select! {
        res = sender.send(story) => match res {
            Ok(()) => Outcome::Delivered,
            // The collector is gone, it has all it wanted.
            Err(_) => Outcome::Cancelled,
        },
        _ = cancel.cancelled() => Outcome::Cancelled,
    }
}
