//! Test doubles shared by the module tests.

use crate::hn_api::{FetchError, HnApi, Item, ItemId, ItemKind};

pub(crate) fn story(id: ItemId) -> Item {
    Item {
        id,
        title: format!("Story {id}"),
        url: Some(format!("https://www.example{id}.com/post")),
        kind: ItemKind::Story,
        ..Default::default()
    }
}

pub(crate) fn ask_hn(id: ItemId) -> Item {
    Item {
        id,
        title: format!("Ask HN: question {id}"),
        kind: ItemKind::Story,
        ..Default::default()
    }
}

pub(crate) fn job(id: ItemId) -> Item {
    Item {
        id,
        title: format!("Job {id}"),
        url: Some(format!("https://jobs.example.com/{id}")),
        kind: ItemKind::Job,
        ..Default::default()
    }
}

/// In-memory `HnApi`. Unknown ids and ids in `failing` fail like a remote
/// error would.
#[derive(Default)]
pub(crate) struct MockApi {
    pub(crate) top: Vec<ItemId>,
    pub(crate) items: std::collections::HashMap<ItemId, Item>,
    pub(crate) failing: std::collections::HashSet<ItemId>,
    pub(crate) listing_fails: bool,
    /// Latency of `get_item`, varied per id so completions interleave.
    pub(crate) latency: Option<std::time::Duration>,
    pub(crate) panic_on: Option<ItemId>,
    pub(crate) item_calls: std::sync::atomic::AtomicUsize,
}

impl MockApi {
    pub(crate) fn with_items(items: Vec<Item>) -> Self {
        Self {
            top: items.iter().map(|i| i.id).collect(),
            items: items.into_iter().map(|i| (i.id, i)).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn item_calls(&self) -> usize {
        self.item_calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HnApi for MockApi {
    async fn top_items(&self) -> Result<Vec<ItemId>, FetchError> {
        if self.listing_fails {
            return Err(FetchError::Status {
                url: "mock://topstories.json".to_string(),
                status: reqwest::StatusCode::BAD_GATEWAY,
            });
        }
        Ok(self.top.clone())
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, FetchError> {
        self.item_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency * (1 + (id % 7) as u32)).await;
        }

        if self.panic_on == Some(id) {
            panic!("mock api blew up on {id}");
        }

        if self.failing.contains(&id) {
            return Err(FetchError::Missing(id));
        }

        self.items.get(&id).cloned().ok_or(FetchError::Missing(id))
    }
}
