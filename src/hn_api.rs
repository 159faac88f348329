pub(crate) type ItemId = u64;

#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("item {0} does not exist")]
    Missing(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ItemKind {
    Story,
    Comment,
    Job,
    Poll,
    PollOpt,
    #[default]
    #[serde(other)]
    Other,
}

/// An item as returned by the Hacker News API. `kind` and `url` decide whether
/// it makes the front page.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Item {
    pub(crate) id: ItemId,
    pub(crate) by: String,
    pub(crate) score: i64,
    pub(crate) title: String,
    pub(crate) url: Option<String>,
    pub(crate) descendants: Option<i64>,

    #[serde(rename = "type")]
    pub(crate) kind: ItemKind,
}

#[async_trait::async_trait]
pub(crate) trait HnApi: Send + Sync {
    /// Ids of the current top items, best ranked first.
    async fn top_items(&self) -> Result<Vec<ItemId>, FetchError>;

    async fn get_item(&self, id: ItemId) -> Result<Item, FetchError>;
}

#[derive(Debug, Clone)]
pub(crate) struct HttpHnApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpHnApi {
    pub(crate) fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl HnApi for HttpHnApi {
    async fn top_items(&self) -> Result<Vec<ItemId>, FetchError> {
        self.get_json(format!("{}/topstories.json", self.base_url))
            .await
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, FetchError> {
        // The API answers `null` for ids it does not know about.
        self.get_json::<Option<Item>>(format!("{}/item/{}.json", self.base_url, id))
            .await?
            .ok_or(FetchError::Missing(id))
    }
}
