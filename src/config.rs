const DEFAULT_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) api_base_url: String,
    /// `None` means requests to the item API never time out.
    pub(crate) fetch_timeout: Option<std::time::Duration>,
    pub(crate) log_dir: String,
    pub(crate) log_to_console: bool,
}

pub(crate) static CONFIG: std::sync::LazyLock<Config> = std::sync::LazyLock::new(|| {
    // A missing .env is fine, everything has a default.
    let _ = dotenvy::dotenv();

    let fetch_timeout_secs: u64 = env_or("HN_FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS);

    Config {
        api_base_url: env_or("HN_API_BASE_URL", DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string(),
        fetch_timeout: (fetch_timeout_secs > 0)
            .then(|| std::time::Duration::from_secs(fetch_timeout_secs)),
        log_dir: env_or("LOG_DIR", "./log".to_string()),
        log_to_console: env_or("LOG_TO_CONSOLE", false),
    }
});

pub(crate) fn config() -> &'static Config {
    &CONFIG
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => parse_value(key, &value),
        Err(_) => default,
    }
}

fn parse_value<T>(key: &str, value: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .unwrap_or_else(|e| panic!("{key} is set to an invalid value {value:?}: {e}"))
}
