use tracing_subscriber::util::SubscriberInitExt;

pub(crate) mod collector;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod fetch;
pub(crate) mod handler;
pub(crate) mod hn_api;
pub(crate) mod render;
pub(crate) mod server;
pub(crate) mod story;
#[cfg(test)]
pub(crate) mod test_support;

pub(crate) static CLIENT: std::sync::LazyLock<reqwest::Client> = std::sync::LazyLock::new(|| {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config::config().fetch_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().expect("Failed to build HTTP client")
});

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 3000)]
    #[arg(help = "The port to start the web server on")]
    port: u16,

    #[arg(short, long, default_value_t = 30)]
    #[arg(help = "The number of top stories to display")]
    num_stories: usize,

    #[arg(short, long, default_value = "false")]
    #[arg(help = "Log to console")]
    log_to_console: bool,
}

#[tokio::main]
async fn main() {
    use tracing_subscriber::layer::Layer;
    use tracing_subscriber::layer::SubscriberExt;

    use clap::Parser;
    let args = Args::parse();

    let file_appender = tracing_appender::rolling::daily(&config::config().log_dir, "quiet_hn.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_filter(tracing::level_filters::LevelFilter::INFO)
        .boxed();

    let pretty_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stdout)
        .with_filter(tracing::level_filters::LevelFilter::INFO)
        .boxed();

    let registry = tracing_subscriber::registry().with(file_layer);

    if config::config().log_to_console || args.log_to_console {
        registry.with(pretty_layer).init();
    } else {
        registry.init();
    };

    tracing::info!(
        config =? config::config(),
        args =? args,
        "Starting Quiet Hacker News"
    );

    let state = server::AppState {
        api: std::sync::Arc::new(hn_api::HttpHnApi::new(
            CLIENT.clone(),
            config::config().api_base_url.clone(),
        )),
        renderer: std::sync::Arc::new(render::HtmlRenderer),
        num_stories: args.num_stories,
    };

    if let Err(e) = server::serve(args.port, state).await {
        tracing::error!(error =? e, port = args.port, "Server failed");
        // Flush the file log before exiting.
        drop(guard);
        std::process::exit(1);
    }
}
