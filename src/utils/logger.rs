use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "sheet_reminder=info,warn";
const VERBOSE_FILTER: &str = "sheet_reminder=debug,info";

/// RUST_LOG 優先，否則使用預設層級
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Lambda 使用 JSON 格式，方便 CloudWatch 查詢
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .with_current_span(false),
        )
        .init();
}
