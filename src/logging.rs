use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "k6gen=info,tower_http=info";

/// Install the global tracing subscriber.
///
/// Logs go to stderr so a script printed to stdout stays clean.
/// `K6GEN_LOG_FORMAT=json` switches to JSON lines.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = std::env::var("K6GEN_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
