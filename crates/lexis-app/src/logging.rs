use lexis_config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber; logs go to stderr, stdout belongs to the front end
pub fn init(format: LogFormat, verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder
            .with_ansi(atty::is(atty::Stream::Stderr))
            .compact()
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}
