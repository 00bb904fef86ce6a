//! Process setup for the command line front end.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize logging with tracing_subscriber.
///
/// `RUST_LOG` takes precedence; `default_level` applies otherwise. Output goes
/// to stderr so JSON written to stdout stays machine-readable; colours only
/// when stderr is a terminal.
pub fn init_logging(default_level: &str) {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), default_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .with_ansi(use_ansi(&std::io::stderr()))
        .init();
}

fn use_ansi(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

fn build_filter(env: Option<&str>, default_level: &str) -> EnvFilter {
    env.and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
        .add_directive("reqwest=warn".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap())
}
