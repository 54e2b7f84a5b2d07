use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `ARGPROBE_LOG` takes priority over `RUST_LOG`; with neither set the level
/// follows `-verbose=N` (0 warn, 1 info, 2 debug, 3+ trace).
pub fn init(verbose: i64) {
    let level = match verbose {
        i64::MIN..=0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("ARGPROBE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}
