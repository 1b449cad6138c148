//! testprobe CLI entry point

#[cfg(any(unix, windows))]
fn main() {
    // Initialize structured logging with env-based filter, defaulting to info.
    // Diagnostics go to stderr; stdout is left to the loaded bundle.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    testprobe::cli::run();
}

#[cfg(not(any(unix, windows)))]
fn main() {
    // Inspecting a bundle requires a platform dynamic-loading facility.
    eprintln!("Only platforms with dynamic library support are supported.");
    std::process::exit(1);
}
