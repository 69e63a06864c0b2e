fn main() {
    // Initialize logging; stdout is reserved for the greeting
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::debug!("junai-key-cli v{}", env!("CARGO_PKG_VERSION"));
    junai_key_cli::run();
}
