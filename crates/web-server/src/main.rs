use std::net::SocketAddr;

// This main function is the entry point when running `cargo run -p web-server`.
// It serves the API with plain stdout logging; the full `gatekeeper` binary
// adds the trace.log sink and the console management mode.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = configuration::load_settings("config.yaml")?;
    let pool = database::connect(&settings.database).await?;
    database::init_schema(&pool).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    web_server::run_server(addr, pool).await
}
