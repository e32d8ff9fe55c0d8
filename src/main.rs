use anyhow::Context;
use rover_lib::config::Config;
use rover_lib::server::start_server;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rover=info,rover_lib=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            Config::load(&path).with_context(|| format!("failed to load config from {path}"))?
        }
        None => Config::default(),
    };
    let grid = config.grid.build().context("invalid grid configuration")?;

    println!(
        "Starting server on {}. Try GET /execute?commands=MMRMMLM or /map?commands=MMRMMLM.",
        config.listen
    );
    start_server(&config.listen, grid)
}
