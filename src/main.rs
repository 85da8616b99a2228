use anyhow::Result;
use room_thermal_sim::{api, config::Config, telemetry};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let cfg = Config::load()?;
    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "Server binding to 0.0.0.0 - the simulation API will be accessible from the network. \
            Bind to 127.0.0.1 unless behind a reverse proxy."
        );
    }

    let app = api::router(&cfg);

    info!(%addr, "starting room thermal simulation service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
