//! Binary entrypoint for the parks HTTP server.
//!
//! Configuration comes from command-line flags with environment fallbacks;
//! see [`ServerArgs`] for the full list.

use clap::Parser;

use parks_server::config::ServerArgs;
use parks_server::router::build_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let state = args.build_state()?;
    let app = build_router(state);

    let addr = args.bind_address();
    tracing::info!("parks server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
