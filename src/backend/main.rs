/**
 * Expense Tracker Server Entry Point
 *
 * Loads configuration, opens the database and serves the REST API.
 * A missing `JWT_SECRET` or an invalid setting stops startup with a
 * non-zero exit code.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use expense_tracker::backend::server::{create_app, ServerConfig};

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[STARTUP] Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started: {:?}", config);

    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    eprintln!("[STARTUP] Client should connect to http://127.0.0.1:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin expense-server --features ssr");
    std::process::exit(1);
}
