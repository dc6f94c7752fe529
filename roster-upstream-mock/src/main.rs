use std::sync::Arc;

use roster_upstream_mock::{EmployeeStore, MockState, Throttle, ThrottleConfig, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let port: u16 = std::env::var("MOCK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8112);
    let seed_count: usize = std::env::var("MOCK_SEED_COUNT")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(50);

    let throttle_config = ThrottleConfig::from_env();
    tracing::info!(
        seed_count,
        throttle_probability = throttle_config.probability,
        "seeding mock employee store"
    );

    let state = MockState {
        store: EmployeeStore::seeded(seed_count),
        throttle: Arc::new(Throttle::new(throttle_config)),
    };

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Mock employee API listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
