//! Service entry point

use catalog_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load_for_service("catalog-service")?;

    init_tracing(&config)?;

    let state = AppState::from_config(config.clone()).await?;

    let app = handlers::router(state);

    Server::new(config).serve(app).await
}
