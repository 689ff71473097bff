use datastar_bench::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    // A page that cannot be read stops the process before anything listens.
    let assets = Assets::load(&config.assets).await?;
    let state = AppState::new(assets, config.sse.clone());
    let app = router(state, &config.routes);

    Server::new(config).serve(app).await
}
