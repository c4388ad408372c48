use anyhow::Context;

use excelgen_api::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    excelgen_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    match config.template_path.try_exists() {
        Ok(true) => {}
        Ok(false) => tracing::warn!(
            template = %config.template_path.display(),
            "template not found; generation will fail until it is provided"
        ),
        Err(e) => tracing::warn!(error = %e, "could not probe template path"),
    }

    let addr = config.bind_addr();
    let app = excelgen_api::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
