use std::sync::Arc;

use ulusm_core::config::{self, Config};

#[tokio::main]
async fn main() -> Result<(), ulusm_core::Error> {
    // .env first, so RUST_LOG set there reaches the log filter.
    config::load_dotenv();
    ulusm_core::logging::init("ulusm")?;

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!(error = %e, "refusing to start");
            return Err(e);
        }
    };

    ulusm_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| ulusm_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
