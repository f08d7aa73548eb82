//! Demo run of the height screen.
//!
//! A producer task plays the part of the platform: it starts the screen,
//! feeds a few height readings, simulates a rotation (stop then start) and
//! finishes the screen. The host loop applies each event on the main task.
//!
//! ```bash
//! RUST_LOG=info cargo run -p binding-sample
//! BINDING_RECIPE_CONFIG=screen.toml RUST_LOG=debug cargo run -p binding-sample
//! ```

use binding_framework::tracing::setup_tracing;
use binding_sample::config::ScreenConfig;
use binding_sample::lifecycle::ActivityHost;
use std::time::Duration;
use tracing::{info, Instrument};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ScreenConfig::from_env().map_err(|e| e.to_string())?;
    info!(initial_height = config.initial_height, "Starting height screen");

    let (host, handle) = ActivityHost::new(config, 16);
    let label = host.activity().text_view_height().clone();

    let span = tracing::info_span!("platform");
    let platform = tokio::spawn(
        async move {
            handle.start().await?;
            for cm in [172, 175] {
                info!(cm, "Height reading");
                handle.set_height(cm).await?;
                tokio::time::sleep(Duration::from_millis(20)).await;
            }

            info!("Rotating screen");
            handle.stop().await?;
            handle.set_height(176).await?;
            handle.start().await?;

            handle.set_height(178).await?;
            info!(delta = -2, "Height correction");
            handle.adjust_height(-2).await?;
            handle.destroy().await
        }
        .instrument(span),
    );

    let report = host.run().await.map_err(|e| e.to_string())?;
    platform
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())?;

    info!(
        label = %label.text(),
        height = ?report.final_height,
        events = report.events,
        activations = report.activations,
        "Application completed successfully"
    );
    Ok(())
}
