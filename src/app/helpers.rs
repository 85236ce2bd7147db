//! Async helpers shared by update handlers

use anyhow::Context;

use crate::features::Settings;

/// Persist settings without blocking the UI thread
pub async fn save_settings(settings: Settings) -> anyhow::Result<()> {
    tokio::task::spawn_blocking(move || settings.save().context("write settings file"))
        .await
        .context("settings save task panicked")?
}
