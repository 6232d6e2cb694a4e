//! Static site build command.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use nishkaam_static::StaticBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;
    let config = file_config.build_config(output, minify);

    let fallbacks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fallbacks);
    let resolver = file_config
        .resolver()?
        .with_fallback_hook(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

    let result = StaticBuilder::new(config, resolver).build().await?;

    tracing::info!(
        "Built {} pages ({} documents) in {}ms",
        result.pages,
        result.documents,
        result.duration_ms
    );

    let fallbacks = fallbacks.load(Ordering::Relaxed);
    if fallbacks > 0 {
        tracing::warn!(
            "{} content lookups fell back to defaults. Run 'nishkaam check' for details.",
            fallbacks
        );
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
