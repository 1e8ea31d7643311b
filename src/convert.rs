use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::Config;
use crate::error::Result;
use crate::iconset::ICONSET;
use crate::render::{write_target, Document};
use crate::staging::StagingDir;

/// Render `config.input` into a fresh iconset and pack it into `config.output`.
///
/// Returns the path of the bundle. The first failure aborts the run and
/// leaves the staging directory behind.
///
/// # Errors
/// Any [`Error`](crate::Error) raised along the way.
pub fn svg_to_icns(config: &Config) -> Result<PathBuf> {
    let staging = StagingDir::create_in(&config.temp_root)?;

    let document = Document::open(&config.input)?;
    let (width, height) = document.size();
    debug!("Loaded {} ({width}x{height})", config.input.display());

    for target in &ICONSET {
        write_target(&document, target, staging.iconset())?;
    }

    config.packager.pack(staging.iconset(), &config.output)?;
    staging.remove()?;

    info!("Wrote {}", config.output.display());
    Ok(config.output.clone())
}
