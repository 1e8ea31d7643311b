//! The fixed table of renders that make up a macOS iconset.
//!
//! Sizes follow Apple's high resolution guidelines: every point size from
//! 16 to 512 has a 1x and a 2x slot, so several renders land in two slots.

use std::path::{Path, PathBuf};

/// Name of the directory `iconutil` packs. The `.iconset` extension is required.
pub const ICONSET_DIR: &str = "out.iconset";

/// One square render and the iconset slot(s) it fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterTarget {
    /// Edge length of the square bitmap, in pixels.
    pub edge: u32,
    /// File name of the slot this render was made for.
    pub primary: &'static str,
    /// A second slot of the same pixel size, usually an `@2x` variant.
    pub secondary: Option<&'static str>,
}

impl RasterTarget {
    const fn new(edge: u32, primary: &'static str, secondary: Option<&'static str>) -> Self {
        Self { edge, primary, secondary }
    }

    /// Every file name this render is written to, primary first.
    pub fn file_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

/// All renders, largest first.
pub const ICONSET: [RasterTarget; 7] = [
    RasterTarget::new(1024, "icon_512x512@2x.png", None),
    RasterTarget::new(512, "icon_512x512.png", Some("icon_256x256@2x.png")),
    RasterTarget::new(256, "icon_256x256.png", Some("icon_128x128@2x.png")),
    RasterTarget::new(128, "icon_128x128.png", None),
    RasterTarget::new(64, "icon_32x32@2x.png", None),
    RasterTarget::new(32, "icon_32x32.png", Some("icon_16x16@2x.png")),
    RasterTarget::new(16, "icon_16x16.png", None),
];

/// Number of PNG files a complete iconset holds.
#[must_use]
pub fn file_count() -> usize {
    ICONSET.iter().map(|target| target.file_names().count()).sum()
}

/// Name of the bundle produced for `input`: everything before the first `.`
/// of the file name, plus `.icns`.
///
/// A dot-file such as `.svg` would leave nothing before the first dot; the
/// regular file stem is used then, and `icon` if even that is missing.
#[must_use]
pub fn bundle_file_name(input: &Path) -> PathBuf {
    let file_name = input.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    let base = match file_name.split('.').next() {
        Some(base) if !base.is_empty() => base.to_owned(),
        _ => input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "icon".to_owned()),
    };

    PathBuf::from(format!("{base}.icns"))
}
