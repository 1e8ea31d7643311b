use std::fs;
use std::path::Path;
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use resvg::{tiny_skia, usvg};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::iconset::RasterTarget;

/// A parsed SVG, ready to be rendered at any size.
pub struct Document {
    tree: usvg::Tree,
}

impl Document {
    /// Read and parse the SVG at `path`.
    ///
    /// Relative references inside the document resolve against its directory,
    /// and the system fonts are made available for `<text>` elements.
    ///
    /// # Errors
    /// [`Error::Read`] if the file can't be read, [`Error::Parse`] if it isn't
    /// a valid SVG.
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|source| Error::Read { path: path.to_owned(), source })?;

        let mut options = usvg::Options {
            resources_dir: path.parent().map(Path::to_path_buf),
            ..usvg::Options::default()
        };
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        debug!("Loaded {} font faces", options.fontdb.len());

        Self::from_data(&data, &options).map_err(|source| Error::Parse { path: path.to_owned(), source })
    }

    /// Parse an in-memory SVG document.
    ///
    /// # Errors
    /// Whatever `usvg` reports for malformed input.
    pub fn from_data(data: &[u8], options: &usvg::Options) -> std::result::Result<Self, usvg::Error> {
        let tree = usvg::Tree::from_data(data, options)?;
        Ok(Self { tree })
    }

    /// Intrinsic width and height of the document.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let size = self.tree.size();
        (size.width(), size.height())
    }

    /// Render into an `edge`x`edge` bitmap with a transparent background.
    ///
    /// The document is stretched to fill the whole square, so a non-square
    /// document is scaled by a different factor along each axis.
    ///
    /// # Errors
    /// [`Error::Render`] if no bitmap of that size can be allocated.
    #[allow(clippy::cast_precision_loss)]
    pub fn rasterize(&self, edge: u32) -> Result<RgbaImage> {
        let mut pixmap = tiny_skia::Pixmap::new(edge, edge).ok_or(Error::Render { edge })?;

        let (width, height) = self.size();
        let transform = tiny_skia::Transform::from_scale(edge as f32 / width, edge as f32 / height);
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        // tiny-skia keeps premultiplied alpha, PNG wants it straight
        let rgba = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();

        RgbaImage::from_raw(edge, edge, rgba).ok_or(Error::Render { edge })
    }
}

/// Encode a bitmap as PNG.
///
/// # Errors
/// [`Error::Encode`] if the encoder rejects the bitmap.
pub fn encode_png(bitmap: &RgbaImage) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(bitmap.as_raw(), bitmap.width(), bitmap.height(), ColorType::Rgba8)
        .map_err(|source| Error::Encode { edge: bitmap.width(), source })?;
    Ok(png)
}

/// Render `target` once and write it to each of its file names inside `dir`.
///
/// Every file of a target receives the same encoded bytes.
///
/// # Errors
/// The first render, encode or write failure; later files are not attempted.
pub fn write_target(document: &Document, target: &RasterTarget, dir: &Path) -> Result<()> {
    info!("Rendering {0}x{0}", target.edge);
    let png = encode_png(&document.rasterize(target.edge)?)?;

    for name in target.file_names() {
        let path = dir.join(name);
        fs::write(&path, &png).map_err(|source| Error::Write { path: path.clone(), source })?;
        debug!("Wrote {}", path.display());
    }

    Ok(())
}
