//! Render an SVG at every size of a macOS iconset and pack the result into an
//! `.icns` bundle with `iconutil`.
//!
//! # Usage
//! ## Command line
//! ```text
//! svg2icns logo.svg
//! # writes ./logo.icns
//! ```
//!
//! The staging directory is removed once `iconutil` succeeds. On any failure
//! it is left in place and its path is printed, so the partial iconset can be
//! inspected.
//!
//! ## Library
//! ```
//! use std::path::{Path, PathBuf};
//! use svg2icns::{bundle_file_name, ICONSET};
//!
//! // Seven renders fill ten iconset slots.
//! assert_eq!(ICONSET.len(), 7);
//! assert_eq!(ICONSET.iter().flat_map(|t| t.file_names()).count(), 10);
//!
//! assert_eq!(bundle_file_name(Path::new("art/logo.svg")), PathBuf::from("logo.icns"));
//! ```
//!
//! The whole pipeline is available as [`svg_to_icns`], driven by a [`Config`]:
//! ```no_run
//! # fn run() -> svg2icns::Result<()> {
//! let config = svg2icns::Config::new("logo.svg");
//! let bundle = svg2icns::svg_to_icns(&config)?;
//! println!("{}", bundle.display());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::pedantic)]

mod cli;
mod convert;
mod error;
mod iconset;
mod packager;
mod render;
mod staging;

pub use cli::{Args, Config, PACKAGER_ENV};
pub use convert::svg_to_icns;
pub use error::{Error, Result};
pub use iconset::{bundle_file_name, file_count, RasterTarget, ICONSET, ICONSET_DIR};
pub use packager::{Packager, DEFAULT_PROGRAM};
pub use render::{encode_png, write_target, Document};
pub use staging::StagingDir;
