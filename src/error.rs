use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a conversion. None of these are retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The staging directory could not be created.
    #[error("Unable to create temporary directory: {0}")]
    TempDir(#[source] io::Error),

    /// The `.iconset` directory inside the staging directory could not be created.
    #[error("Unable to create {} directory: {source}", path.display())]
    IconsetDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },

    /// The input file could not be read.
    #[error("Unable to load {}: {source}", path.display())]
    Read {
        /// Input file.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },

    /// The input file is not a usable SVG document.
    #[error("Unable to load {}: {source}", path.display())]
    Parse {
        /// Input file.
        path: PathBuf,
        /// Parser failure.
        source: resvg::usvg::Error,
    },

    /// No bitmap could be allocated for the requested edge length.
    #[error("Unable to allocate a {edge}x{edge} bitmap")]
    Render {
        /// Requested edge length.
        edge: u32,
    },

    /// A rendered bitmap could not be encoded as PNG.
    #[error("Unable to encode {edge}x{edge} bitmap: {source}")]
    Encode {
        /// Edge length of the bitmap.
        edge: u32,
        /// Encoder failure.
        source: image::ImageError,
    },

    /// A PNG could not be written into the iconset.
    #[error("Unable to write {}: {source}", path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },

    /// The packager could not be started.
    #[error("Unable to launch {}: {source}", program.to_string_lossy())]
    Launch {
        /// Program that was run.
        program: OsString,
        /// Spawn failure.
        source: io::Error,
    },

    /// The packager was killed before it could exit.
    #[error("{} crashed!", program.to_string_lossy())]
    Crashed {
        /// Program that was run.
        program: OsString,
    },

    /// The packager exited with a non-zero status.
    #[error("{} returned {code}", program.to_string_lossy())]
    ExitCode {
        /// Program that was run.
        program: OsString,
        /// Its exit status.
        code: i32,
    },

    /// The staging directory could not be removed after a successful run.
    #[error("Unable to remove {}: {source}", path.display())]
    Cleanup {
        /// Staging directory.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
