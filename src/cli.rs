use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::iconset::bundle_file_name;
use crate::packager::Packager;

/// Environment variable naming a replacement for `iconutil`.
pub const PACKAGER_ENV: &str = "SVG2ICNS_ICONUTIL";

/// Command line of the `svg2icns` binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "Creates an icns file from an svg image", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// The svg icon to convert
    #[arg(value_name = "SVG")]
    pub svg: PathBuf,
}

/// Everything a conversion needs to know.
#[derive(Clone, Debug)]
pub struct Config {
    /// The SVG to render.
    pub input: PathBuf,
    /// Where the bundle is written, relative to the working directory.
    pub output: PathBuf,
    /// Directory under which staging directories are created.
    pub temp_root: PathBuf,
    /// Packager to run on the finished iconset.
    pub packager: Packager,
}

impl Config {
    /// Defaults for converting `input`: `<basename>.icns` in the working
    /// directory, staging under the system temp directory, and `iconutil`.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            output: bundle_file_name(&input),
            input,
            temp_root: env::temp_dir().join("svg2icns"),
            packager: Packager::default(),
        }
    }

    /// Use the packager named by `program` when it is set and non-empty.
    #[must_use]
    pub fn with_packager_override(mut self, program: Option<OsString>) -> Self {
        if let Some(program) = program.filter(|p| !p.is_empty()) {
            self.packager = Packager::new(program);
        }
        self
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(args.svg).with_packager_override(env::var_os(PACKAGER_ENV))
    }
}
