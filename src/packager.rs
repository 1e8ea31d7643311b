use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// The macOS tool that turns an `.iconset` directory into an `.icns` file.
pub const DEFAULT_PROGRAM: &str = "iconutil";

/// Runs the external packager.
#[derive(Clone, Debug)]
pub struct Packager {
    program: OsString,
}

impl Default for Packager {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Packager {
    /// A packager that runs `program` instead of `iconutil`. It must accept
    /// `iconutil`'s `-c icns -o <output> <iconset>` arguments.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    /// The program that will be run.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Pack `iconset` into `output`, blocking until the packager exits.
    ///
    /// # Errors
    /// [`Error::Launch`] if it can't be started, [`Error::Crashed`] if it is
    /// killed, [`Error::ExitCode`] if it exits unsuccessfully.
    pub fn pack(&self, iconset: &Path, output: &Path) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.args(["-c", "icns", "-o"]).arg(output).arg(iconset);

        info!("Running {}", self.program.to_string_lossy());
        debug!("{command:?}");

        let status = command
            .status()
            .map_err(|source| Error::Launch { program: self.program.clone(), source })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(Error::ExitCode { program: self.program.clone(), code }),
            None => Err(Error::Crashed { program: self.program.clone() }),
        }
    }
}
