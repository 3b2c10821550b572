use crate::locator;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub mod addon_xml;
pub mod changelog;

/// A text file the release touches: found by name under a root directory,
/// read whole and overwritten whole.
pub trait ReleaseDocument {
    /// Short name used in log output.
    const NAME: &'static str;

    fn locate(path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        let found = locator::find_first(path, Self::filename_pattern())?;
        match &found {
            Some(file) => info!("Found {}: {}", Self::NAME, file.display()),
            None => debug!("No {} found", Self::NAME),
        }
        Ok(found)
    }

    fn read(file: impl AsRef<Path>) -> Result<String> {
        let file = file.as_ref();
        debug!("Reading {}", file.display());
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {} at {:?}", Self::NAME, file))
    }

    fn write(file: impl AsRef<Path>, contents: &str) -> Result<()> {
        let file = file.as_ref();
        info!("Writing {}", file.display());
        std::fs::write(file, contents)
            .with_context(|| format!("Failed to write {} at {:?}", Self::NAME, file))
    }

    fn filename_pattern() -> &'static str;
}
