use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("addon.xml.in not found in directory: {0}")]
    DescriptorNotFound(String),
    #[error("Unable to determine the current version in {}", .0.display())]
    VersionNotFound(PathBuf),
    #[error("version=\"{0}\" not found for replacement, descriptor left unmodified")]
    VersionNotReplaced(String),
    #[error("Invalid version '{0}', expected MAJOR.MINOR.MICRO")]
    InvalidVersion(String),
}
