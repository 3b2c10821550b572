use crate::arguments::VersionKind;
use crate::error::ReleaseError;
use anyhow::Result;
use log::debug;

/// Splits a `MAJOR.MINOR.MICRO` version into its three numeric components,
/// keeping their text as written (leading zeros included).
pub fn split_version(version: &str) -> Result<[&str; 3]> {
    let components: Vec<&str> = version.split('.').collect();
    let valid = components
        .iter()
        .all(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()));
    match components.as_slice() {
        [major, minor, micro] if valid => Ok([*major, *minor, *micro]),
        _ => Err(ReleaseError::InvalidVersion(version.to_string()).into()),
    }
}

fn bump(version: &str, component: &str) -> Result<String> {
    component
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_add(1))
        .map(|value| value.to_string())
        .ok_or_else(|| ReleaseError::InvalidVersion(version.to_string()))
        .map_err(anyhow::Error::from)
}

/// Computes the next version. Only the bumped component is rewritten, and
/// minor never carries into major.
pub fn increment_version(version: &str, kind: VersionKind) -> Result<String> {
    let [major, minor, micro] = split_version(version)?;
    let next = match kind {
        VersionKind::Micro => format!("{major}.{minor}.{}", bump(version, micro)?),
        VersionKind::Minor => format!("{major}.{}.0", bump(version, minor)?),
    };
    debug!("Incrementing version from {} -> {}", version, next);
    Ok(next)
}
