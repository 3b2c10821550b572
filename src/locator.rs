use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        ..MatchOptions::new()
    }
}

/// Files sort before directories so a directory's own files are yielded
/// before anything found in its subdirectories.
fn files_first(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Lazily walks `root` depth-first and yields every file whose name matches the
/// glob `pattern`.
pub fn walk(root: impl AsRef<Path>, pattern: &str) -> Result<impl Iterator<Item = PathBuf>> {
    let root = root.as_ref();
    let pattern = Pattern::new(pattern)
        .with_context(|| format!("Invalid file pattern '{}'", pattern))?;
    let options = match_options();
    debug!("Walking {:?} for '{}'", root, pattern);

    let files = WalkDir::new(root)
        .sort_by(files_first)
        .into_iter()
        .filter_map(|item| match item {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .filter(move |entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| pattern.matches_with(name, options))
        })
        .map(DirEntry::into_path);

    Ok(files)
}

/// Returns the first file under `root` matching `pattern`, if there is one.
pub fn find_first(root: impl AsRef<Path>, pattern: &str) -> Result<Option<PathBuf>> {
    Ok(walk(root, pattern)?.next())
}
