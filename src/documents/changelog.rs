use crate::documents::ReleaseDocument;
use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use std::path::Path;

/// The flat, newest-first `changelog.txt`.
pub struct Changelog;

impl ReleaseDocument for Changelog {
    const NAME: &'static str = "changelog.txt";

    fn filename_pattern() -> &'static str {
        "changelog.txt"
    }
}

/// Trims the user supplied text and turns literal `\n` and `\t` into real
/// newlines and tabs.
pub fn sanitize_changelog_text(text: &str) -> String {
    text.trim().replace(r"\n", "\n").replace(r"\t", "\t")
}

/// Renders one release block, ie. `v1.0.1 (2021-07-17)\n<text>\n\n`.
///
/// The same block is written to the changelog and the news section, so both
/// read identically for a given release.
pub fn create_changelog_entry(version: &str, text: &str, date: Option<NaiveDate>) -> String {
    let header = match date {
        Some(date) => format!("v{version} ({})", date.format("%Y-%m-%d")),
        None => format!("v{version}"),
    };
    format!("{header}\n{text}\n\n")
}

pub fn prepend_changelog(entry: &str, content: &str) -> String {
    format!("{entry}{content}")
}

impl Changelog {
    /// Reads the changelog at `file` and returns it with `entry` on top.
    pub fn update_changelog(file: impl AsRef<Path>, entry: &str) -> Result<String> {
        let content = Self::read(file)?;
        Ok(prepend_changelog(entry, &content))
    }

    /// Writes the new changelog, logging the contents written.
    pub fn write_changelog(file: impl AsRef<Path>, contents: &str) -> Result<()> {
        info!("Writing {}:\n'''\n{}'''", Self::NAME, contents);
        Self::write(file, contents)
    }
}
