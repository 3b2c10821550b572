//! The release pipeline: bump the descriptor version, then optionally update
//! the changelog and the descriptor's news section.
//!
//! Files are written as soon as each step succeeds. A failure stops the run
//! without undoing earlier writes.

use crate::arguments::VersionKind;
use crate::documents::ReleaseDocument;
use crate::documents::addon_xml::AddonXml;
use crate::documents::changelog::{Changelog, create_changelog_entry, sanitize_changelog_text};
use crate::error::ReleaseError;
use crate::version::increment_version;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReleaseOptions {
    pub version_kind: VersionKind,
    /// Raw changelog text as typed on the command line.
    pub changelog_text: String,
    pub add_date: bool,
    pub update_news: bool,
    /// Date of the run, used for dated headers.
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary {
    pub addon_xml: PathBuf,
    pub old_version: String,
    pub new_version: String,
    pub changelog: Option<PathBuf>,
    pub news_updated: bool,
}

impl ReleaseOptions {
    fn entry_date(&self) -> Option<NaiveDate> {
        self.add_date.then_some(self.today)
    }
}

/// Runs the whole release against the first `addon.xml.in` and `changelog.txt`
/// found under `path`.
pub fn run(path: impl AsRef<Path>, options: &ReleaseOptions) -> Result<ReleaseSummary> {
    let path = path.as_ref();

    let addon_xml = AddonXml::locate(path)?
        .ok_or_else(|| ReleaseError::DescriptorNotFound(path.to_string_lossy().to_string()))?;
    let xml_content = AddonXml::read(&addon_xml)?;

    let old_version = AddonXml::current_version(&xml_content)?
        .ok_or_else(|| ReleaseError::VersionNotFound(addon_xml.clone()))?
        .to_string();
    let new_version = increment_version(&old_version, options.version_kind)?;

    let changelog_text = sanitize_changelog_text(&options.changelog_text);
    debug!("Changelog text: {:?}", changelog_text);

    let xml_content = AddonXml::update_xml_version(&xml_content, &old_version, &new_version)
        .with_context(|| format!("Unable to update the current version in {}", addon_xml.display()))?;
    AddonXml::write(&addon_xml, &xml_content)?;

    let entry = create_changelog_entry(&new_version, &changelog_text, options.entry_date());

    let changelog = Changelog::locate(path)?;
    if let Some(changelog) = &changelog {
        let contents = Changelog::update_changelog(changelog, &entry)?;
        Changelog::write_changelog(changelog, &contents)?;
    } else {
        info!("No {} found, skipping changelog update", Changelog::NAME);
    }

    let mut news_updated = false;
    if options.update_news {
        let news_content = AddonXml::update_news(&xml_content, &entry);
        news_updated = news_content != xml_content;
        AddonXml::write(&addon_xml, &news_content)?;
    }

    Ok(ReleaseSummary {
        addon_xml,
        old_version,
        new_version,
        changelog,
        news_updated,
    })
}
