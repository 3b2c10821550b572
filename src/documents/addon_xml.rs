use crate::documents::ReleaseDocument;
use crate::error::ReleaseError;
use anyhow::Result;
use log::{debug, info, warn};
use regex::Regex;

pub const NEWS_TAG: &str = "<news>";

/// The add-on descriptor, `addon.xml.in`.
pub struct AddonXml;

impl ReleaseDocument for AddonXml {
    const NAME: &'static str = "addon.xml.in";

    fn filename_pattern() -> &'static str {
        "addon.xml.in"
    }
}

impl AddonXml {
    /// Matches the `version` attribute of the `<addon` tag, across line breaks.
    pub fn version_match_regex() -> Result<Regex> {
        Ok(Regex::new(r#"(?s)<addon.+?version="([0-9.]+)""#)?)
    }

    pub fn current_version(xml_content: &str) -> Result<Option<&str>> {
        let version_regex = Self::version_match_regex()?;
        let version = version_regex
            .captures(xml_content)
            .and_then(|captures| captures.get(1))
            .map(|version| version.as_str());
        match version {
            Some(version) => debug!("Found current version: {}", version),
            None => warn!("Unable to determine current version"),
        }
        Ok(version)
    }

    /// Replaces every literal `version="<old>"` with `version="<new>"`. Leaving
    /// the content unchanged is an error.
    pub fn update_xml_version(
        xml_content: &str,
        old_version: &str,
        new_version: &str,
    ) -> Result<String> {
        info!("\tOld Version: {}", old_version);
        info!("\tNew Version: {}", new_version);

        let new_content = xml_content.replace(
            &format!(r#"version="{old_version}""#),
            &format!(r#"version="{new_version}""#),
        );
        if new_content == xml_content {
            return Err(ReleaseError::VersionNotReplaced(old_version.to_string()).into());
        }
        Ok(new_content)
    }

    /// Inserts `entry` right after the first `<news>` tag, then collapses each
    /// run of two blank lines into one. The collapse is a single pass.
    pub fn update_news(xml_content: &str, entry: &str) -> String {
        if !xml_content.contains(NEWS_TAG) {
            warn!("No {} section in {}, news left unchanged", NEWS_TAG, Self::NAME);
            return xml_content.to_string();
        }
        info!("Adding news to {}:\n'''\n{}'''", Self::NAME, entry);

        xml_content
            .replacen(NEWS_TAG, &format!("{NEWS_TAG}\n{entry}"), 1)
            .replace("\n\n\n", "\n\n")
    }
}
