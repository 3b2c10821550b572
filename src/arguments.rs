use clap::{Parser, ValueEnum};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum VersionKind {
    /// Increment the micro version, ie. 1.0.0 -> 1.0.1
    #[default]
    Micro,
    /// Increment the minor version and reset micro, ie. 1.0.1 -> 1.1.0
    Minor,
}

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "addon-release")]
pub struct Arguments {
    /// Increment "micro" or "minor" version
    #[arg(value_enum, ignore_case = true)]
    pub version_kind: VersionKind,
    /// Text to be added to the changelog (without version number). Literal \n and \t are unescaped
    #[arg(allow_hyphen_values = true)]
    pub changelog_text: String,
    /// Add date to version number in changelog and news. ie. "v1.0.1 (2021-07-17)"
    #[arg(long, short = 'd')]
    pub add_date: bool,
    /// Add changes to news section of the addon.xml.in
    #[arg(long, short = 'n')]
    pub update_news: bool,
    /// Directory searched recursively for addon.xml.in and changelog.txt
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
}
