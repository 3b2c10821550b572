use addon_release::{
    arguments::Arguments,
    release::{self, ReleaseOptions},
};
use clap::Parser;
use log::{LevelFilter, error, info};
use pretty_env_logger::env_logger::Target;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .target(Target::Stdout)
        .init();

    // Captured once so the changelog and news headers always agree
    let today = chrono::Local::now().date_naive();

    let options = ReleaseOptions {
        version_kind: args.version_kind,
        changelog_text: args.changelog_text,
        add_date: args.add_date,
        update_news: args.update_news,
        today,
    };

    match release::run(&args.path, &options) {
        Ok(summary) => {
            info!(
                "Released {} -> {} in {}",
                summary.old_version,
                summary.new_version,
                summary.addon_xml.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}. exiting...", err);
            ExitCode::FAILURE
        }
    }
}
