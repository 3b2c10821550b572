//! End-to-end tests for the addon-release binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ADDON_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<addon id="pvr.cli.example" version="1.4.9" name="CLI Example" provider-name="Team Kodi">
  <extension point="xbmc.addon.metadata">
    <news>
v1.4.9
- Previous fix
    </news>
  </extension>
</addon>
"#;

const CHANGELOG: &str = "v1.4.9\n- Previous fix\n";

fn release_cmd() -> Command {
    Command::cargo_bin("addon-release").unwrap()
}

fn create_addon() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let addon_dir = temp_dir.path().join("pvr.cli.example");
    fs::create_dir_all(&addon_dir).unwrap();
    fs::write(addon_dir.join("addon.xml.in"), ADDON_XML).unwrap();
    fs::write(addon_dir.join("changelog.txt"), CHANGELOG).unwrap();
    temp_dir
}

fn read(temp_dir: &TempDir, name: &str) -> String {
    fs::read_to_string(temp_dir.path().join("pvr.cli.example").join(name)).unwrap()
}

mod success {
    use super::*;

    #[test]
    fn micro_release_in_current_directory() {
        let temp_dir = create_addon();

        release_cmd()
            .current_dir(temp_dir.path())
            .args(["micro", "Testing"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found addon.xml.in"))
            .stdout(predicate::str::contains("New Version: 1.4.10"));

        assert!(read(&temp_dir, "addon.xml.in").contains(r#"version="1.4.10""#));
        assert_eq!(
            read(&temp_dir, "changelog.txt"),
            format!("v1.4.10\nTesting\n\n{CHANGELOG}")
        );
    }

    #[test]
    fn minor_release_with_path_flag() {
        let temp_dir = create_addon();

        release_cmd()
            .args(["minor", "Feature"])
            .arg("--path")
            .arg(temp_dir.path())
            .assert()
            .success();

        assert!(read(&temp_dir, "addon.xml.in").contains(r#"version="1.5.0""#));
        assert!(read(&temp_dir, "changelog.txt").starts_with("v1.5.0\nFeature\n\n"));
    }

    #[test]
    fn date_and_news_flags() {
        let temp_dir = create_addon();

        release_cmd()
            .current_dir(temp_dir.path())
            .args(["micro", r"- One\n- Two", "-d", "-n"])
            .assert()
            .success();

        let changelog = read(&temp_dir, "changelog.txt");
        let header = changelog.lines().next().unwrap().to_string();
        let header_pattern = predicate::str::is_match(r"^v1\.4\.10 \(\d{4}-\d{2}-\d{2}\)$").unwrap();
        assert!(header_pattern.eval(&header));

        let entry = format!("{header}\n- One\n- Two\n\n");
        assert!(changelog.starts_with(&entry));
        assert!(read(&temp_dir, "addon.xml.in").contains(&format!("<news>\n{entry}v1.4.9\n")));
    }

    #[test]
    fn missing_changelog_is_not_fatal() {
        let temp_dir = create_addon();
        fs::remove_file(temp_dir.path().join("pvr.cli.example").join("changelog.txt")).unwrap();

        release_cmd()
            .current_dir(temp_dir.path())
            .args(["micro", "Testing"])
            .assert()
            .success();

        assert!(read(&temp_dir, "addon.xml.in").contains(r#"version="1.4.10""#));
    }
}

mod failure {
    use super::*;

    #[test]
    fn missing_descriptor_exits_with_one() {
        let temp_dir = TempDir::new().unwrap();

        release_cmd()
            .current_dir(temp_dir.path())
            .args(["micro", "Testing"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("addon.xml.in not found"));
    }

    #[test]
    fn missing_version_exits_with_one() {
        let temp_dir = create_addon();
        let addon_xml = temp_dir.path().join("pvr.cli.example").join("addon.xml.in");
        fs::write(&addon_xml, "<addon id=\"x\">\n<news>\n</news>\n</addon>\n").unwrap();

        release_cmd()
            .current_dir(temp_dir.path())
            .args(["micro", "Testing"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Unable to determine the current version"));

        assert_eq!(read(&temp_dir, "changelog.txt"), CHANGELOG);
    }

    #[test]
    fn malformed_version_exits_with_one() {
        let temp_dir = create_addon();
        let addon_xml = temp_dir.path().join("pvr.cli.example").join("addon.xml.in");
        let two_part = ADDON_XML.replace(r#"version="1.4.9""#, r#"version="1.4""#);
        fs::write(&addon_xml, &two_part).unwrap();

        release_cmd()
            .current_dir(temp_dir.path())
            .args(["micro", "Testing"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Invalid version '1.4'"));

        assert_eq!(read(&temp_dir, "addon.xml.in"), two_part);
        assert_eq!(read(&temp_dir, "changelog.txt"), CHANGELOG);
    }

    #[test]
    fn unknown_version_kind_is_rejected() {
        release_cmd().args(["major", "Testing"]).assert().failure();
    }
}
