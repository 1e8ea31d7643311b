use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
    <rect x="8" y="8" width="48" height="48" rx="8" fill="#3366cc"/>
</svg>"##;

/// A run of the binary inside its own working and temp directories.
struct Svg2Icns {
    cmd: Command,
    work: TempDir,
    tmp: TempDir,
}

impl Svg2Icns {
    fn new() -> Self {
        let work = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();

        let mut cmd = Command::cargo_bin("svg2icns").unwrap();
        cmd.current_dir(work.path())
            .env("TMPDIR", tmp.path())
            .env("TMP", tmp.path())
            .env("TEMP", tmp.path())
            .env_remove("SVG2ICNS_ICONUTIL")
            .env_remove("RUST_LOG");

        Svg2Icns { cmd, work, tmp }
    }

    fn with_input(mut self, name: &str, contents: &str) -> Self {
        fs::write(self.work.path().join(name), contents).unwrap();
        self.cmd.arg(name);
        self
    }

    fn with_packager(mut self, program: impl AsRef<Path>) -> Self {
        self.cmd.env("SVG2ICNS_ICONUTIL", program.as_ref());
        self
    }

    /// Install a shell script as the packager.
    #[cfg(unix)]
    fn with_packager_script(self, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = self.tmp.path().join("fake-iconutil");
        fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        self.with_packager(script)
    }

    fn staging_root(&self) -> PathBuf {
        self.tmp.path().join("svg2icns")
    }

    /// The `.iconset` directories left behind under the staging root.
    fn retained_iconsets(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.staging_root()) else {
            return Vec::new();
        };
        entries.map(|entry| entry.unwrap().path().join("out.iconset")).collect()
    }

    fn bundles(&self) -> Vec<PathBuf> {
        fs::read_dir(self.work.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "icns"))
            .collect()
    }
}

#[test]
fn missing_argument_shows_help() {
    let mut run = Svg2Icns::new();
    run.cmd
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains("<SVG>")));

    assert!(!run.staging_root().exists());
}

#[test]
fn extra_argument_is_an_error() {
    let mut run = Svg2Icns::new().with_input("a.svg", LOGO);
    run.cmd.arg("b.svg").assert().code(1);

    assert!(!run.staging_root().exists());
    assert!(run.bundles().is_empty());
}

#[test]
fn help_and_version_succeed() {
    Svg2Icns::new()
        .cmd
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creates an icns file from an svg image"));

    Svg2Icns::new()
        .cmd
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("svg2icns "));
}

#[test]
fn nonexistent_input_keeps_staging() {
    let mut run = Svg2Icns::new();
    run.cmd
        .arg("missing.svg")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to load missing.svg"))
        .stderr(predicate::str::contains("Temporary dir not removed: "));

    assert!(run.bundles().is_empty());
    let iconsets = run.retained_iconsets();
    assert_eq!(iconsets.len(), 1);
    assert!(iconsets[0].is_dir());
}

#[test]
fn malformed_input_keeps_staging() {
    let mut run = Svg2Icns::new().with_input("broken.svg", "this is not an svg");
    let output = run.cmd.assert().code(1).get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();

    assert!(stderr.contains("Unable to load broken.svg"));
    assert!(run.bundles().is_empty());

    let iconsets = run.retained_iconsets();
    assert_eq!(iconsets.len(), 1);
    let staging = iconsets[0].parent().unwrap();
    assert!(stderr.contains(&staging.display().to_string()));
}

#[test]
fn unavailable_packager_keeps_rendered_iconset() {
    let mut run = Svg2Icns::new()
        .with_input("logo.svg", LOGO)
        .with_packager("svg2icns-no-such-packager");
    run.cmd
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to launch svg2icns-no-such-packager"))
        .stderr(predicate::str::contains("Temporary dir not removed: "));

    assert!(run.bundles().is_empty());

    let iconsets = run.retained_iconsets();
    assert_eq!(iconsets.len(), 1);
    let iconset = &iconsets[0];
    assert_eq!(fs::read_dir(iconset).unwrap().count(), svg2icns::file_count());

    for target in &svg2icns::ICONSET {
        let files: Vec<Vec<u8>> = target
            .file_names()
            .map(|name| fs::read(iconset.join(name)).unwrap())
            .collect();

        let bitmap = image::load_from_memory(&files[0]).unwrap().to_rgba8();
        assert_eq!(bitmap.dimensions(), (target.edge, target.edge));
        assert_eq!(bitmap.get_pixel(0, 0).0[3], 0);
        assert_eq!(bitmap.get_pixel(target.edge / 2, target.edge / 2).0[3], 255);

        if let [primary, secondary] = files.as_slice() {
            assert_eq!(primary, secondary, "{}", target.edge);
        }
    }
}

#[cfg(unix)]
#[test]
fn successful_run_writes_bundle_and_cleans_up() {
    let mut run = Svg2Icns::new().with_input("app.icon.svg", LOGO).with_packager_script(
        r#"[ "$1" = "-c" ] && [ "$2" = "icns" ] && [ "$3" = "-o" ] || exit 64
ls "$5" | grep -c '\.png$' > "$4""#,
    );
    run.cmd.assert().success();

    let bundles = run.bundles();
    assert_eq!(bundles, [run.work.path().join("app.icns")]);
    assert_eq!(fs::read_to_string(&bundles[0]).unwrap().trim(), "10");

    assert!(run.staging_root().is_dir());
    assert!(run.retained_iconsets().is_empty());
}

#[cfg(unix)]
#[test]
fn packager_failure_reports_exit_code() {
    let mut run = Svg2Icns::new()
        .with_input("logo.svg", LOGO)
        .with_packager_script("exit 3");
    run.cmd
        .assert()
        .code(1)
        .stderr(predicate::str::contains("returned 3"));

    assert_eq!(run.retained_iconsets().len(), 1);
}

#[cfg(unix)]
#[test]
fn packager_crash_is_reported() {
    let mut run = Svg2Icns::new()
        .with_input("logo.svg", LOGO)
        .with_packager_script("kill -KILL $$");
    run.cmd
        .assert()
        .code(1)
        .stderr(predicate::str::contains("crashed!"));

    assert_eq!(run.retained_iconsets().len(), 1);
}
