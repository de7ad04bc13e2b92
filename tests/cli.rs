use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_pack_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup: a working directory laid out like the add-on repo
    let workdir = tempdir()?;
    let source_dir = workdir.path().join("src");
    fs::create_dir_all(source_dir.join("scripts"))?;
    fs::write(source_dir.join("manifest.json"), r#"{"header": {"version": [1, 4, 0], "min_engine_version": [1, 21, 0]}}"#)?;
    fs::write(source_dir.join("scripts/index.js"), "console.log('hi');\n")?;
    fs::write(workdir.path().join("LICENSE"), "MIT")?;

    // 2. Run the packager from that directory
    let mut cmd = Command::cargo_bin("mcpacker")?;
    cmd.current_dir(workdir.path());
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("Packaging .mcpack add-on...")
                .and(predicate::str::contains("Pack done! At: debug-stick.mcpack")),
        );

    // 3. Verify the produced archive
    let archive_path = workdir.path().join("debug-stick.mcpack");
    assert!(archive_path.exists());

    let mut archive = zip::ZipArchive::new(fs::File::open(&archive_path)?)?;
    assert_eq!(archive.len(), 3);
    let mut license = String::new();
    archive.by_name("LICENSE")?.read_to_string(&mut license)?;
    assert_eq!(license, "MIT");
    drop(archive);

    // 4. Manifest-driven distribution copies land next to the archive
    let original = fs::read(&archive_path)?;
    for name in ["debug-stick-1.4.0.mcpack", "debug-stick-1.4.0-r1.21.0.mcpack"] {
        assert_eq!(fs::read(workdir.path().join(name))?, original);
    }

    Ok(())
}

#[test]
fn test_cli_fails_without_source_dir() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempdir()?;
    fs::write(workdir.path().join("LICENSE"), "MIT")?;

    let mut cmd = Command::cargo_bin("mcpacker")?;
    cmd.current_dir(workdir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!workdir.path().join("debug-stick.mcpack").exists());
    Ok(())
}
