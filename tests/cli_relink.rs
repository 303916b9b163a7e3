use assert_cmd::cargo;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_cfg(path: &Path, root: &Path) {
    let xml = format!(
        "<config>\n  <search_root>{}</search_root>\n  <log_level>quiet</log_level>\n</config>\n",
        root.display()
    );
    fs::write(path, xml).unwrap();
}

fn write_library(path: &Path, stale: &Path) {
    let xml = format!(
        "<library>\n  <entry key=\"e1\">\n    <file>{}</file>\n  </entry>\n</library>\n",
        stale.display()
    );
    fs::write(path, xml).unwrap();
}

#[test]
fn relinks_moved_file_and_rewrites_library() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let files = base.join("files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("a.pdf"), b"pdf").unwrap();

    let cfg_path = base.join("config.xml");
    write_cfg(&cfg_path, &files);
    let lib = base.join("library.xml");
    write_library(&lib, &base.join("gone/a.pdf"));

    let me = cargo::cargo_bin!("bib_relink");
    let out = Command::new(me)
        .env("BIB_RELINK_CONFIG", &cfg_path)
        .arg(&lib)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Changed 1 entry"), "stdout was: {stdout}");

    let rewritten = fs::read_to_string(&lib).unwrap();
    let expected: PathBuf = files.join("a.pdf");
    assert!(
        rewritten.contains(&expected.display().to_string()),
        "library should reference the relocated file, got:\n{rewritten}"
    );
}

#[test]
fn dry_run_reports_but_does_not_write() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let files = base.join("files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("a.pdf"), b"pdf").unwrap();

    let cfg_path = base.join("config.xml");
    write_cfg(&cfg_path, &files);
    let lib = base.join("library.xml");
    write_library(&lib, &base.join("gone/a.pdf"));
    let before = fs::read_to_string(&lib).unwrap();

    let me = cargo::cargo_bin!("bib_relink");
    let out = Command::new(me)
        .env("BIB_RELINK_CONFIG", &cfg_path)
        .arg(&lib)
        .arg("--dry-run")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Dry-run"), "stdout was: {stdout}");
    assert_eq!(fs::read_to_string(&lib).unwrap(), before, "library must be untouched");
}

#[test]
fn reports_no_files_found_when_nothing_matches() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let files = base.join("files");
    fs::create_dir_all(&files).unwrap();

    let cfg_path = base.join("config.xml");
    write_cfg(&cfg_path, &files);
    let lib = base.join("library.xml");
    write_library(&lib, &base.join("gone/a.pdf"));
    let before = fs::read_to_string(&lib).unwrap();

    let me = cargo::cargo_bin!("bib_relink");
    let out = Command::new(me)
        .env("BIB_RELINK_CONFIG", &cfg_path)
        .arg(&lib)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No files found"), "stdout was: {stdout}");
    assert_eq!(fs::read_to_string(&lib).unwrap(), before);
}

#[test]
fn print_config_shows_explicit_path() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg_path = base.join("config.xml");
    write_cfg(&cfg_path, &base);

    let me = cargo::cargo_bin!("bib_relink");
    let out = Command::new(me)
        .env("BIB_RELINK_CONFIG", &cfg_path)
        .arg("--print-config")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("BIB_RELINK_CONFIG"), "stdout was: {stdout}");
}

#[test]
fn extra_root_flag_works_without_config_roots() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let files = base.join("files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("a.pdf"), b"pdf").unwrap();

    // Config exists (so no template is created) but declares no roots.
    let cfg_path = base.join("config.xml");
    fs::write(&cfg_path, "<config>\n  <log_level>quiet</log_level>\n</config>\n").unwrap();

    let lib = base.join("library.xml");
    write_library(&lib, &base.join("gone/a.pdf"));

    let me = cargo::cargo_bin!("bib_relink");
    let out = Command::new(me)
        .env("BIB_RELINK_CONFIG", &cfg_path)
        .arg(&lib)
        .arg("--root")
        .arg(&files)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Changed 1 entry"), "stdout was: {stdout}");
}
