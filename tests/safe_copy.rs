//! The copy fallback only runs for cross-device moves, which a test machine
//! can't reliably provide, so it is exercised directly here.

use std::fs;
use tempfile::tempdir;
use tray::fs_ops::{safe_copy_and_rename, TEMP_PREFIX};

fn temp_leftovers(dir: &std::path::Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with(TEMP_PREFIX))
        .count()
}

#[test]
fn copy_replaces_existing_destination_whole() {
    let td = tempdir().unwrap();
    let src = td.path().join("src.bin");
    let tray = td.path().join("tray");
    fs::create_dir_all(&tray).unwrap();
    let dest = tray.join("src.bin");
    fs::write(&dest, b"stale contents that are longer").unwrap();

    let payload: Vec<u8> = (0..300_000u32).map(|i| (i % 199) as u8).collect();
    fs::write(&src, &payload).unwrap();

    safe_copy_and_rename(&src, &dest).expect("copy fallback should succeed");
    assert_eq!(fs::read(&dest).unwrap(), payload);
    assert_eq!(temp_leftovers(&tray), 0);
}

#[test]
fn copy_onto_directory_fails_cleanly() {
    let td = tempdir().unwrap();
    let src = td.path().join("a.txt");
    fs::write(&src, b"a").unwrap();
    let dest = td.path().join("occupied");
    fs::create_dir_all(dest.join("inner")).unwrap();

    assert!(safe_copy_and_rename(&src, &dest).is_err());
    assert!(dest.join("inner").is_dir());
    assert_eq!(temp_leftovers(td.path()), 0);
    assert_eq!(fs::read(&src).unwrap(), b"a");
}

#[cfg(unix)]
#[test]
fn copy_keeps_source_mode() {
    use std::os::unix::fs::PermissionsExt;
    let td = tempdir().unwrap();
    let tray = td.path().join("tray");

    for (name, mode) in [("secret.env", 0o600), ("run.sh", 0o755)] {
        let src = td.path().join(name);
        fs::write(&src, name).unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(mode)).unwrap();

        let dest = tray.join(name);
        safe_copy_and_rename(&src, &dest).unwrap();
        let got = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(got, mode, "{name}: mode {got:o}, expected {mode:o}");
    }
    assert_eq!(temp_leftovers(&tray), 0);
}
