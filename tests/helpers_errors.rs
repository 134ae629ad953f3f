use std::io;
use std::path::Path;

use tray::fs_ops::io_error_with_help;
use tray::TrayError;

#[test]
fn notfound_fallback_hint_includes_path() {
    let p = Path::new("/nonexistent/path/for/test");
    let err = io_error_with_help("open", p)(io::Error::from(io::ErrorKind::NotFound));
    let msg = err.to_string();
    assert!(msg.contains("open"));
    assert!(msg.contains(p.to_string_lossy().as_ref()));
    assert!(msg.contains("path not found"));
}

#[test]
fn permission_denied_becomes_typed_error() {
    let p = Path::new("/root/secret");
    let err = io_error_with_help("move file", p)(io::Error::from(io::ErrorKind::PermissionDenied));
    match err.downcast_ref::<TrayError>() {
        Some(TrayError::PermissionDenied { path, context }) => {
            assert_eq!(path, p);
            assert!(context.contains("move file"), "context: {context}");
        }
        other => panic!("expected PermissionDenied, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn raw_eacces_is_typed_and_carries_os_code() {
    let p = Path::new("/tmp");
    let err = io_error_with_help("write", p)(io::Error::from_raw_os_error(libc::EACCES));
    let msg = err.to_string();
    assert!(matches!(err.downcast_ref::<TrayError>(), Some(TrayError::PermissionDenied { .. })));
    assert!(msg.contains("os code") || msg.contains("Permission denied"), "msg: {msg}");
}

#[cfg(unix)]
#[test]
fn enospc_and_erofs_hints_present() {
    let p = Path::new("/tmp");
    let msg = io_error_with_help("write", p)(io::Error::from_raw_os_error(libc::ENOSPC)).to_string();
    assert!(msg.contains("insufficient space"), "msg was: {msg}");
    assert!(msg.contains("os code"), "should include os code in message");

    let msg = io_error_with_help("write", p)(io::Error::from_raw_os_error(libc::EROFS)).to_string();
    assert!(msg.contains("read-only filesystem"), "msg was: {msg}");
}

#[cfg(unix)]
#[test]
fn exdev_hint_mentions_cross_filesystem() {
    let p = Path::new("/tmp");
    let msg = io_error_with_help("rename", p)(io::Error::from_raw_os_error(libc::EXDEV)).to_string();
    assert!(msg.contains("cross-filesystem"), "msg was: {msg}");
}
