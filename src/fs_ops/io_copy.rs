//! Streaming copy used by the cross-volume fallback.
//!
//! - Writes to a newly created destination file (O_EXCL semantics; never clobbers).
//! - On Unix the destination is created with the source's mode bits, so the
//!   copied bytes are never readable under a looser mode.
//! - Buffered I/O with 1 MiB buffers.
//! - The destination is flushed and `sync_all`ed before returning, so the caller
//!   may delete the source as soon as the final rename succeeds.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst`, then fsync `dst`. Returns the number of bytes written.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        opts.mode(src_f.metadata()?.permissions().mode() & 0o777);
    }
    let dst_f = opts.open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(bytes)
}
