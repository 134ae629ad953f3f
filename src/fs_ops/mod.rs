//! Filesystem operations: the single-file mover and its building blocks.

mod atomic;
mod copy;
mod file_move;
mod helpers;
mod io_copy;
mod util;

pub use copy::safe_copy_and_rename;
pub use file_move::Mover;
pub use helpers::io_error_with_help;
pub use util::{is_temp_name, TEMP_PREFIX};
