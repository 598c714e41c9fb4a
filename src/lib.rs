//! lsq: streaming directory lister with mode-bit filtering and level-order recursion.

pub mod engine;
pub mod output;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::io::Write;
use std::path::PathBuf;

/// Result alias used by the public lsq API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: list each of `roots` with `opts`, writing records to `out`.
///
/// Returns `true` when at least one root was listed (or probed) successfully.
/// With [`Opts::one`] set, processing stops at the first successful root and
/// the remaining roots are never touched. Per-entry and per-directory
/// failures are logged and skipped; only an output I/O error is returned.
///
/// The CLI passes locked stdout here; tests and embedders pass any
/// [`Write`] (e.g. `&mut Vec<u8>`) to capture records without a child
/// process.
pub fn list_dirs<W: Write>(roots: &[PathBuf], opts: &Opts, out: W) -> Result<bool> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    let mut sink = output::Emitter::new(out, opts);
    let hit = engine::root::process_roots(roots, opts, &mut sink)?;
    sink.flush()?;
    Ok(hit)
}
