//! Per-argument control flow: direct listing, debug probe, or indirection

use anyhow::Result;
use log::warn;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::ffi::OsStringExt;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::engine::arg_parser::DefaultArgs;
use crate::engine::traverse::Traversal;
use crate::output::Emitter;

/// Process every root argument in order, flushing after each. With
/// [`Opts::one`], stop at the first root that reports success; the stop is
/// propagated here rather than exiting mid-traversal, so the sink flushes
/// and open handles drop first.
///
/// Returns `true` when any root succeeded.
pub fn process_roots<W: Write>(
    roots: &[PathBuf],
    opts: &Opts,
    sink: &mut Emitter<W>,
) -> Result<bool> {
    let mut any = false;
    for root in roots {
        let hit = process_root(root, opts, sink, opts.indirect)?;
        any |= hit;
        sink.flush()?;
        if opts.one && hit {
            break;
        }
    }
    Ok(any)
}

/// One top-level argument: indirection when enabled (and still allowed),
/// else a debug probe, else a direct listing. Each root gets a fresh
/// traversal, so the worklist and stat memo never leak across arguments.
fn process_root<W: Write>(
    root: &Path,
    opts: &Opts,
    sink: &mut Emitter<W>,
    allow_indirect: bool,
) -> Result<bool> {
    if allow_indirect && opts.indirect {
        return indirect_targets(root, opts, sink);
    }
    let mut traversal = Traversal::new(opts, sink);
    if opts.debug {
        traversal.probe_root(root)
    } else {
        traversal.start(root)
    }
}

/// Indirection: `target` names a file of further target paths (`-` for
/// stdin), one per line or NUL-delimited per [`Opts::nul_input`]. Each
/// record is re-submitted as a fresh root with indirection disabled, so
/// only one level is ever honored; debug and recursion apply unchanged.
fn indirect_targets<W: Write>(
    target: &Path,
    opts: &Opts,
    sink: &mut Emitter<W>,
) -> Result<bool> {
    let mut reader: Box<dyn BufRead> = if target.as_os_str() == DefaultArgs::STDIN {
        Box::new(io::stdin().lock())
    } else {
        match File::open(target) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                warn!("{}: cannot open target list: {err}", target.display());
                return Ok(false);
            }
        }
    };

    let delim = if opts.nul_input { b'\0' } else { b'\n' };
    let mut any = false;
    let mut record = Vec::new();
    loop {
        record.clear();
        let n = match reader.read_until(delim, &mut record) {
            Ok(n) => n,
            Err(err) => {
                warn!("{}: read error: {err}", target.display());
                break;
            }
        };
        if n == 0 {
            break;
        }
        if record.last() == Some(&delim) {
            record.pop();
        }
        if record.is_empty() {
            continue;
        }
        let sub = PathBuf::from(OsString::from_vec(record.clone()));
        let hit = process_root(&sub, opts, sink, false)?;
        any |= hit;
        if opts.one && hit {
            break;
        }
    }
    Ok(any)
}
