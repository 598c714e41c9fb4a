//! Output sink: record framing, shell escaping, flush policy

use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use crate::Opts;

/// Writes one record per emitted path: optional octal mode prefix, the
/// (optionally escaped) name bytes, then NUL or LF. Flushes after every
/// record unless fully-buffered mode is set; callers flush once more at the
/// end of each root.
pub struct Emitter<W: Write> {
    out: W,
    nul: bool,
    escape: bool,
    flush_each: bool,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, opts: &Opts) -> Self {
        Self {
            out,
            nul: opts.nul_output,
            escape: opts.escape,
            flush_each: !opts.buffered,
        }
    }

    /// Emit one record. `mode` is the debug-mode octal prefix; it is written
    /// verbatim (digits and a space need no escaping).
    pub fn emit(&mut self, mode: Option<u32>, name: &OsStr) -> io::Result<()> {
        if let Some(mode) = mode {
            write!(self.out, "{mode:o} ")?;
        }
        if self.escape {
            self.out.write_all(&ansi_escape(name.as_bytes()))?;
        } else {
            self.out.write_all(name.as_bytes())?;
        }
        self.out.write_all(if self.nul { b"\0" } else { b"\n" })?;
        if self.flush_each {
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Rewrite raw name bytes for shell re-evaluation inside `$'...'`:
/// backslash, quote, and the common control characters get named escapes;
/// other non-printable bytes become 3-digit octal (fixed width, so a
/// following literal digit cannot extend the escape).
pub fn ansi_escape(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &b in raw {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'\'' => out.extend_from_slice(b"\\'"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b'\r' => out.extend_from_slice(b"\\r"),
            0x20..=0x7e => out.push(b),
            _ => {
                let _ = write!(out, "\\{b:03o}");
            }
        }
    }
    out
}
