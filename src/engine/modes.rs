//! Symbolic file types and mode-bit helpers

use anyhow::{Result, bail};

use crate::ModeFilter;

/// File-type bit mask within a mode word.
pub const TYPE_MASK: u32 = libc::S_IFMT as u32;

/// Recognized type tokens and their mode bit patterns.
pub const TYPE_TABLE: [(u32, &str); 7] = [
    (libc::S_IFSOCK as u32, "sock"),
    (libc::S_IFLNK as u32, "soft"),
    (libc::S_IFREG as u32, "file"),
    (libc::S_IFBLK as u32, "blk"),
    (libc::S_IFDIR as u32, "dir"),
    (libc::S_IFCHR as u32, "chr"),
    (libc::S_IFIFO as u32, "fifo"),
];

/// True when `mode` carries the directory type bits.
pub const fn is_dir_mode(mode: u32) -> bool {
    mode & TYPE_MASK == libc::S_IFDIR as u32
}

/// Fold a type token into `filter`. A plain token requires exactly that
/// type; a `-`-prefixed token requires anything but that type.
///
/// An unrecognized token is the one fatal configuration error: the token
/// `?` (or `-?`) additionally prints the table of valid tokens to stderr.
pub fn apply_type(filter: &mut ModeFilter, token: &str) -> Result<()> {
    let (negate, name) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if let Some((bits, _)) = TYPE_TABLE.iter().find(|(_, t)| *t == name) {
        if negate {
            filter.any_unset |= bits;
            filter.any_set |= bits ^ TYPE_MASK;
        } else {
            filter.must_set |= bits;
            filter.must_unset |= bits ^ TYPE_MASK;
        }
        return Ok(());
    }
    if name == "?" {
        eprintln!("Possible types:");
        for (bits, t) in TYPE_TABLE {
            eprintln!("{t:<5} ({bits:07o})");
        }
    }
    bail!("unknown type: '{token}' (use type '?' to see a list)");
}
