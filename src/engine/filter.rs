//! Entry filtering: one-entry stat memo plus the four-mask predicate

use log::warn;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use crate::engine::modes::is_dir_mode;
use crate::engine::traverse::SubdirQueue;
use crate::{Classified, ModeFilter};

/// Memo of the single most recently stated path. Filtering and debug
/// printing touch the same entry back to back; this turns that into one
/// syscall without building a per-directory stat table.
#[derive(Default)]
pub struct ModeCache {
    last: Option<(PathBuf, u32)>,
}

impl ModeCache {
    /// Mode bits of `path`, from the memo on an exact path match, else via
    /// `symlink_metadata` (never follows links). A failed stat leaves the
    /// memo untouched.
    pub fn resolve(&mut self, path: &Path) -> io::Result<u32> {
        if let Some((last, mode)) = &self.last
            && last == path
        {
            return Ok(*mode);
        }
        let meta = fs::symlink_metadata(path)?;
        let mode = meta.mode();
        self.last = Some((path.to_path_buf(), mode));
        Ok(mode)
    }
}

/// Decides whether an entry is listed and whether it is queued for
/// recursion. Owns the [`ModeCache`]; one filter lives per traversal run.
pub struct EntryFilter {
    filter: ModeFilter,
    recurse: bool,
    cache: ModeCache,
}

impl EntryFilter {
    pub fn new(filter: ModeFilter, recurse: bool) -> Self {
        Self {
            filter,
            recurse,
            cache: ModeCache::default(),
        }
    }

    /// Classify one directory entry. The candidate path is `sub` + `name`,
    /// stated under `dir`. When recursing, a directory candidate is pushed
    /// onto `queue` before the predicate runs, so a directory the filter
    /// excludes from output is still descended into. `.` and `..` are never
    /// queued.
    pub fn classify(
        &mut self,
        dir: &Path,
        sub: Option<&Path>,
        name: &OsStr,
        queue: &mut SubdirQueue,
    ) -> Classified {
        let candidate = match sub {
            Some(s) => s.join(name),
            None => PathBuf::from(name),
        };
        let full = dir.join(&candidate);
        let mode = match self.cache.resolve(&full) {
            Ok(mode) => mode,
            Err(err) => {
                warn!("{}: cannot stat: {err}", full.display());
                return Classified::StatFailed;
            }
        };
        if self.recurse && is_dir_mode(mode) && name != "." && name != ".." {
            queue.push(candidate);
        }
        if !self.filter.matches(mode) {
            return Classified::Skip;
        }
        Classified::Pass(mode)
    }

    /// Classify a path itself, without building a candidate or touching the
    /// queue. Used by the debug probe on root arguments.
    pub fn probe(&mut self, path: &Path) -> Classified {
        let mode = match self.cache.resolve(path) {
            Ok(mode) => mode,
            Err(err) => {
                warn!("{}: cannot stat: {err}", path.display());
                return Classified::StatFailed;
            }
        };
        if !self.filter.matches(mode) {
            return Classified::Skip;
        }
        Classified::Pass(mode)
    }
}
