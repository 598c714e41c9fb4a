//! Level-order traversal: directory listing plus the subdirectory worklist

use anyhow::Result;
use log::warn;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::engine::filter::EntryFilter;
use crate::output::Emitter;
use crate::{Classified, Opts};

/// FIFO worklist of subdirectories discovered while listing. Drained once
/// per root, after the directory that produced an entry has been fully
/// listed; that drain order is what makes the traversal level-order.
///
/// Paths are not deduplicated: a directory reachable under two names is
/// queued and listed once per name.
#[derive(Default)]
pub struct SubdirQueue {
    items: VecDeque<PathBuf>,
}

impl SubdirQueue {
    pub fn push(&mut self, path: PathBuf) {
        self.items.push_back(path);
    }

    pub fn pop(&mut self) -> Option<PathBuf> {
        self.items.pop_front()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One traversal run: a root directory, its filter state, and its worklist.
/// Built fresh per top-level argument.
pub struct Traversal<'a, W: Write> {
    opts: &'a Opts,
    filter: EntryFilter,
    queue: SubdirQueue,
    sink: &'a mut Emitter<W>,
    want_stats: bool,
}

impl<'a, W: Write> Traversal<'a, W> {
    pub fn new(opts: &'a Opts, sink: &'a mut Emitter<W>) -> Self {
        let want_stats = opts.filter.is_active();
        Self {
            opts,
            filter: EntryFilter::new(opts.filter, opts.recurse),
            queue: SubdirQueue::default(),
            sink,
            want_stats,
        }
    }

    /// List `dir` itself, then drain the worklist, listing each queued
    /// subdirectory in discovery order (each listing may queue more).
    ///
    /// Returns `true` iff the root step succeeded: the directory was found,
    /// even if some of its descendants errored.
    pub fn start(&mut self, dir: &Path) -> Result<bool> {
        if !self.step(dir, None)? {
            return Ok(false);
        }
        while let Some(sub) = self.queue.pop() {
            self.step(dir, Some(&sub))?;
        }
        Ok(true)
    }

    /// Debug probe: stat and filter `root` itself. On a pass, emit it with
    /// its octal mode, then descend from it when recursion is on. Descent
    /// errors do not affect the outcome; the probe succeeded.
    pub fn probe_root(&mut self, root: &Path) -> Result<bool> {
        self.queue.clear();
        match self.filter.probe(root) {
            Classified::StatFailed | Classified::Skip => Ok(false),
            Classified::Pass(mode) => {
                self.sink.emit(Some(mode), root.as_os_str())?;
                if self.opts.recurse {
                    self.start(root)?;
                }
                Ok(true)
            }
        }
    }

    /// One unit of work: join `dir` and `sub`, list the result.
    fn step(&mut self, dir: &Path, sub: Option<&Path>) -> Result<bool> {
        let both = match sub {
            Some(s) => dir.join(s),
            None => dir.to_path_buf(),
        };
        self.list_one(dir, sub, &both)
    }

    /// Enumerate one directory in its native iteration order. Entry stat
    /// failures and filter rejections suppress output of that entry only;
    /// open and mid-stream read failures fail the whole listing (already
    /// emitted records stand). Returns `true` iff fully enumerated.
    fn list_one(&mut self, dir: &Path, sub: Option<&Path>, both: &Path) -> Result<bool> {
        let entries = match fs::read_dir(both) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("{}: cannot open: {err}", both.display());
                return Ok(false);
            }
        };

        // read_dir never yields . and .., so synthesize them up front when
        // they are wanted; they take the same filter/emit path as the rest.
        let leading: Vec<OsString> = if self.opts.parents {
            vec![OsString::from("."), OsString::from("..")]
        } else {
            Vec::new()
        };

        let names = entries.map(|item| item.map(|entry| entry.file_name()));
        for item in leading.into_iter().map(Ok).chain(names) {
            let name = match item {
                Ok(name) => name,
                Err(err) => {
                    warn!("{}: read error: {err}", both.display());
                    return Ok(false);
                }
            };

            let bytes = name.as_bytes();
            if bytes.first() == Some(&b'.') {
                if bytes == b"." || bytes == b".." {
                    if !self.opts.parents {
                        continue;
                    }
                } else if self.opts.no_hidden {
                    continue;
                }
            }

            let mut mode_prefix = None;
            if self.opts.recurse || self.want_stats {
                match self.filter.classify(dir, sub, &name, &mut self.queue) {
                    Classified::StatFailed | Classified::Skip => continue,
                    Classified::Pass(mode) => {
                        if self.opts.debug {
                            mode_prefix = Some(mode);
                        }
                    }
                }
            }

            let rel = match (self.opts.source, sub) {
                (true, _) => Some(both.join(&name)),
                (false, Some(s)) => Some(s.join(&name)),
                (false, None) => None,
            };
            match rel {
                Some(path) => self.sink.emit(mode_prefix, path.as_os_str())?,
                None => self.sink.emit(mode_prefix, &name)?,
            }
        }
        Ok(true)
    }
}
