//! Public and internal types for the lsq API and traversal engine.

/// Four-mask mode predicate. A mask of zero is inactive; an entry passes
/// when every active predicate holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeFilter {
    /// All of these bits must be set.
    pub must_set: u32,
    /// None of these bits may be set.
    pub must_unset: u32,
    /// At least one of these bits must be set.
    pub any_set: u32,
    /// At least one of these bits must be unset.
    pub any_unset: u32,
}

impl ModeFilter {
    /// True when any mask is non-zero, i.e. listing needs a stat per entry
    /// even without recursion.
    pub fn is_active(&self) -> bool {
        self.must_set | self.must_unset | self.any_set | self.any_unset != 0
    }

    /// Evaluate all active predicates against `mode`.
    pub fn matches(&self, mode: u32) -> bool {
        if self.must_set != 0 && mode & self.must_set != self.must_set {
            return false;
        }
        if self.must_unset != 0 && mode & self.must_unset != 0 {
            return false;
        }
        if self.any_set != 0 && mode & self.any_set == 0 {
            return false;
        }
        if self.any_unset != 0 && mode & self.any_unset == self.any_unset {
            return false;
        }
        true
    }
}

/// Outcome of running one entry through the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classified {
    /// Entry passed every active predicate; carries the resolved mode bits.
    Pass(u32),
    /// Entry failed a predicate. Not an error; just not listed.
    Skip,
    /// lstat failed. Logged by the filter; the entry is treated as skipped.
    StatFailed,
}

/// Options for one run. Built once from the CLI (or by an embedder) and
/// shared read-only by every component.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Terminate output records with NUL instead of LF.
    pub nul_output: bool,
    /// Rewrite each record for shell re-evaluation inside `$'...'`.
    pub escape: bool,
    /// Fully buffered output: no flush after each record.
    pub buffered: bool,
    /// Include `.` and `..` in listings.
    pub parents: bool,
    /// Hide dot-files (other than the `.`/`..` handling above).
    pub no_hidden: bool,
    /// Prefix each record with the source path it was listed under.
    pub source: bool,
    /// Stop after the first root that lists successfully.
    pub one: bool,
    /// Debug probe: stat the argument itself and print its octal mode.
    pub debug: bool,
    /// Recurse into subdirectories, level by level.
    pub recurse: bool,
    /// Arguments are files of further target paths (`-` = stdin).
    pub indirect: bool,
    /// Indirection input records are NUL-delimited instead of lines.
    pub nul_input: bool,
    /// Mode predicate applied to every stated entry.
    pub filter: ModeFilter,
}
