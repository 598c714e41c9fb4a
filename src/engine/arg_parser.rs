use clap::Parser;
use std::path::PathBuf;

pub struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
    pub const STDIN: &'static str = "-";
}

/// Streaming directory lister with mode-bit filters and level-order recursion.
#[derive(Clone, Parser)]
#[command(name = "lsq", version)]
#[command(about = "List directory entries; skips . and .. by default.")]
#[command(
    after_help = "Escaped output (-e) is meant to be re-evaluated by a shell:\n  \
                  lsq -re | while read -r f; do eval f=\"\\$'$f'\"; ...; done"
)]
pub struct Cli {
    /// Directories to list (with -i: files of further target paths).
    /// Default: `.`, or `-` with -i.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Write NUL terminated records instead of LF. Not meant for use with -e.
    #[arg(short = '0', long = "print0")]
    pub nul: bool,

    /// Any given bit set in mode (see -m).
    #[arg(short = 'a', long = "any-set", value_name = "MASK", value_parser = parse_mask)]
    pub any_set: Option<u32>,

    /// Debug mode: stat the argument itself and print its octal mode in
    /// front of the name instead of listing it.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Escape records for shell re-evaluation inside $'...'.
    #[arg(short = 'e', long = "escape")]
    pub escape: bool,

    /// Fully buffered output (no flush after each record).
    #[arg(short = 'f', long = "buffered")]
    pub buffered: bool,

    /// Read targets from the given file arguments, `-` for stdin.
    #[arg(short = 'i', long = "indirect")]
    pub indirect: bool,

    /// Given bits must be unset in mode (see -m).
    #[arg(short = 'l', long = "must-unset", value_name = "MASK", value_parser = parse_mask)]
    pub must_unset: Option<u32>,

    /// Given bits must be set in mode. Prefix with 0 for octal, 0x for hex.
    /// When -a -l -m -u are used together, all must apply.
    #[arg(short = 'm', long = "must-set", value_name = "MASK", value_parser = parse_mask)]
    pub must_set: Option<u32>,

    /// No dot-files: hide entries starting with a `.`.
    #[arg(short = 'n', long = "no-hidden")]
    pub no_hidden: bool,

    /// One arg mode: list the first available directory and stop.
    /// `lsq -o a b c` lists b but not c when a is not available.
    #[arg(short = 'o', long = "one")]
    pub one: bool,

    /// List `.` and `..` as well.
    #[arg(short = 'p', long = "parents")]
    pub parents: bool,

    /// Recurse into subdirectories, level by level.
    #[arg(short = 'r', long = "recurse")]
    pub recurse: bool,

    /// Add the source path to each record.
    #[arg(short = 's', long = "source")]
    pub source: bool,

    /// Filter by file type (dir, file, ...); prefix with `-` to negate.
    /// Sets the matching bits for -m and -l. Use `?` to see the list.
    #[arg(short = 't', long = "type", value_name = "TYPE", allow_hyphen_values = true)]
    pub file_type: Option<String>,

    /// Any given bit unset in mode (see -m).
    #[arg(short = 'u', long = "any-unset", value_name = "MASK", value_parser = parse_mask)]
    pub any_unset: Option<u32>,

    /// With -i, input records are NUL terminated instead of lines.
    #[arg(short = 'z', long = "read0")]
    pub read0: bool,

    /// Verbose output.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Roots to process: the positional arguments, or the mode-dependent
    /// default when none were given.
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            let fallback = if self.indirect {
                DefaultArgs::STDIN
            } else {
                DefaultArgs::DIR
            };
            vec![PathBuf::from(fallback)]
        } else {
            self.paths.clone()
        }
    }
}

/// Parse a mode mask: `0`-prefixed octal, `0x`-prefixed hex, else decimal.
pub fn parse_mask(s: &str) -> Result<u32, String> {
    let t = s.trim();
    let (digits, radix) = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        (hex, 16)
    } else if t.len() > 1 && t.starts_with('0') {
        (&t[1..], 8)
    } else {
        (t, 10)
    };
    u32::from_str_radix(digits, radix).map_err(|err| format!("invalid mode mask '{s}': {err}"))
}
