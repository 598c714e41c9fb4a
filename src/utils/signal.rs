//! Process signal disposition.

/// Reset SIGPIPE to its default disposition, so piping into a truncating
/// consumer (e.g. `head`) terminates the process instead of surfacing
/// broken-pipe write errors.
#[cfg(unix)]
pub fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
pub fn reset_sigpipe() {}
