//! Points fd 1 at stderr while third-party code runs.
//!
//! `pdf-extract` reports font and encoding problems with `println!`. Stdout
//! carries the single result line, so anything the parser prints is moved to
//! stderr for the lifetime of the guard.

#[cfg(unix)]
use std::io::Write;

/// Restores the original stdout when dropped.
#[cfg(unix)]
pub struct StdoutToStderr {
    saved: libc::c_int,
}

#[cfg(unix)]
impl StdoutToStderr {
    /// Returns `None` if the descriptors could not be swapped; stdout is then
    /// left untouched.
    pub fn redirect() -> Option<Self> {
        let _ = std::io::stdout().flush();
        // SAFETY: only the process's standard descriptors are duplicated, and
        // every failure path closes what it opened.
        unsafe {
            let saved = libc::dup(libc::STDOUT_FILENO);
            if saved < 0 {
                return None;
            }
            if libc::dup2(libc::STDERR_FILENO, libc::STDOUT_FILENO) < 0 {
                libc::close(saved);
                return None;
            }
            Some(Self { saved })
        }
    }
}

#[cfg(unix)]
impl Drop for StdoutToStderr {
    fn drop(&mut self) {
        let _ = std::io::stdout().flush();
        // SAFETY: `saved` is the descriptor duplicated in `redirect`.
        unsafe {
            libc::dup2(self.saved, libc::STDOUT_FILENO);
            libc::close(self.saved);
        }
    }
}

// TODO: redirect via SetStdHandle on Windows; parser chatter still reaches stdout there.
#[cfg(not(unix))]
pub struct StdoutToStderr;

#[cfg(not(unix))]
impl StdoutToStderr {
    pub fn redirect() -> Option<Self> {
        None
    }
}
