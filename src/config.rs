//! Runtime rule toggles.
//!
//! Both toggles cover corners of the rules where two readings are
//! reasonable. The defaults are what the engine plays unless the binary is
//! started with `--short-continuation` or `--strict-squares`.

use std::fmt;

/// Rule variant switches carried by every [`crate::board::Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// After a capture, also probe long-range king jumps when deciding
    /// whether the capturing piece must continue. When off, only jumps of
    /// distance two are probed for every piece.
    pub long_range_continuation: bool,
    /// Only squares with odd `x + y` are playable targets.
    pub strict_squares: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            long_range_continuation: true,
            strict_squares: false,
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let onoff = |b: bool| if b { "on" } else { "off" };
        write!(
            f,
            "long_range_continuation={} strict_squares={}",
            onoff(self.long_range_continuation),
            onoff(self.strict_squares)
        )
    }
}
