/// Errors the typed parsing and reduction functions can return.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpectrumError {
    /// A non-empty line could not be parsed as a 32-bit float. Lines are counted from 1.
    Parse {
        /// Line number of the first offending line.
        line: usize,
    },
    /// An interleaved complex buffer had an odd number of values.
    OddInterleavedLength(usize),
}

impl core::fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parse { line } => write!(f, "Line {line} is not a valid number"),
            Self::OddInterleavedLength(len) => write!(
                f,
                "Interleaved complex buffer must have an even length, got {len}"
            ),
        }
    }
}

impl core::fmt::Debug for SpectrumError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

#[cfg(not(feature = "no_std"))]
impl std::error::Error for SpectrumError {}
