//! Error types for tone and scale construction

use thiserror::Error;

/// Errors raised while building tones, scales and plots
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemitoneError {
    /// The name matches no slot of the enharmonic spelling table
    #[error("'{0}' is not an equal-tempered note name")]
    InvalidNoteName(String),

    /// Diatonic modes are numbered 1 (Ionian) through 7 (Locrian)
    #[error("mode must be an integer 1-7 inclusive, got {0}")]
    InvalidModeNumber(u8),

    /// A tone sequence cannot be cut into whole octaves of the given length
    #[error("cannot split {len} tones into octaves of {octave_len} tones")]
    IncompatibleOctaveSplit { len: usize, octave_len: usize },

    /// Frequencies must be finite and strictly positive
    #[error("frequency must be finite and positive, got {0}")]
    InvalidFrequency(f64),

    /// A scale needs at least one tone
    #[error("a scale needs at least one frequency")]
    EmptyScale,

    /// Harmonic scales need at least the fundamental
    #[error("max multiplier must be at least 1, got {0}")]
    InvalidMaxMultiplier(u32),

    /// Plot parameters such as separation must be finite and positive
    #[error("{name} must be finite and positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SemitoneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SemitoneError::InvalidNoteName("H".to_string());
        assert_eq!(err.to_string(), "'H' is not an equal-tempered note name");

        let err = SemitoneError::IncompatibleOctaveSplit { len: 10, octave_len: 7 };
        assert_eq!(err.to_string(), "cannot split 10 tones into octaves of 7 tones");
    }
}
