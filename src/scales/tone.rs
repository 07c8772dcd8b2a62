//! A single pitch with fuzzy comparison

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, SemitoneError};

/// A note having a distinct frequency in Hz
///
/// Comparisons are fuzzy: two tones are equal when their frequencies differ
/// by less than this tone's tolerance, `freq * DELTA_CENTS / 1200`. Only the
/// left-hand tone's tolerance is used, so `a == b` and `b == a` can disagree
/// for tones sitting right at the edge of the band.
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    freq: f64,
    delta: f64,
}

impl Tone {
    /// Allowable frequency difference, in cents, for two tones to compare equal
    pub const DELTA_CENTS: f64 = 0.1;

    /// Create a tone from a frequency in Hz
    ///
    /// The frequency is expected to be finite and positive; use
    /// [`Tone::try_new`] for untrusted input.
    pub fn new(freq: f64) -> Self {
        debug_assert!(freq > 0.0, "tone frequency must be positive, got {}", freq);
        Self {
            freq,
            delta: freq * Self::DELTA_CENTS / 1200.0,
        }
    }

    /// Create a tone, rejecting non-positive or non-finite frequencies
    pub fn try_new(freq: f64) -> Result<Self> {
        if !freq.is_finite() || freq <= 0.0 {
            return Err(SemitoneError::InvalidFrequency(freq));
        }
        Ok(Self::new(freq))
    }

    /// Frequency in Hz
    pub fn freq(&self) -> f64 {
        self.freq
    }

    /// Comparison tolerance in Hz
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// True if this tone sits at least one tolerance band below `other`
    ///
    /// Unlike `<=`, a tone is never at or below itself under this rule.
    pub fn at_or_below_band(&self, other: &Tone) -> bool {
        self.freq <= other.freq - self.delta
    }

    /// True if this tone sits at least one tolerance band above `other`
    pub fn at_or_above_band(&self, other: &Tone) -> bool {
        self.freq >= other.freq + self.delta
    }

    /// True if the two tones are any whole number of octaves apart
    ///
    /// ```
    /// use semitone::Tone;
    /// assert!(Tone::new(110.0).same_pitch_class(&Tone::new(880.0)));
    /// assert!(!Tone::new(110.0).same_pitch_class(&Tone::new(660.0)));
    /// ```
    pub fn same_pitch_class(&self, other: &Tone) -> bool {
        let (low, high) = if self.freq > other.freq {
            (other.freq, self.freq)
        } else {
            (self.freq, other.freq)
        };
        let low = Tone::new(low);
        let mut high = Tone::new(high);
        while high > low {
            high = Tone::new(high.freq / 2.0);
        }
        low == high
    }

    /// Tone `octaves` octaves away (negative steps down)
    pub fn transpose_octaves(&self, octaves: i32) -> Tone {
        Tone::new(self.freq * 2f64.powi(octaves))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.freq)
    }
}

impl PartialEq for Tone {
    fn eq(&self, other: &Self) -> bool {
        (self.freq - other.freq).abs() < self.delta
    }
}

impl PartialOrd for Tone {
    /// `None` only when the two frequencies sit exactly on the edge of the
    /// tolerance band, where neither equality nor strict ordering holds.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.freq < other.freq - self.delta
    }

    fn gt(&self, other: &Self) -> bool {
        self.freq > other.freq + self.delta
    }
}
