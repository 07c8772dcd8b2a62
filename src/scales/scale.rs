//! Scale: an ordered run of tones anchored to a principal tone

use std::fmt;

use log::debug;

use super::equal_tempered::{
    frequency_from_name, ith_freq_from_primary, mode_abbreviation, mode_steps,
    note_names_including_enharmonics, MAJOR_STEPS, MINOR_STEPS, SEMITONES_PER_OCTAVE,
};
use super::extender;
use super::just_tempered::{
    frequency_from_fraction_of_primary, harmonic_ratios, unique_reduced_ratios, FreqRatio,
};
use super::tone::Tone;
use crate::error::{Result, SemitoneError};

/// The kinds of scale this crate can build
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleKind {
    /// All 12 equal-tempered semitones
    Chromatic,
    /// Equal-tempered major scale
    Major,
    /// Equal-tempered natural minor scale
    Minor,
    /// Equal-tempered diatonic mode, 1 = Ionian through 7 = Locrian
    DiatonicMode(u8),
    /// Just-tempered harmonics 1..=max, spanning several octaves
    HarmonicSeries(u32),
    /// Just-tempered harmonics 1..=max folded into one octave, deduplicated
    HarmonicOctave(u32),
    /// Any frequencies in Hz; the first one given is the principal
    Arbitrary(Vec<f64>),
}

/// Tuning family a scale kind belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperament {
    Equal,
    Just,
    Arbitrary,
}

impl ScaleKind {
    /// Tuning family of this kind
    pub fn temperament(&self) -> Temperament {
        match self {
            Self::Chromatic | Self::Major | Self::Minor | Self::DiatonicMode(_) => {
                Temperament::Equal
            }
            Self::HarmonicSeries(_) | Self::HarmonicOctave(_) => Temperament::Just,
            Self::Arbitrary(_) => Temperament::Arbitrary,
        }
    }

    /// Frequencies of the primaries above a principal of `base` Hz
    ///
    /// Equal-tempered kinds step the 12-tone grid; just-tempered kinds
    /// multiply by exact ratios; arbitrary kinds return their own frequencies.
    fn primary_frequencies(&self, base: f64) -> Result<Vec<f64>> {
        let steps = |offsets: Vec<i32>| {
            offsets
                .into_iter()
                .map(|i| ith_freq_from_primary(base, i))
                .collect::<Vec<_>>()
        };
        let multiples = |ratios: Vec<FreqRatio>| {
            ratios
                .into_iter()
                .map(|r| frequency_from_fraction_of_primary(base, r))
                .collect::<Vec<_>>()
        };
        match self {
            Self::Chromatic => Ok(steps((0..SEMITONES_PER_OCTAVE).collect())),
            Self::Major => Ok(steps(MAJOR_STEPS.to_vec())),
            Self::Minor => Ok(steps(MINOR_STEPS.to_vec())),
            Self::DiatonicMode(mode) => Ok(steps(mode_steps(*mode)?)),
            Self::HarmonicSeries(max) | Self::HarmonicOctave(max) if *max == 0 => {
                Err(SemitoneError::InvalidMaxMultiplier(*max))
            }
            Self::HarmonicSeries(max) => Ok(multiples(harmonic_ratios(*max))),
            Self::HarmonicOctave(max) => Ok(multiples(unique_reduced_ratios(*max))),
            Self::Arbitrary(frequencies) => Ok(frequencies.clone()),
        }
    }

    /// Human label for a scale of this kind in `key`
    fn label(&self, key: &str) -> Result<String> {
        Ok(match self {
            Self::Chromatic => format!("{} chr", key),
            Self::Major => format!("{} ma", key),
            Self::Minor => format!("{} mi", key),
            Self::DiatonicMode(mode) => format!("{} {}", key, mode_abbreviation(*mode)?),
            Self::HarmonicSeries(_) => format!("{} harm ser", key),
            Self::HarmonicOctave(_) => format!("{} harm", key),
            Self::Arbitrary(_) => "arb".to_string(),
        })
    }
}

/// A series of tones in a distinct order
///
/// Scales are immutable; [`Scale::extend`] returns a new scale.
#[derive(Debug, Clone)]
pub struct Scale {
    key_name: String,
    scale_name: String,
    principal: Tone,
    primaries: Vec<Tone>,
    kind: ScaleKind,
}

impl Scale {
    /// Build a scale of `kind` whose principal is the note `key_name` in octave 4
    ///
    /// For [`ScaleKind::Arbitrary`] the key is derived from the principal
    /// frequency and `key_name` is ignored.
    ///
    /// ```
    /// use semitone::{Scale, ScaleKind};
    /// let scale = Scale::new("C", ScaleKind::Major).unwrap();
    /// assert_eq!(scale.scale_name(), "C ma");
    /// assert_eq!(scale.primaries().len(), 7);
    /// ```
    pub fn new(key_name: &str, kind: ScaleKind) -> Result<Self> {
        let scale = match kind.temperament() {
            Temperament::Equal | Temperament::Just => {
                let principal = Tone::new(frequency_from_name(key_name, 4)?);
                let primaries = kind
                    .primary_frequencies(principal.freq())?
                    .into_iter()
                    .map(Tone::new)
                    .collect();
                Self {
                    key_name: key_name.to_string(),
                    scale_name: kind.label(key_name)?,
                    principal,
                    primaries,
                    kind,
                }
            }
            Temperament::Arbitrary => Self::from_frequencies(kind)?,
        };
        debug!(
            "built scale '{}' with {} primaries, principal {} Hz",
            scale.scale_name,
            scale.primaries.len(),
            scale.principal
        );
        Ok(scale)
    }

    fn from_frequencies(kind: ScaleKind) -> Result<Self> {
        let frequencies = kind.primary_frequencies(0.0)?;
        let first = *frequencies.first().ok_or(SemitoneError::EmptyScale)?;
        let mut primaries = frequencies
            .into_iter()
            .map(Tone::try_new)
            .collect::<Result<Vec<_>>>()?;
        primaries.sort_by(|a, b| a.freq().total_cmp(&b.freq()));

        let principal = Tone::new(first);
        Ok(Self {
            key_name: format!("{} Hz", principal),
            scale_name: kind.label("")?,
            principal,
            primaries,
            kind,
        })
    }

    /// The 12 semitones from `key`
    pub fn chromatic(key: &str) -> Result<Self> {
        Self::new(key, ScaleKind::Chromatic)
    }

    /// The seven notes of the major scale in `key`
    pub fn major(key: &str) -> Result<Self> {
        Self::new(key, ScaleKind::Major)
    }

    /// The seven notes of the natural minor scale in `key`
    pub fn minor(key: &str) -> Result<Self> {
        Self::new(key, ScaleKind::Minor)
    }

    /// One of the seven classical diatonic modes in `key`
    pub fn diatonic_mode(key: &str, mode: u8) -> Result<Self> {
        Self::new(key, ScaleKind::DiatonicMode(mode))
    }

    /// Harmonics 1..=`max_multiplier` of `key`, not octave-reduced
    pub fn harmonic_series(key: &str, max_multiplier: u32) -> Result<Self> {
        Self::new(key, ScaleKind::HarmonicSeries(max_multiplier))
    }

    /// Unique harmonics 1..=`max_multiplier` of `key`, folded into one octave
    pub fn harmonic_octave(key: &str, max_multiplier: u32) -> Result<Self> {
        Self::new(key, ScaleKind::HarmonicOctave(max_multiplier))
    }

    /// Tones of arbitrary frequencies, sorted ascending
    pub fn arbitrary(frequencies: &[f64]) -> Result<Self> {
        Self::new("", ScaleKind::Arbitrary(frequencies.to_vec()))
    }

    /// Name of the principal note, or its frequency for arbitrary scales
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Human label, e.g. "C ma"
    pub fn scale_name(&self) -> &str {
        &self.scale_name
    }

    pub fn principal(&self) -> Tone {
        self.principal
    }

    pub fn primaries(&self) -> &[Tone] {
        &self.primaries
    }

    pub fn kind(&self) -> &ScaleKind {
        &self.kind
    }

    /// Primary frequencies in Hz
    pub fn frequencies(&self) -> Vec<f64> {
        self.primaries.iter().map(Tone::freq).collect()
    }

    /// A copy of this scale whose primaries repeat across more octaves
    ///
    /// ```
    /// use semitone::Scale;
    /// let scale = Scale::major("C").unwrap();
    /// let wide = scale.extend(1, 2);
    /// assert_eq!(wide.primaries().len(), 28);
    /// assert_eq!(scale.primaries().len(), 7);
    /// ```
    pub fn extend(&self, octaves_below: u16, octaves_above: u16) -> Scale {
        extender::extend(self, octaves_below, octaves_above)
    }

    /// Cut an extended scale back into one scale per octave block
    pub fn split_octaves(&self, octave_len: usize) -> Result<Vec<Scale>> {
        Ok(extender::split_octaves(&self.primaries, octave_len)?
            .into_iter()
            .map(|tones| self.with_primaries(tones))
            .collect())
    }

    /// Chromatic note names starting at this scale's key
    pub fn note_names_including_enharmonics(&self) -> Result<Vec<String>> {
        note_names_including_enharmonics(&self.key_name)
    }

    /// Same key, label and principal with different primaries
    pub(crate) fn with_primaries(&self, primaries: Vec<Tone>) -> Scale {
        Scale {
            key_name: self.key_name.clone(),
            scale_name: self.scale_name.clone(),
            principal: self.principal,
            primaries,
            kind: self.kind.clone(),
        }
    }
}

impl PartialEq for Scale {
    /// Equal when the primaries match pairwise, in order, under tone tolerance
    fn eq(&self, other: &Self) -> bool {
        self.primaries.len() == other.primaries.len()
            && self.primaries.iter().zip(&other.primaries).all(|(a, b)| a == b)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tones: Vec<String> = self.primaries.iter().map(Tone::to_string).collect();
        write!(f, "{}", tones.join(" "))
    }
}
