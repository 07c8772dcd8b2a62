//! Tones and scales
//!
//! Equal-tempered scales step a 12-tone grid referenced to A440;
//! just-tempered scales multiply a principal frequency by exact ratios.

mod equal_tempered;
mod extender;
mod just_tempered;
mod scale;
mod tone;

pub use equal_tempered::{
    chromatic_index, frequency_from_name, ith_freq_from_primary, mode_abbreviation, mode_steps,
    note_names_including_enharmonics, A440, MAJOR_STEPS, MINOR_STEPS, SPELLINGS,
};
pub use extender::{extend, extend_tones, split_octaves};
pub use just_tempered::{
    frequency_from_fraction_of_primary, harmonic_ratios, reduced_ratio, unique_reduced_ratios,
    FreqRatio,
};
pub use scale::{Scale, ScaleKind, Temperament};
pub use tone::Tone;
