//! Equal-tempered tuning on the 12-tone grid
//!
//! Frequencies live on a grid equally spaced in log frequency, 12 semitones
//! to the octave, referenced to international standard pitch A4 = 440 Hz.

use crate::error::{Result, SemitoneError};

/// Reference pitch A4 in Hz
pub const A440: f64 = 440.0;

/// Semitones per octave
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Enharmonic spellings for each chromatic slot, starting at C
pub const SPELLINGS: [&[&str]; 12] = [
    &["C"],
    &["Db", "C#"],
    &["D"],
    &["Eb", "D#"],
    &["E"],
    &["F"],
    &["Gb", "F#"],
    &["G"],
    &["Ab", "G#"],
    &["A"],
    &["Bb", "A#"],
    &["B"],
];

/// Semitone offsets of the major scale, also the Ionian step pattern
pub const MAJOR_STEPS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offsets of the natural minor scale
pub const MINOR_STEPS: [i32; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Short labels of the diatonic modes, Ionian first
pub const MODE_ABBREVIATIONS: [&str; 7] = ["ion", "dor", "phr", "lyd", "mix", "aeo", "loc"];

/// Compute the frequency `i` semitones above `base` (negative steps down)
///
/// ```
/// use semitone::scales::ith_freq_from_primary;
/// assert!((ith_freq_from_primary(440.0, 12) - 880.0).abs() < 1e-9);
/// assert!((ith_freq_from_primary(440.0, -12) - 220.0).abs() < 1e-9);
/// ```
pub fn ith_freq_from_primary(base: f64, i: i32) -> f64 {
    base * 2f64.powf(i as f64 / SEMITONES_PER_OCTAVE as f64)
}

/// Chromatic index (0 = C ... 11 = B) of a 1-2 character note name
pub fn chromatic_index(name: &str) -> Result<usize> {
    SPELLINGS
        .iter()
        .position(|slot| slot.contains(&name))
        .ok_or_else(|| SemitoneError::InvalidNoteName(name.to_string()))
}

/// Frequency of a traditional western note name in the given octave
///
/// Octaves follow scientific pitch notation, so octave 4 starts at middle C
/// and covers roughly 262-523 Hz.
///
/// ```
/// use semitone::scales::frequency_from_name;
/// let a4 = frequency_from_name("A", 4).unwrap();
/// assert!((a4 - 440.0).abs() < 1e-9);
/// ```
pub fn frequency_from_name(name: &str, octave: i32) -> Result<f64> {
    let index = chromatic_index(name)?;
    let freq_c4 = ith_freq_from_primary(A440, -9);
    let freq = ith_freq_from_primary(freq_c4, index as i32);
    Ok(freq * 2f64.powi(octave - 4))
}

/// Note names of the chromatic scale starting at `key`, enharmonics joined by "/"
///
/// ```
/// use semitone::scales::note_names_including_enharmonics;
/// let names = note_names_including_enharmonics("D").unwrap();
/// assert_eq!(names[0], "D");
/// assert_eq!(names[1], "Eb/D#");
/// assert_eq!(names[11], "Db/C#");
/// ```
pub fn note_names_including_enharmonics(key: &str) -> Result<Vec<String>> {
    let start = chromatic_index(key)?;
    Ok((0..SPELLINGS.len())
        .map(|i| SPELLINGS[(start + i) % SPELLINGS.len()].join("/"))
        .collect())
}

/// Semitone offsets of a diatonic mode, 1 = Ionian through 7 = Locrian
///
/// The major step pattern is rotated so the mode's starting degree becomes
/// the root, then sorted ascending.
pub fn mode_steps(mode: u8) -> Result<Vec<i32>> {
    if !(1..=7).contains(&mode) {
        return Err(SemitoneError::InvalidModeNumber(mode));
    }
    let start_step = MAJOR_STEPS[mode as usize - 1];
    let mut steps: Vec<i32> = MAJOR_STEPS
        .iter()
        .map(|step| (step - start_step).rem_euclid(SEMITONES_PER_OCTAVE))
        .collect();
    steps.sort_unstable();
    Ok(steps)
}

/// Short label of a diatonic mode, e.g. "dor" for mode 2
pub fn mode_abbreviation(mode: u8) -> Result<&'static str> {
    match mode {
        1..=7 => Ok(MODE_ABBREVIATIONS[mode as usize - 1]),
        _ => Err(SemitoneError::InvalidModeNumber(mode)),
    }
}
