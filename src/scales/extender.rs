//! Extends the primary tones of a scale to higher or lower octaves

use super::scale::Scale;
use super::tone::Tone;
use crate::error::{Result, SemitoneError};

/// Repeat `tones` across octaves `-octaves_below..=octaves_above`
///
/// Octaves are emitted lowest first; each keeps the original tone order.
pub fn extend_tones(tones: &[Tone], octaves_below: u16, octaves_above: u16) -> Vec<Tone> {
    let octaves = -i32::from(octaves_below)..=i32::from(octaves_above);
    let mut extended = Vec::with_capacity(tones.len() * octaves.clone().count());
    for octave in octaves {
        extended.extend(tones.iter().map(|tone| tone.transpose_octaves(octave)));
    }
    extended
}

/// New scale with the primaries of `scale` repeated across extra octaves
///
/// The principal is left untouched.
pub fn extend(scale: &Scale, octaves_below: u16, octaves_above: u16) -> Scale {
    scale.with_primaries(extend_tones(scale.primaries(), octaves_below, octaves_above))
}

/// Cut a multi-octave run of tones into consecutive blocks of `octave_len`
pub fn split_octaves(tones: &[Tone], octave_len: usize) -> Result<Vec<Vec<Tone>>> {
    if octave_len == 0 || tones.len() % octave_len != 0 {
        return Err(SemitoneError::IncompatibleOctaveSplit {
            len: tones.len(),
            octave_len,
        });
    }
    Ok(tones.chunks(octave_len).map(<[Tone]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_length() {
        let scale = Scale::major("D").unwrap();
        for (below, above) in [(0, 0), (1, 0), (0, 2), (2, 3)] {
            let extended = extend(&scale, below, above);
            assert_eq!(
                extended.primaries().len(),
                (below + above + 1) as usize * scale.primaries().len()
            );
        }
    }

    #[test]
    fn test_extend_blocks_share_pitch_class() {
        let scale = Scale::harmonic_octave("F#", 9).unwrap();
        let len = scale.primaries().len();
        let extended = extend(&scale, 2, 1);

        for block in extended.primaries().chunks(len) {
            for (tone, original) in block.iter().zip(scale.primaries()) {
                assert!(tone.same_pitch_class(original), "{} vs {}", tone, original);
            }
        }
    }

    #[test]
    fn test_extend_octave_order() {
        let scale = Scale::arbitrary(&[100.0, 150.0]).unwrap();
        let extended = extend(&scale, 1, 1);
        assert_eq!(
            extended.frequencies(),
            vec![50.0, 75.0, 100.0, 150.0, 200.0, 300.0]
        );
    }

    #[test]
    fn test_extend_keeps_principal_and_original() {
        let scale = Scale::minor("C").unwrap();
        let extended = extend(&scale, 1, 1);
        assert_eq!(extended.principal().freq(), scale.principal().freq());
        assert_eq!(extended.scale_name(), scale.scale_name());
        assert_eq!(scale.primaries().len(), 7);
    }

    #[test]
    fn test_extend_length_at_widest_range() {
        let scale = Scale::arbitrary(&[100.0]).unwrap();
        let extended = extend(&scale, 1000, u16::MAX);
        assert_eq!(extended.primaries().len(), 1000 + u16::MAX as usize + 1);
        assert!(extended.primaries()[0] < extended.primaries()[1]);
    }

    #[test]
    fn test_split_octaves() {
        let tones: Vec<Tone> = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].map(Tone::new).to_vec();
        let blocks = split_octaves(&tones, 3).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1][0].freq(), 4.0);

        assert_eq!(
            split_octaves(&tones, 4),
            Err(SemitoneError::IncompatibleOctaveSplit { len: 6, octave_len: 4 })
        );
        assert!(split_octaves(&tones, 0).is_err());
    }
}
