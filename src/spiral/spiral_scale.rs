//! The geometric representation of a scale as a logarithmic spiral
//!
//! Radius is a scaled wavelength, so higher tones sit closer to the centre.
//! Angle encodes pitch class: the reference tone is at 12 o'clock and rising
//! pitch moves clockwise, one full turn per octave.

use std::f64::consts::{FRAC_PI_2, LN_2, TAU};

use serde::Serialize;

use crate::scales::{Scale, Tone};

/// Growth constant of the spiral, one octave per turn
pub const B_ANGLE: f64 = LN_2 / TAU;

/// One row of spiral plot data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiralPoint {
    /// Radial coordinate (scaled wavelength)
    pub radius: f64,
    /// Angular coordinate in degrees, 0 at north, clockwise positive
    pub angle: f64,
    /// Label of the scale the tone belongs to
    pub label: String,
}

/// Convert a frequency to a scaled wavelength
///
/// The zeroth tone lands at `scaling_factor`; lower tones plot farther out.
pub fn radius_from_freq(freq: f64, zeroth: f64, scaling_factor: f64) -> f64 {
    scaling_factor * zeroth / freq
}

/// Convert a frequency to a plot angle in degrees
///
/// The zeroth tone is at 0 degrees. Each octave above advances a full 360
/// degrees, so every semitone of an equal-tempered scale is 30 degrees on.
///
/// ```
/// use semitone::spiral::angle_from_freq;
/// let fifth = angle_from_freq(440.0 * 1.5, 440.0);
/// assert!((fifth.rem_euclid(360.0) - 210.59).abs() < 0.01);
/// ```
pub fn angle_from_freq(freq: f64, zeroth: f64) -> f64 {
    // standard math coords first: radians, 0 is east, counter-clockwise
    let mut theta = (zeroth / freq).ln() / B_ANGLE + FRAC_PI_2;
    if !(0.0..TAU).contains(&theta) {
        theta = theta.rem_euclid(TAU);
    }
    // then plot coords: degrees, 0 is north, clockwise
    (FRAC_PI_2 - theta).to_degrees()
}

/// Polar coordinates for every primary tone of one scale
#[derive(Debug, Clone)]
pub struct SpiralScale {
    zeroth: Tone,
    scaling_factor: f64,
    points: Vec<SpiralPoint>,
}

impl SpiralScale {
    /// Spiral for `scale` referenced to its own principal, unit scaling
    pub fn new(scale: &Scale) -> Self {
        Self::with_reference(scale, scale.principal(), 1.0)
    }

    /// Spiral for `scale` referenced to an arbitrary zeroth tone
    pub fn with_reference(scale: &Scale, zeroth: Tone, scaling_factor: f64) -> Self {
        let points = scale
            .primaries()
            .iter()
            .map(|tone| SpiralPoint {
                radius: radius_from_freq(tone.freq(), zeroth.freq(), scaling_factor),
                angle: angle_from_freq(tone.freq(), zeroth.freq()),
                label: scale.scale_name().to_string(),
            })
            .collect();

        Self {
            zeroth,
            scaling_factor,
            points,
        }
    }

    pub fn zeroth(&self) -> Tone {
        self.zeroth
    }

    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// Radius of an arbitrary frequency in this spiral's frame
    pub fn radius(&self, freq: f64) -> f64 {
        radius_from_freq(freq, self.zeroth.freq(), self.scaling_factor)
    }

    /// Angle of an arbitrary frequency in this spiral's frame
    pub fn angle(&self, freq: f64) -> f64 {
        angle_from_freq(freq, self.zeroth.freq())
    }

    /// One row per primary tone, in scale order
    pub fn points(&self) -> &[SpiralPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<SpiralPoint> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distance between two angles on the circle, in degrees
    fn angle_gap(a: f64, b: f64) -> f64 {
        let gap = (a - b).rem_euclid(360.0);
        gap.min(360.0 - gap)
    }

    #[test]
    fn test_chromatic_points() {
        let scale = Scale::chromatic("C").unwrap();
        let spiral = SpiralScale::new(&scale);
        assert_eq!(spiral.points().len(), 12);

        for (i, point) in spiral.points().iter().enumerate() {
            let radius = 0.5f64.powf(i as f64 / 12.0);
            let angle = 30.0 * i as f64;
            assert!((point.radius - radius).abs() < 1e-5, "radius {}: {}", i, point.radius);
            assert!(angle_gap(point.angle, angle) < 1e-5, "angle {}: {}", i, point.angle);
            assert_eq!(point.label, "C chr");
        }
    }

    #[test]
    fn test_zeroth_tone_at_north() {
        assert_eq!(angle_from_freq(440.0, 440.0), 0.0);
        assert_eq!(radius_from_freq(440.0, 440.0, 2.5), 2.5);
    }

    #[test]
    fn test_angle_octave_invariance() {
        for freq in [27.5, 100.0, 261.63, 440.0, 1234.5, 8000.0] {
            let a = angle_from_freq(freq, 261.63);
            let b = angle_from_freq(2.0 * freq, 261.63);
            let c = angle_from_freq(freq / 4.0, 261.63);
            assert!(angle_gap(a, b) < 1e-9, "{}: {} vs {}", freq, a, b);
            assert!(angle_gap(a, c) < 1e-9, "{}: {} vs {}", freq, a, c);
        }
    }

    #[test]
    fn test_angle_range() {
        for i in -30..30 {
            let angle = angle_from_freq(440.0 * 2f64.powf(i as f64 / 7.0), 440.0);
            assert!(angle > -270.0 - 1e-9 && angle <= 90.0, "angle {}", angle);
        }
    }

    #[test]
    fn test_radius_strictly_decreasing() {
        let freqs: Vec<f64> = (1..200).map(|i| i as f64 * 13.7).collect();
        for pair in freqs.windows(2) {
            assert!(radius_from_freq(pair[1], 261.63, 1.0) < radius_from_freq(pair[0], 261.63, 1.0));
        }
    }

    #[test]
    fn test_custom_reference() {
        let scale = Scale::major("G").unwrap();
        let c4 = Scale::major("C").unwrap().principal();
        let spiral = SpiralScale::with_reference(&scale, c4, 3.0);

        // G is seven semitones above C
        let first = &spiral.points()[0];
        assert!(angle_gap(first.angle, 210.0) < 1e-6, "angle {}", first.angle);
        assert!((first.radius - 3.0 * c4.freq() / scale.principal().freq()).abs() < 1e-12);
        assert_eq!(spiral.radius(c4.freq()), 3.0);
        assert_eq!(spiral.angle(c4.freq()), 0.0);
    }
}
