//! Configuration schema definitions

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::scales::{chromatic_index, Scale, ScaleKind};
use crate::spiral::{SpiralPlot, DEFAULT_SEPARATION};

/// Main configuration: which scales to plot and how
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Plot layout settings
    #[serde(default)]
    pub plot: PlotSettings,

    /// Scales to draw; the first sets the reference frame
    pub scales: Vec<ScaleConfig>,
}

impl PlotConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.scales.is_empty() {
            bail!("At least one scale must be configured");
        }
        if !(self.plot.separation.is_finite() && self.plot.separation > 0.0) {
            bail!("Separation must be a positive number");
        }
        if !(self.plot.scaling_factor.is_finite() && self.plot.scaling_factor > 0.0) {
            bail!("Scaling factor must be a positive number");
        }

        for (i, scale) in self.scales.iter().enumerate() {
            scale
                .validate()
                .with_context(|| format!("Scale #{} is invalid", i + 1))?;
        }

        Ok(())
    }

    /// Build the spiral plot this configuration describes
    pub fn to_plot(&self) -> Result<SpiralPlot> {
        let scales = self
            .scales
            .iter()
            .map(ScaleConfig::to_scale)
            .collect::<Result<Vec<_>>>()?;
        Ok(SpiralPlot::new(scales)?
            .with_octaves(self.plot.octaves_below, self.plot.octaves_above)
            .with_separation(self.plot.separation)
            .with_scaling_factor(self.plot.scaling_factor))
    }
}

/// Plot layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSettings {
    /// Octaves added below each scale (default: 0)
    #[serde(default)]
    pub octaves_below: u16,

    /// Octaves added above each scale (default: 0)
    #[serde(default)]
    pub octaves_above: u16,

    /// Radial multiplier between successive scales (default: 1.02)
    #[serde(default = "default_separation")]
    pub separation: f64,

    /// Radius of the reference tone (default: 1.0)
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            octaves_below: 0,
            octaves_above: 0,
            separation: default_separation(),
            scaling_factor: default_scaling_factor(),
        }
    }
}

fn default_separation() -> f64 { DEFAULT_SEPARATION }
fn default_scaling_factor() -> f64 { 1.0 }
fn default_max_multiplier() -> u32 { 12 }

/// One scale to plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Key note name, e.g. "C" or "Bb" (default: C)
    #[serde(default = "default_key")]
    pub key: String,

    /// Scale type
    pub kind: ScaleType,

    /// Diatonic mode number 1-7
    pub mode: Option<u8>,

    /// Highest harmonic for harmonic scales (default: 12)
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: u32,

    /// Frequencies in Hz for arbitrary scales
    #[serde(default)]
    pub frequencies: Vec<f64>,
}

fn default_key() -> String { "C".to_string() }

impl ScaleConfig {
    /// Validate a single scale entry
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            ScaleType::Arbitrary => {
                if self.frequencies.is_empty() {
                    bail!("Arbitrary scales need at least one frequency");
                }
                if let Some(bad) = self.frequencies.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
                    bail!("Frequency {} must be a positive number", bad);
                }
                return Ok(());
            }
            ScaleType::DiatonicMode => match self.mode {
                Some(1..=7) => {}
                Some(mode) => bail!("Mode must be between 1 and 7, got {}", mode),
                None => bail!("Diatonic modes need a 'mode' between 1 and 7"),
            },
            ScaleType::HarmonicSeries | ScaleType::HarmonicOctave => {
                if self.max_multiplier == 0 {
                    bail!("Max multiplier must be at least 1");
                }
            }
            _ => {}
        }

        chromatic_index(&self.key)?;
        Ok(())
    }

    /// The scale kind this entry names
    pub fn scale_kind(&self) -> Result<ScaleKind> {
        Ok(match self.kind {
            ScaleType::Chromatic => ScaleKind::Chromatic,
            ScaleType::Major => ScaleKind::Major,
            ScaleType::Minor => ScaleKind::Minor,
            ScaleType::DiatonicMode => {
                let mode = self.mode.context("Diatonic modes need a 'mode'")?;
                ScaleKind::DiatonicMode(mode)
            }
            ScaleType::HarmonicSeries => ScaleKind::HarmonicSeries(self.max_multiplier),
            ScaleType::HarmonicOctave => ScaleKind::HarmonicOctave(self.max_multiplier),
            ScaleType::Arbitrary => ScaleKind::Arbitrary(self.frequencies.clone()),
        })
    }

    /// Build the scale
    pub fn to_scale(&self) -> Result<Scale> {
        Ok(Scale::new(&self.key, self.scale_kind()?)?)
    }
}

/// Types of scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    /// All 12 semitones
    Chromatic,
    /// Major scale
    Major,
    /// Natural minor scale
    Minor,
    /// One of the seven diatonic modes
    DiatonicMode,
    /// Harmonics 1..max across several octaves
    HarmonicSeries,
    /// Harmonics 1..max folded into one octave
    HarmonicOctave,
    /// Explicit frequencies
    Arbitrary,
}
