//! Composition of several scales into one spiral plot

use log::{debug, warn};
use serde::Serialize;

use super::spiral_scale::{SpiralPoint, SpiralScale};
use crate::error::{Result, SemitoneError};
use crate::scales::{Scale, ScaleKind};

/// Radial multiplier applied per scale so shared tones do not overlap exactly
pub const DEFAULT_SEPARATION: f64 = 1.02;

/// Angular distance between axis ticks, one per semitone
pub const TICK_STEP_DEGREES: f64 = 30.0;

/// Number of axis ticks around the plot
pub const TICK_COUNT: usize = 12;

/// Everything a rendering backend needs to draw a spiral plot
#[derive(Debug, Clone, Serialize)]
pub struct PlotTable {
    /// One row per plotted tone, scales in plot order
    pub rows: Vec<SpiralPoint>,
    /// Tick positions in degrees, clockwise from north
    pub tick_angles: Vec<f64>,
    /// Tick text, one per tick angle
    pub tick_labels: Vec<String>,
}

impl PlotTable {
    /// Distinct row labels in first-seen order, for legends and colours
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !labels.contains(&row.label.as_str()) {
                labels.push(&row.label);
            }
        }
        labels
    }

    /// Rows belonging to one label
    pub fn rows_for<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a SpiralPoint> + 'a {
        self.rows.iter().filter(move |row| row.label == label)
    }

    /// Largest radius in the table, 0 when empty
    pub fn max_radius(&self) -> f64 {
        self.rows.iter().map(|row| row.radius).fold(0.0, f64::max)
    }

    /// Serialize the table for an external renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A backend that turns a plot table into a figure
pub trait Renderer {
    /// What the backend produces, e.g. `()` for an on-screen plot
    type Output;

    /// Draw the table
    fn render(&mut self, table: &PlotTable) -> anyhow::Result<Self::Output>;
}

/// Several scales drawn on one logarithmic spiral
///
/// The first scale sets the common frame: its principal sits at 12 o'clock
/// with radius equal to the scaling factor, and its key names the ticks.
///
/// ```
/// use semitone::{Scale, SpiralPlot};
/// let plot = SpiralPlot::new(vec![Scale::major("C").unwrap(), Scale::minor("C").unwrap()])
///     .unwrap()
///     .with_octaves(0, 1);
/// let table = plot.table().unwrap();
/// assert_eq!(table.rows.len(), 28);
/// assert_eq!(table.tick_labels[0], "C");
/// ```
#[derive(Debug, Clone)]
pub struct SpiralPlot {
    scales: Vec<Scale>,
    octaves_below: u16,
    octaves_above: u16,
    separation: f64,
    scaling_factor: f64,
}

impl SpiralPlot {
    /// Plot of `scales`, no octave extension, default separation
    pub fn new(scales: Vec<Scale>) -> Result<Self> {
        if scales.is_empty() {
            return Err(SemitoneError::EmptyScale);
        }
        Ok(Self {
            scales,
            octaves_below: 0,
            octaves_above: 0,
            separation: DEFAULT_SEPARATION,
            scaling_factor: 1.0,
        })
    }

    /// Extend every scale across extra octaves before plotting
    pub fn with_octaves(mut self, octaves_below: u16, octaves_above: u16) -> Self {
        self.octaves_below = octaves_below;
        self.octaves_above = octaves_above;
        self
    }

    /// Set the per-scale radial separation multiplier
    pub fn with_separation(mut self, separation: f64) -> Self {
        self.separation = separation;
        self
    }

    /// Set the radius of the reference tone
    pub fn with_scaling_factor(mut self, scaling_factor: f64) -> Self {
        self.scaling_factor = scaling_factor;
        self
    }

    pub fn scales(&self) -> &[Scale] {
        &self.scales
    }

    pub fn octaves(&self) -> (u16, u16) {
        (self.octaves_below, self.octaves_above)
    }

    pub fn separation(&self) -> f64 {
        self.separation
    }

    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// Build the combined coordinate table
    pub fn table(&self) -> Result<PlotTable> {
        check_positive("separation", self.separation)?;
        check_positive("scaling factor", self.scaling_factor)?;

        let first = &self.scales[0];
        let zeroth = first.principal();

        let mut rows = Vec::new();
        for (index, scale) in self.scales.iter().enumerate() {
            let extended = scale.extend(self.octaves_below, self.octaves_above);
            let offset = self.separation.powi(index as i32);
            rows.extend(
                SpiralScale::with_reference(&extended, zeroth, self.scaling_factor)
                    .into_points()
                    .into_iter()
                    .map(|point| SpiralPoint {
                        radius: point.radius * offset,
                        ..point
                    }),
            );
        }

        let tick_angles: Vec<f64> = (0..TICK_COUNT)
            .map(|i| i as f64 * TICK_STEP_DEGREES)
            .collect();
        let tick_labels = match first.kind() {
            // arbitrary keys are frequencies, not note names
            ScaleKind::Arbitrary(_) => tick_angles.iter().map(|a| format!("{}°", a)).collect(),
            _ => first.note_names_including_enharmonics()?,
        };

        debug!(
            "composed spiral plot of {} scales, {} rows, reference {} Hz",
            self.scales.len(),
            rows.len(),
            zeroth
        );

        Ok(PlotTable {
            rows,
            tick_angles,
            tick_labels,
        })
    }

    /// Build the table and hand it to a rendering backend
    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> anyhow::Result<R::Output> {
        let table = self.table()?;
        renderer.render(&table)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        warn!("rejecting plot with {} = {}", name, value);
        return Err(SemitoneError::InvalidParameter { name, value });
    }
    Ok(())
}
