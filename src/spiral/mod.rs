//! Logarithmic spiral coordinates for tones and scales
//!
//! One full turn of the spiral is one octave, so tones of the same pitch
//! class line up along a ray while pitch height moves them inward.

mod spiral_plot;
mod spiral_scale;

pub use spiral_plot::{
    PlotTable, Renderer, SpiralPlot, DEFAULT_SEPARATION, TICK_COUNT, TICK_STEP_DEGREES,
};
pub use spiral_scale::{angle_from_freq, radius_from_freq, SpiralPoint, SpiralScale, B_ANGLE};
