//! Semitone - geometric representations of tones and scales
//!
//! Computes the frequencies of equal- and just-tempered scales and places
//! them on a logarithmic spiral, where octave equivalence shows up as
//! angular alignment and pitch height as distance from the centre.

pub mod config;
pub mod error;
pub mod scales;
pub mod spiral;
pub mod viz;

pub use error::{Result, SemitoneError};
pub use scales::{Scale, ScaleKind, Tone};
pub use spiral::{PlotTable, Renderer, SpiralPlot, SpiralScale};
