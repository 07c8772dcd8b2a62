//! CLI interface for Semitone

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use semitone::ScaleKind;

/// Geometric representations of tones and scales
#[derive(Parser)]
#[command(name = "semitone")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the frequencies of one scale
    Show {
        /// Key note name, e.g. C, F#, Bb
        #[arg(short, long, default_value = "C")]
        key: String,

        /// Scale type
        #[arg(long, value_enum, default_value = "major")]
        kind: KindArg,

        /// Diatonic mode number 1-7 (for --kind diatonic-mode)
        #[arg(short, long, default_value = "1")]
        mode: u8,

        /// Highest harmonic (for harmonic kinds)
        #[arg(long, default_value = "12")]
        max: u32,

        /// Octaves to add below the scale
        #[arg(long, default_value = "0")]
        below: u16,

        /// Octaves to add above the scale
        #[arg(long, default_value = "0")]
        above: u16,
    },

    /// Print the combined spiral plot table
    Table {
        /// Configuration file path
        #[arg(short, long, default_value = "semitone.yaml")]
        config: PathBuf,

        /// Emit JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },

    /// Draw the spiral plot in the terminal
    Plot {
        /// Configuration file path
        #[arg(short, long, default_value = "semitone.yaml")]
        config: PathBuf,
    },

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "semitone.yaml")]
        config: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}

/// Scale types selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum KindArg {
    Chromatic,
    Major,
    Minor,
    DiatonicMode,
    HarmonicSeries,
    HarmonicOctave,
}

impl KindArg {
    /// Scale kind, filling in the mode or harmonic limit where it applies
    pub fn to_kind(self, mode: u8, max: u32) -> ScaleKind {
        match self {
            Self::Chromatic => ScaleKind::Chromatic,
            Self::Major => ScaleKind::Major,
            Self::Minor => ScaleKind::Minor,
            Self::DiatonicMode => ScaleKind::DiatonicMode(mode),
            Self::HarmonicSeries => ScaleKind::HarmonicSeries(max),
            Self::HarmonicOctave => ScaleKind::HarmonicOctave(max),
        }
    }
}
