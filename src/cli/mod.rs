//! Command-line interface for pilefix.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **piles**: Cut each template read into covered windows and print the sequence piles
//! - **extend**: Extend a seed along unambiguous paths of a pile's k-mer graph
//! - **link**: Connect two seeds through a pile's k-mer graph, reducing the order on failure
//!
//! ## Usage
//!
//! ```text
//! # Build piles from all-vs-all overlaps
//! minimap2 -x ava-ont reads.fa reads.fa > overlaps.paf
//! pilefix piles overlaps.paf reads.fa --window-size 500 --window-overlap 50
//!
//! # JSON output for scripting
//! pilefix piles overlaps.paf reads.fa --format json
//!
//! # Close a gap between two anchors using the k-mers of a pile
//! pilefix link pile.fa --source ACGTTGCAA --target GCAATTCGA
//! ```

use clap::{Parser, Subcommand};

pub mod extend;
pub mod link;
pub mod piles;

#[derive(Parser)]
#[command(name = "pilefix")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Correct long reads from alignment piles and local de Bruijn graphs")]
#[command(
    long_about = "pilefix splits each long read into windows supported by enough overlapping reads, extracts the matching slice of every supporting read for each window, and reconstructs sequence by walking the de Bruijn graph of the pile's k-mers.\n\nAlignments are read from PAF and sequences from FASTA."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute coverage windows and sequence piles for every template read
    Piles(piles::PilesArgs),

    /// Extend a seed along unambiguous k-mer paths
    Extend(extend::ExtendArgs),

    /// Link two seeds through the k-mer graph
    Link(link::LinkArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
