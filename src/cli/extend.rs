use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::graph::link::{DEFAULT_BASE_ORDER, DEFAULT_MAX_DISTANCE, DEFAULT_SOLID_THRESHOLD};
use crate::graph::{extend_left, extend_right, KmerCounts};
use crate::parsing::fasta;
use crate::utils::validation::{is_nucleotide_sequence, is_valid_order};

/// Which ends of the seed to extend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExtendDirection {
    Left,
    Right,
    #[default]
    Both,
}

#[derive(Args)]
pub struct ExtendArgs {
    /// Pile sequences whose k-mers form the graph (FASTA, optionally gzipped)
    #[arg(required = true)]
    pub pile: PathBuf,

    /// Sequence to extend
    #[arg(long, required = true)]
    pub seed: String,

    /// K-mer order
    #[arg(short = 'k', long, default_value_t = DEFAULT_BASE_ORDER)]
    pub order: usize,

    /// Maximum number of bases added on each side
    #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: usize,

    /// Minimum count of a solid k-mer
    #[arg(long, default_value_t = DEFAULT_SOLID_THRESHOLD)]
    pub solid_threshold: u32,

    /// Ends of the seed to extend
    #[arg(long, value_enum, default_value = "both")]
    pub direction: ExtendDirection,
}

/// Execute extend subcommand
///
/// # Errors
///
/// Returns an error if the seed or order is invalid or the pile cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtendArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if !is_nucleotide_sequence(&args.seed) {
        anyhow::bail!("Seed must only contain A, C, G and T");
    }
    if !is_valid_order(args.order, &args.seed) {
        anyhow::bail!(
            "Order {} must be between 1 and the seed length ({})",
            args.order,
            args.seed.len()
        );
    }

    let sequences = fasta::load_sequence_list(&args.pile)?;
    let counts = KmerCounts::from_sequences(&sequences, args.order..=args.order);

    if verbose {
        eprintln!(
            "Counted {} distinct {}-mers in {} sequences",
            counts.len(),
            args.order,
            sequences.len()
        );
    }

    let mut seq = args.seed.to_ascii_uppercase();
    let left = if args.direction == ExtendDirection::Right {
        0
    } else {
        extend_left(&counts, args.order, args.max_distance, &mut seq, args.solid_threshold)
    };
    let right = if args.direction == ExtendDirection::Left {
        0
    } else {
        extend_right(&counts, args.order, args.max_distance, &mut seq, args.solid_threshold)
    };

    match format {
        OutputFormat::Text => {
            println!("Extended {left} bases left and {right} bases right");
            println!("{seq}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "order": args.order,
                "left": left,
                "right": right,
                "sequence": seq,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("order\tleft\tright\tsequence");
            println!("{}\t{left}\t{right}\t{seq}", args.order);
        }
    }

    Ok(())
}
