use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::graph::link::{
    DEFAULT_BASE_ORDER, DEFAULT_MAX_BRANCHES, DEFAULT_MIN_ORDER, DEFAULT_SOLID_THRESHOLD,
};
use crate::graph::{KmerCounts, LinkConfig, LinkResult, Linker};
use crate::parsing::fasta;
use crate::utils::validation::{is_nucleotide_sequence, is_valid_order};

#[derive(Args)]
pub struct LinkArgs {
    /// Pile sequences whose k-mers form the graph (FASTA, optionally gzipped)
    #[arg(required = true)]
    pub pile: PathBuf,

    /// Seed the path starts from
    #[arg(long, required = true)]
    pub source: String,

    /// Seed the path must reach
    #[arg(long, required = true)]
    pub target: String,

    /// First k-mer order tried
    #[arg(short = 'k', long, default_value_t = DEFAULT_BASE_ORDER)]
    pub order: usize,

    /// Smallest k-mer order tried before giving up
    #[arg(long, default_value_t = DEFAULT_MIN_ORDER)]
    pub min_order: usize,

    /// Maximum number of bases added (default: length of the longest pile sequence)
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Maximum number of branches explored per order
    #[arg(long, default_value_t = DEFAULT_MAX_BRANCHES)]
    pub max_branches: usize,

    /// Minimum count of a solid k-mer
    #[arg(long, default_value_t = DEFAULT_SOLID_THRESHOLD)]
    pub solid_threshold: u32,
}

/// Execute link subcommand
///
/// # Errors
///
/// Returns an error if the seeds or orders are invalid, the pile cannot be
/// parsed, or no path links the seeds at any order.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LinkArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    for (what, seed) in [("Source", &args.source), ("Target", &args.target)] {
        if !is_nucleotide_sequence(seed) {
            anyhow::bail!("{what} seed must only contain A, C, G and T");
        }
        if !is_valid_order(args.order, seed) {
            anyhow::bail!(
                "Order {} must be between 1 and the {} seed length ({})",
                args.order,
                what.to_lowercase(),
                seed.len()
            );
        }
    }
    if args.min_order == 0 || args.min_order > args.order {
        anyhow::bail!(
            "Minimum order {} must be between 1 and the order ({})",
            args.min_order,
            args.order
        );
    }

    let sequences = fasta::load_sequence_list(&args.pile)?;
    let counts = KmerCounts::from_sequences(&sequences, args.min_order..=args.order);
    let longest = sequences.iter().map(String::len).max().unwrap_or(0);

    if verbose {
        eprintln!(
            "Counted {} distinct k-mers of orders {}..={} in {} sequences",
            counts.len(),
            args.min_order,
            args.order,
            sequences.len()
        );
    }

    let config = LinkConfig {
        base_order: args.order,
        min_order: args.min_order,
        max_distance: args.max_distance.unwrap_or(longest),
        max_branches: args.max_branches,
        solid_threshold: args.solid_threshold,
    };
    let linker = Linker::with_config(&counts, config);

    let source = args.source.to_ascii_uppercase();
    let target = args.target.to_ascii_uppercase();
    let result = linker
        .link_with_order_reduction(&source, &target)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No path links the seeds at orders {}..={}",
                args.min_order,
                args.order
            )
        })?;

    match format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => {
            println!("order\tbranches\tsequence");
            println!("{}\t{}\t{}", result.order, result.branches, result.missing_part);
        }
    }

    Ok(())
}

fn print_text(result: &LinkResult) {
    println!(
        "Linked at order {} after {} branches",
        result.order, result.branches
    );
    println!("{}", result.missing_part);
}
