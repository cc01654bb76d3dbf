use std::path::PathBuf;

use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::{Alignment, SequenceStore};
use crate::parsing::{fasta, paf};
use crate::piles::{
    get_alignment_piles, group_by_query, AlignmentPiles, PileConfig, DEFAULT_MER_SIZE,
    DEFAULT_MIN_SUPPORT, DEFAULT_WINDOW_OVERLAP, DEFAULT_WINDOW_SIZE,
};

#[derive(Args)]
pub struct PilesArgs {
    /// Alignments of supporting reads against template reads (PAF, optionally gzipped)
    #[arg(required = true)]
    pub alignments: PathBuf,

    /// Sequences of every read named in the alignments (FASTA, optionally gzipped)
    #[arg(required = true)]
    pub reads: PathBuf,

    /// Minimum depth, template included, for a base to be inside a window
    #[arg(long, default_value_t = DEFAULT_MIN_SUPPORT)]
    pub min_support: u32,

    /// Window length
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Bases shared by consecutive windows (0 disables overlap)
    #[arg(long, default_value_t = DEFAULT_WINDOW_OVERLAP)]
    pub window_overlap: usize,

    /// K-mer size; shorter supporting slices are dropped
    #[arg(short = 'k', long, default_value_t = DEFAULT_MER_SIZE)]
    pub mer_size: usize,

    /// Number of worker threads (default: all cores)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl PilesArgs {
    fn config(&self) -> PileConfig {
        PileConfig {
            min_support: self.min_support,
            window_size: self.window_size,
            window_overlap: self.window_overlap,
            mer_size: self.mer_size,
        }
    }
}

/// Piles of one template read
#[derive(Debug, Serialize)]
struct ReadPiles {
    read: String,
    #[serde(flatten)]
    piles: AlignmentPiles,
}

/// Execute piles subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be parsed or the thread pool cannot be built.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PilesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let alignments = paf::parse_paf_file(&args.alignments)?;
    let store = fasta::load_sequences(&args.reads)?;

    if verbose {
        eprintln!(
            "Loaded {} alignments and {} sequences",
            alignments.len(),
            store.len()
        );
    }

    let groups = group_by_query(alignments);
    let config = args.config();

    let pool = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = args.threads {
            builder = builder.num_threads(threads);
        }
        builder.build()?
    };
    let results: Vec<ReadPiles> = pool.install(|| build_all(&groups, &store, &config));

    info!(
        "Built {} piles over {} template reads",
        results.iter().map(|r| r.piles.len()).sum::<usize>(),
        results.len()
    );

    match format {
        OutputFormat::Text => print_text(&results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv(&results),
    }

    Ok(())
}

/// Piles of every template read; reads are independent and processed in parallel
fn build_all(
    groups: &[Vec<Alignment>],
    store: &SequenceStore,
    config: &PileConfig,
) -> Vec<ReadPiles> {
    groups
        .par_iter()
        .filter_map(|group| {
            let read = group.first()?.q_name.clone();
            if !store.contains(&read) {
                warn!("Skipping template read '{read}': not found in sequences");
                return None;
            }
            Some(ReadPiles {
                piles: get_alignment_piles(group, store, config),
                read,
            })
        })
        .collect()
}

fn print_text(results: &[ReadPiles]) {
    for result in results {
        println!("{}: {} windows", result.read, result.piles.len());
        for (window, pile) in result.piles.iter() {
            println!("  {window} {} sequences", pile.len());
            for seq in pile {
                println!("    {seq}");
            }
        }
    }
}

fn print_tsv(results: &[ReadPiles]) {
    println!("read\tbegin\tend\tindex\tsequence");
    for result in results {
        for (window, pile) in result.piles.iter() {
            for (i, seq) in pile.iter().enumerate() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    result.read, window.begin, window.end, i, seq
                );
            }
        }
    }
}
