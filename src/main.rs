use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use nw_rust::align::align_global;
use nw_rust::io::{parse_gap_penalty, read_sequence_pair_file};
use nw_rust::report::{write_report, write_score_matrix};
use nw_rust::scoring::SubstitutionMatrix;

/// Global alignment of two sequences with a linear gap penalty and highroad traceback
#[derive(Parser, Debug)]
#[command(name = "nw-rust", author, version, arg_required_else_help = true)]
struct Cli {
    /// File with two sequences separated by a blank line (FASTA also accepted)
    sequences: PathBuf,
    /// Substitution matrix file: a header row of symbols, then one scored row per symbol
    matrix: PathBuf,
    /// Score added per gap symbol, usually negative (e.g. -2)
    #[arg(allow_hyphen_values = true)]
    gap_penalty: String,
    /// Output path (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Also print the dynamic-programming score matrix
    #[arg(long = "show-matrix")]
    show_matrix: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(err) = run_align(&cli) {
        error!("{:#}", err);
        exit(1);
    }
}

fn run_align(cli: &Cli) -> Result<()> {
    let gap_penalty = parse_gap_penalty(&cli.gap_penalty)?;

    let pair = read_sequence_pair_file(&cli.sequences)
        .with_context(|| format!("cannot read sequences from '{}'", cli.sequences.display()))?;
    let table = SubstitutionMatrix::load_from_file(&cli.matrix)
        .with_context(|| format!("cannot load substitution matrix '{}'", cli.matrix.display()))?;

    let seq1 = &pair.first.seq;
    let seq2 = &pair.second.seq;
    info!("sequence 1 ({}): {} symbols", pair.first.label("unnamed"), seq1.len());
    info!("sequence 2 ({}): {} symbols", pair.second.label("unnamed"), seq2.len());
    info!("substitution matrix: {} symbols, gap penalty {}", table.len(), gap_penalty);
    if !table.is_symmetric() {
        info!("substitution matrix is not symmetric; score depends on sequence order");
    }

    let result = align_global(seq1, seq2, gap_penalty, &table).context("alignment failed")?;
    info!("alignment score: {}", result.score());

    let mut out: Box<dyn Write> = if let Some(p) = &cli.out {
        let f = std::fs::File::create(p)
            .with_context(|| format!("cannot create output '{}'", p.display()))?;
        Box::new(std::io::BufWriter::new(f))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    write_report(&mut out, seq1, &result)?;
    if cli.show_matrix {
        writeln!(out)?;
        write_score_matrix(&mut out, &result.matrix, seq1, seq2)?;
    }
    out.flush()?;
    Ok(())
}
