use std::path::PathBuf;

use bigram_match::{output::OutputFormat, Scoring};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// The amount of log output.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: CliCommands,
}

#[derive(Subcommand)]
pub enum CliCommands {
    /// Report the best matching references for each query.
    TopN(TopNCommand),

    /// Report the bigram overlap of every reference with every query.
    Matrix(MatrixCommand),
}

#[derive(Args)]
pub struct SequenceFiles {
    /// A file with one query sequence per line.
    pub queries: PathBuf,

    /// A file with one reference sequence per line.
    pub references: PathBuf,
}

#[derive(Args)]
pub struct OutputArguments {
    /// The output file. If not given, results are written to stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

#[derive(Args)]
pub struct TopNCommand {
    #[command(flatten)]
    pub sequence_files: SequenceFiles,

    /// The number of references to keep for each query.
    #[arg(long, short = 'n', default_value_t = 2)]
    pub top_n: usize,

    #[arg(long, value_enum, default_value_t)]
    pub scoring: Scoring,

    #[command(flatten)]
    pub output_arguments: OutputArguments,
}

#[derive(Args)]
pub struct MatrixCommand {
    #[command(flatten)]
    pub sequence_files: SequenceFiles,

    #[command(flatten)]
    pub output_arguments: OutputArguments,
}
