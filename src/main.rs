use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use bigram_match::{
    error::Result,
    input::read_sequences,
    output::{self, OutputFormat},
    BigramIndex, BulkMatcher, TopNMatcher,
};
use clap::Parser;
use cli::{Cli, CliCommands, MatrixCommand, OutputArguments, TopNCommand};
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

mod cli;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = initialise_logging(&cli) {
        eprintln!("Error: {error}");
    }

    match cli.command {
        CliCommands::TopN(top_n_command) => top_n(top_n_command),
        CliCommands::Matrix(matrix_command) => matrix(matrix_command),
    }
    .unwrap_or_else(|error| {
        error!("{error}");
        std::process::exit(1);
    });
}

fn initialise_logging(cli: &Cli) -> Result<()> {
    TermLogger::init(
        cli.log_level,
        ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn top_n(top_n_command: TopNCommand) -> Result<()> {
    // Load sequences.
    let sequence_files = &top_n_command.sequence_files;
    let queries = read_sequences(&sequence_files.queries)?;
    let references = read_sequences(&sequence_files.references)?;
    info!(
        "Read {} queries and {} references",
        queries.len(),
        references.len()
    );

    // Index queries.
    let index = BigramIndex::<u8>::from_sequences(&queries);
    info!("Indexed {} distinct bigrams", index.len());

    // Match references.
    let mut matcher = TopNMatcher::new(&index, top_n_command.top_n, top_n_command.scoring);
    matcher.match_references(&references);
    info!("Matched {} references", references.len());

    let top_n = matcher.into_top_n();
    write_output(&top_n_command.output_arguments, |format, output| {
        output::write_top_n(&top_n, format, output)
    })
}

fn matrix(matrix_command: MatrixCommand) -> Result<()> {
    // Load sequences.
    let sequence_files = &matrix_command.sequence_files;
    let queries = read_sequences(&sequence_files.queries)?;
    let references = read_sequences(&sequence_files.references)?;
    info!(
        "Read {} queries and {} references",
        queries.len(),
        references.len()
    );

    // Index queries.
    let index = BigramIndex::<u8>::from_sequences(&queries);
    info!("Indexed {} distinct bigrams", index.len());

    // Match references.
    let matrix = BulkMatcher::new(&index).match_references(&references);
    info!(
        "Computed a {}x{} overlap matrix",
        matrix.rows(),
        matrix.columns()
    );

    write_output(&matrix_command.output_arguments, |format, output| {
        output::write_matrix(&matrix, format, output)
    })
}

fn write_output(
    output_arguments: &OutputArguments,
    write: impl FnOnce(OutputFormat, &mut dyn Write) -> Result<()>,
) -> Result<()> {
    if let Some(path) = &output_arguments.output {
        let mut output = BufWriter::new(create_output_file(path)?);
        write(output_arguments.output_format, &mut output)
    } else {
        let mut output = io::stdout().lock();
        write(output_arguments.output_format, &mut output)
    }
}

fn create_output_file(path: &Path) -> Result<File> {
    info!("Writing output to {path:?}");
    Ok(File::create(path)?)
}
