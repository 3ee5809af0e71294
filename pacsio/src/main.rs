use clap::{Parser, ValueEnum};
use pacsiolib::{
    error::{PacsError, Result},
    formats::{json::Json, xml::Xml},
    traits::{ReadFormat, WriteFormat},
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Xml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pacsio", version, about = "Конвертация заголовков ISO 20022 (GrpHdr)")]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат входа
    #[arg(long = "in-format", value_enum)]
    in_format: Fmt,

    /// Формат выхода
    #[arg(long = "out-format", value_enum)]
    out_format: Fmt,

    /// Подробный лог в stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "pacsio=debug,pacsiolib=debug"
    } else {
        "pacsio=info,pacsiolib=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let header = match cli.in_format {
        Fmt::Xml => Xml::read(br),
        Fmt::Json => Json::read(br),
    }?;

    // writer
    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.out_format {
        Fmt::Xml => Xml::write(&mut writer, &header),
        Fmt::Json => Json::write(&mut writer, &header),
    }?;

    tracing::info!(
        from = ?cli.in_format,
        to = ?cli.out_format,
        transactions = header.number_of_transactions.as_ref().map(|n| n.as_str()).unwrap_or("-"),
        "converted group header"
    );

    writer.flush().map_err(PacsError::from)
}
