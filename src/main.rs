use clap::{Parser, ValueEnum};
use log::{debug, error};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use recipe_structurer::config::{load_config, load_config_from};
use recipe_structurer::{
    OutputFormat, ResponseKind, ResponseStructurer, StructureError, StructuredResponse,
};

#[derive(Parser)]
#[command(name = "recipe-structurer")]
#[command(about = "Turn generated recipe or nutrition text into structured blocks", long_about = None)]
#[command(version)]
struct Cli {
    /// File with the generated text (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Kind of answer the text is
    #[arg(short, long, value_enum, default_value_t = KindArg::Recipe)]
    kind: KindArg,

    /// Output format (defaults to output.format from configuration)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Configuration file (defaults to ./structurer.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Recipe,
    Nutrition,
}

impl From<KindArg> for ResponseKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Recipe => ResponseKind::Recipe,
            KindArg::Nutrition => ResponseKind::Nutrition,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
    Html,
    Annotated,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Annotated => OutputFormat::Annotated,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, StructureError> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    debug!("Read {} bytes of input", text.len());

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);
    let pretty = config.output.pretty;

    let response = ResponseStructurer::builder()
        .text(text)
        .kind(cli.kind.into())
        .config(config)
        .build()?;

    render(&response, format, pretty)
}

fn render(
    response: &StructuredResponse,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, StructureError> {
    Ok(match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&response.blocks)?,
        OutputFormat::Json => serde_json::to_string(&response.blocks)?,
        OutputFormat::Text => response.to_text(),
        OutputFormat::Html => response.to_html(),
        OutputFormat::Annotated => response.annotated.to_string(),
    })
}
