//! `label-contracts` - generate a contract document from a template and data file.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use label_contracts::adapters::document::input_loader::{
    load_clauses, load_contract_data, load_template,
};
use label_contracts::adapters::{
    HtmlContractRenderer, LocalDocumentFileStorage, PaginatedContractRenderer, PdfWriter,
    SourceImageLoader,
};
use label_contracts::application::{GenerateContractCommand, GenerateContractHandler};
use label_contracts::config::{AppConfig, LoggingConfig};
use label_contracts::domain::contract::ContractData;
use label_contracts::ports::ExportFormat;

#[derive(Debug, Parser)]
#[command(name = "label-contracts", version, about = "Generate label contracts as PDF or HTML")]
struct Cli {
    /// Contract template (JSON or YAML)
    #[arg(short, long)]
    template: PathBuf,

    /// Contract data (JSON or YAML); omitted fields are left blank
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Clause list that replaces the template's clauses
    #[arg(short, long)]
    clauses: Option<PathBuf>,

    /// Output format: pdf or html (defaults to configuration)
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Output directory (defaults to configuration)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Contract date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = logging.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    if let Err(e) = run(cli, config).await {
        error!(error = %e, "contract generation failed");
        return Err(e);
    }
    Ok(())
}

async fn run(cli: Cli, config: AppConfig) -> Result<(), Box<dyn Error>> {
    let template = load_template(&cli.template).await?;
    let data = match &cli.data {
        Some(path) => load_contract_data(path).await?,
        None => ContractData::default(),
    };
    let format = match cli.format {
        Some(format) => format,
        None => config.output.export_format()?,
    };
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let mut cmd = GenerateContractCommand::new(template, data, format, today);
    if let Some(path) = &cli.clauses {
        cmd = cmd.with_override_clauses(load_clauses(path).await?);
    }

    let out_dir = cli.out.unwrap_or_else(|| config.output.directory.clone());
    let image_loader = Arc::new(SourceImageLoader::new(config.images.loader_config()));
    let handler = GenerateContractHandler::new(
        Arc::new(HtmlContractRenderer::new()),
        Arc::new(PaginatedContractRenderer::new(
            image_loader,
            config.rendering.geometry()?,
        )),
        Arc::new(PdfWriter::new()),
        Arc::new(LocalDocumentFileStorage::new(out_dir)),
        config.company.resolve(),
    );

    let saved = handler.handle_and_store(cmd).await?;
    info!(
        filename = %saved.document.filename,
        size = saved.stored.size_bytes,
        "done"
    );
    println!("{}", saved.stored.path);
    Ok(())
}
