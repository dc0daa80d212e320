use clap::{Parser, Subcommand};
use loandoc::distribute::{FilePrintHost, FsDownloadTarget, NoNativeShare, PrintOutcome, ShareOutcome, StdoutLinkOpener};
use loandoc::records::{export_to_path, import_from_path};
use loandoc::types::LoanRecord;
use loandoc::{ExportConfig, OutputFormat, PipelineBuilder, PipelineError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Render loan records to printable HTML and paginated PDF.
#[derive(Parser)]
#[command(name = "loandoc", version, about)]
struct Cli {
    /// Configuration file (TOML, JSON or YAML). Environment variables prefixed
    /// LOANDOC__ override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the PDF download for a record.
    Pdf {
        record: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Write print-ready HTML that opens the print dialog when loaded.
    Html {
        record: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the share deep link for a record.
    ShareLink { record: PathBuf },
    /// Convert a JSON array of records to CSV.
    CsvExport { records: PathBuf, out: PathBuf },
    /// Convert CSV back to a JSON array of records on stdout.
    CsvImport { input: PathBuf },
}

fn read_record(path: &Path) -> Result<LoanRecord, PipelineError> {
    let value: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    if !value.is_object() {
        return Err(PipelineError::Other(format!(
            "{} does not contain a JSON object",
            path.display()
        )));
    }
    Ok(LoanRecord::from_value(value))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ExportConfig::load(cli.config.as_deref())?;
    let now = chrono::Local::now().naive_local();

    match cli.command {
        Command::Pdf { record, out_dir } => {
            let pipeline = PipelineBuilder::new().with_config(config).build()?;
            let path = pipeline.download_pdf(&read_record(&record)?, now, &FsDownloadTarget::new(out_dir))?;
            println!("{}", path.display());
        }
        Command::Html { record, out_dir } => {
            let pipeline = PipelineBuilder::new().with_config(config).build()?;
            let record = read_record(&record)?;
            let summary = pipeline.build_document(&record, now).summary;
            fs::create_dir_all(&out_dir)?;
            let path = out_dir.join(loandoc::distribute::download_filename(
                &summary,
                OutputFormat::Html.extension(),
            ));
            match pipeline.print_html(&record, now, &FilePrintHost::new(&path))? {
                PrintOutcome::Scheduled { .. } => println!("{}", path.display()),
                PrintOutcome::Blocked => log::warn!("Nothing written to {}", path.display()),
            }
        }
        Command::ShareLink { record } => {
            let pipeline = PipelineBuilder::new().with_config(config).build()?;
            let outcome = pipeline
                .share_pdf(&read_record(&record)?, now, &NoNativeShare, &StdoutLinkOpener)
                .await?;
            if let ShareOutcome::Failed { url } = outcome {
                return Err(PipelineError::Other(format!("could not open {}", url)));
            }
        }
        Command::CsvExport { records, out } => {
            let values: Vec<Value> = serde_json::from_str(&fs::read_to_string(&records)?)?;
            let records: Vec<LoanRecord> = values.into_iter().map(LoanRecord::from_value).collect();
            let written = export_to_path(&records, &out)?;
            log::info!("Wrote {} record(s) to {}", written, out.display());
        }
        Command::CsvImport { input } => {
            let records = import_from_path(&input)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}
