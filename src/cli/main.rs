use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use ocrsheet::common::{default_export_file_name, get_current_timestamp_str};
use ocrsheet::config::AppConfig;
use ocrsheet::connectivity::is_online;
use ocrsheet::export::{ensure_xlsx_extension, SpreadsheetWriter, XlsxWriter};
use ocrsheet::image2text::{OcrEngine, OcrGranularity, OcrLanguage, TesseractEngine};
use ocrsheet::job::{parse_column_count, spawn_job, JobError, JobParameters};
use ocrsheet::logger::init_logger_exe;
use ocrsheet::upload::validate_image_path;

#[derive(Parser)]
#[command(version, about = "OCR an image and export the text as a spreadsheet grid", long_about = None)]
struct Cli {
    #[arg(long, help = "input image (jpg, jpeg, png)")]
    image: PathBuf,
    #[arg(long, help = "number of columns in the output grid")]
    columns: String,
    #[arg(long, help = "language of the image text (en, ar)", default_value = "en")]
    language: String,
    #[arg(long, help = "output .xlsx path (default: OCR_Export_<timestamp>.xlsx)")]
    output: Option<PathBuf>,
    #[arg(long, help = "fragment granularity (word, line)", default_value = "line")]
    granularity: String,
    #[arg(long, help = "tesseract dpi")]
    dpi: Option<u32>,
    #[arg(long, help = "tesseract page segmentation mode")]
    psm: Option<u32>,
    #[arg(long, help = "tesseract OCR engine mode")]
    oem: Option<u32>,
    #[arg(long, help = "do not require an internet connection", default_value_t = false)]
    skip_connectivity_check: bool,
    #[arg(long, help = "print the grid as JSON instead of writing a file", default_value_t = false)]
    stdout: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logger_exe();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<JobError>() {
                Some(job_err) if !job_err.is_user_visible() => log::warn!("{}", job_err),
                Some(job_err) => log::error!("[{}] {}", job_err.code(), job_err),
                None => log::error!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::default();
    config.ocr.granularity = OcrGranularity::from(cli.granularity.as_str());
    config.ocr.dpi = cli.dpi.or(config.ocr.dpi);
    config.ocr.psm = cli.psm.or(config.ocr.psm);
    config.ocr.oem = cli.oem.or(config.ocr.oem);

    if !cli.skip_connectivity_check && !is_online(&config.connectivity) {
        return Err(JobError::Offline.into());
    }

    let num_columns = parse_column_count(&cli.columns)?;
    let language: OcrLanguage = cli.language.parse()?;
    let image_path = validate_image_path(&cli.image)?;

    log::info!("Job started at {}", get_current_timestamp_str());
    let params = JobParameters::new(num_columns, language, image_path);
    let engine: Arc<dyn OcrEngine> = Arc::new(TesseractEngine::new(config.ocr.clone()));
    let handle = spawn_job(&tokio::runtime::Handle::current(), params, engine);

    ctrlc::set_handler({
        let cancel = handle.cancel_flag();
        move || {
            log::warn!("Ctrl-C received, cancelling...");
            cancel.store(true, Ordering::SeqCst);
        }
    })?;

    let grid = handle.wait().await?;

    if cli.stdout {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    let output = ensure_xlsx_extension(&cli.output.unwrap_or_else(|| PathBuf::from(default_export_file_name())));
    XlsxWriter::default()
        .write(&grid, &output)
        .map_err(|e| JobError::export(&output, e))?;

    log::info!("Saved {} rows to {}", grid.num_rows(), output.display());
    Ok(())
}
