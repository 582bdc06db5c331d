use std::path::PathBuf;

use clap::Parser;

use locale_edge::config::{load_with_overrides, TranslateMode, TranslateOverrides};
use locale_edge::observability::{init_logging, LogTarget};
use locale_edge::translation::{translate_text_file, AwsTranslator, JobOptions, LanguagePair};

#[derive(Parser)]
#[command(name = "translate")]
#[command(about = "Translate a UTF-8 text file with Amazon Translate", long_about = None)]
struct Cli {
    /// Source language code (e.g. "en", or "auto")
    source_language: String,

    /// Target language code (e.g. "es")
    target_language: String,

    /// Path to the file to translate
    file_path: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// AWS region override
    #[arg(short, long)]
    region: Option<String>,

    /// Send the whole file in a single request instead of chunking
    #[arg(long)]
    whole: bool,

    /// Maximum UTF-8 bytes per request when chunking
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Directory for the output file (created if missing)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = TranslateOverrides {
        mode: cli.whole.then_some(TranslateMode::Whole),
        max_chunk_bytes: cli.max_bytes,
        output_dir: cli.output_dir,
        region: cli.region,
    };
    let config = load_with_overrides(cli.config.as_deref(), overrides)?;
    init_logging(&config.observability.log_level, LogTarget::Terminal);

    let translator = AwsTranslator::from_env(config.translate.region.clone()).await;
    let languages = LanguagePair::new(cli.source_language, cli.target_language);
    let options = JobOptions::from(&config.translate);

    let output = translate_text_file(&translator, &cli.file_path, &languages, &options).await?;

    println!("Translated text written to {}", output.display());
    Ok(())
}
