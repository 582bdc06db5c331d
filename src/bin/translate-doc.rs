use std::path::PathBuf;

use clap::Parser;

use locale_edge::config::{load_with_overrides, TranslateOverrides};
use locale_edge::observability::{init_logging, LogTarget};
use locale_edge::translation::{
    translate_document_file, AwsTranslator, JobOptions, LanguagePair,
};

#[derive(Parser)]
#[command(name = "translate-doc")]
#[command(about = "Translate a whole document with Amazon Translate", long_about = None)]
struct Cli {
    /// Source language code
    source_language: String,

    /// Target language code
    target_language: String,

    /// Path to the document (.txt, .html or .docx)
    file_path: PathBuf,

    /// Content type override; inferred from the extension otherwise
    #[arg(long)]
    content_type: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// AWS region override
    #[arg(short, long)]
    region: Option<String>,

    /// Directory for the output file (created if missing)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = TranslateOverrides {
        output_dir: cli.output_dir,
        region: cli.region,
        ..Default::default()
    };
    let config = load_with_overrides(cli.config.as_deref(), overrides)?;
    init_logging(&config.observability.log_level, LogTarget::Terminal);

    let translator = AwsTranslator::from_env(config.translate.region.clone()).await;
    let languages = LanguagePair::new(cli.source_language, cli.target_language);
    let options = JobOptions::from(&config.translate);

    let output = translate_document_file(
        &translator,
        &cli.file_path,
        cli.content_type.as_deref(),
        &languages,
        &options,
    )
    .await?;

    println!("Translated document written to {}", output.display());
    Ok(())
}
