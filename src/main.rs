use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use quizdoc::{
    Config, Exam, ExamOptions, ExportFormat, Question, export, load_bank_or_message, logging,
};

/// Extract a multiple-choice question bank from a .docx exam document
#[derive(Parser)]
#[command(name = "quizdoc", version, about)]
struct Cli {
    /// Exam document (.docx), or a JSON record file with --from-json.
    /// Defaults to the configured document.
    file: Option<PathBuf>,

    /// Read FILE as pre-extracted JSON question records
    #[arg(long)]
    from_json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    export: ExportFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Lowest question id to include
    #[arg(long)]
    start: Option<u32>,

    /// Highest question id to include
    #[arg(long)]
    end: Option<u32>,

    /// Shuffle question order
    #[arg(long)]
    shuffle_questions: bool,

    /// Shuffle the options of each question
    #[arg(long)]
    shuffle_answers: bool,

    /// Seed for shuffling, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Treat bold runs as ** emphasis markers
    #[arg(long)]
    bold_as_emphasis: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn wants_selection(&self) -> bool {
        self.start.is_some() || self.end.is_some() || self.shuffle_questions || self.shuffle_answers
    }

    fn exam_options(&self) -> ExamOptions {
        let defaults = ExamOptions::default();
        ExamOptions {
            start_id: self.start.unwrap_or(defaults.start_id),
            end_id: self.end.unwrap_or(defaults.end_id),
            shuffle_questions: self.shuffle_questions,
            shuffle_answers: self.shuffle_answers,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring unreadable config: {e:#}");
            Config::default()
        }
    };
    logging::init(&config.log_level);

    if cli.init_config {
        Config::init_default()?;
        if let Some(path) = Config::get_config_path() {
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let file_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.locate_default_document().with_context(|| {
            format!(
                "File '{}' not found in {:?}",
                config.default_document, config.search_dirs
            )
        })?,
    };

    let bank = if cli.from_json {
        export::load_records(&file_path)?
    } else {
        let mut options = config.load_options();
        options.bold_runs_as_emphasis |= cli.bold_as_emphasis;
        let (bank, message) = load_bank_or_message(&file_path, &options).await;
        if let Some(message) = message {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
        bank
    };

    let questions: Vec<Question> = if cli.wants_selection() {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let exam = Exam::start(&bank, &cli.exam_options(), &mut rng)?;
        exam.questions()
            .iter()
            .map(|entry| entry.question().clone())
            .collect()
    } else {
        bank.into_questions()
    };

    let rendered = match cli.export {
        ExportFormat::Json => export::export_to_json(&questions)?,
        ExportFormat::Text => export::export_to_text(&questions)?,
        ExportFormat::Markdown => export::export_to_markdown(&questions)?,
    };

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
