use clap::{Parser, ValueEnum};
use matchmaker::config::{OutputFormat, Settings};
use matchmaker::services::{load_names, ProfileGenerator, Questionnaire};
use matchmaker::{MatchReport, Matchmaker, Profile, ResultGroup, ScoringModel};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Find your best match among a pool of generated profiles
#[derive(Parser)]
#[command(name = "matchmaker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (overrides config/default and config/local)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scoring model
    #[arg(short, long, value_enum)]
    model: Option<ModelArg>,

    /// Number of candidate profiles to generate
    #[arg(short, long)]
    pool_size: Option<usize>,

    /// Seed for candidate generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Name list, one name per line
    #[arg(short, long)]
    names: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModelArg {
    /// Count of identical answers (0-4)
    Discrete,
    /// Weighted distance over folded answers (up to 100)
    Weighted,
}

impl From<ModelArg> for ScoringModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Discrete => ScoringModel::Discrete,
            ModelArg::Weighted => ScoringModel::Weighted,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic use
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    apply_overrides(&mut settings, &cli);

    init_logging(&settings);
    info!("Configuration loaded (model: {})", settings.scoring.model.name());

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(model) = cli.model {
        settings.scoring.model = model.into();
    }
    if let Some(pool_size) = cli.pool_size {
        settings.generator.pool_size = pool_size;
    }
    if let Some(seed) = cli.seed {
        settings.generator.seed = Some(seed);
    }
    if let Some(names) = &cli.names {
        settings.generator.names_file = names.clone();
    }
    if let Some(format) = cli.format {
        settings.output.format = format.into();
    }
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn run(settings: &Settings) -> matchmaker::Result<()> {
    let model = settings.scoring.model;

    let stdin = io::stdin();
    let user = Questionnaire::new(stdin.lock(), io::stdout()).ask_profile(model)?;

    // A missing name list leaves the pool empty rather than aborting
    let names = load_names(&settings.generator.names_file).unwrap_or_else(|e| {
        error!("{}", e);
        Vec::new()
    });
    let candidates = ProfileGenerator::new(names, settings.generator.seed)
        .generate(model, settings.generator.pool_size)?;

    let matcher = Matchmaker::new(model);
    let matches = matcher.run(&user, &candidates);
    info!("Matched {} against {} candidates", user.name, candidates.len());

    let mut out = io::stdout().lock();
    match settings.output.format {
        OutputFormat::Json => {
            let report = MatchReport {
                model,
                user,
                total_candidates: candidates.len(),
                matches,
                generated_at: chrono::Utc::now(),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => print_text(&mut out, model, &candidates, &matches)?,
    }

    Ok(())
}

fn print_text<W: Write>(
    out: &mut W,
    model: ScoringModel,
    candidates: &[Profile],
    matches: &[ResultGroup],
) -> io::Result<()> {
    writeln!(out)?;
    for candidate in candidates {
        writeln!(out, "{}", candidate.name)?;
    }

    writeln!(out, "\nPotential matches:")?;
    if matches.is_empty() {
        writeln!(out, "No suitable match found.")?;
    }
    for group in matches {
        match model {
            ScoringModel::Discrete => {
                writeln!(out, "{} - Compatibility Score: {}", group.body, group.score)?
            }
            ScoringModel::Weighted => {
                writeln!(out, "{}- Compatibility Score: {:.2}", group.body, group.score)?
            }
        }
    }

    Ok(())
}
