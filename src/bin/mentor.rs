//! Mentor CLI - Command-line interface for Mindful Mentor
//!
//! Commands:
//! - score: Score answers given as flags or as a JSON document
//! - interactive: Walk the Welcome → Questionnaire → Score flow in the terminal
//! - questions: Print the questionnaire catalog
//! - schema: Print the input and output JSON shapes

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mindful_mentor::console::{render_score, ConsoleApp};
use mindful_mentor::encoder::{ReportEncoder, ScoreReport};
use mindful_mentor::questionnaire::{ControlKind, QUESTIONS};
use mindful_mentor::{MentorError, QuestionnaireResponse, MENTOR_VERSION, PRODUCER_NAME};

/// Mentor - Wellness questionnaire scoring
#[derive(Parser)]
#[command(name = "mentor")]
#[command(version = MENTOR_VERSION)]
#[command(about = "Score a short wellness questionnaire", long_about = None)]
struct Cli {
    /// Log debug events to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score answers given as flags or as a JSON document
    Score {
        /// Hours of quality sleep last night (0-12)
        #[arg(long, conflicts_with = "input")]
        sleep: Option<f64>,

        /// Work stress from 1 (not stressed) to 10 (extremely stressed)
        #[arg(long, conflicts_with = "input")]
        stress: Option<f64>,

        /// Overall mood from 1 (very low) to 10 (very high)
        #[arg(long, conflicts_with = "input")]
        mood: Option<f64>,

        /// At least 30 minutes of moderate physical activity today
        #[arg(long, conflicts_with = "input")]
        active: bool,

        /// Read answers from a JSON file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Walk the questionnaire interactively
    Interactive {
        /// Run even when stdin is not a terminal
        #[arg(long)]
        force: bool,
    },

    /// Print the questionnaire catalog
    Questions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable score screen
    Text,
    /// Compact JSON report
    Json,
    /// Pretty-printed JSON report
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Questionnaire answers
    Input,
    /// Score report
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", serde_json::to_string(&CliError::from(e)).unwrap_or_else(|_| "Unknown error".to_string()));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), MentorCliError> {
    match cli.command {
        Commands::Score {
            sleep,
            stress,
            mood,
            active,
            input,
            format,
        } => cmd_score(sleep, stress, mood, active, input.as_deref(), format),

        Commands::Interactive { force } => cmd_interactive(force),

        Commands::Questions { json } => cmd_questions(json),

        Commands::Schema { schema_type } => cmd_schema(schema_type),
    }
}

fn cmd_score(
    sleep: Option<f64>,
    stress: Option<f64>,
    mood: Option<f64>,
    active: bool,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<(), MentorCliError> {
    let response = match input {
        Some(path) => {
            let input_data = if path.to_string_lossy() == "-" {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                fs::read_to_string(path)?
            };
            serde_json::from_str::<QuestionnaireResponse>(&input_data)?
        }
        None => {
            let defaults = QuestionnaireResponse::default();
            QuestionnaireResponse::new(
                sleep.unwrap_or(defaults.sleep_hours()),
                stress.unwrap_or(defaults.stress_level()),
                mood.unwrap_or(defaults.mood_rating()),
                active,
            )?
        }
    };

    let report = ReportEncoder::new().encode(&response);

    match format {
        OutputFormat::Text => print!("{}", format_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn cmd_interactive(force: bool) -> Result<(), MentorCliError> {
    if !force && !atty::is(atty::Stream::Stdin) {
        return Err(MentorCliError::NotATerminal);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = ConsoleApp::new(stdin.lock(), stdout.lock());
    app.run()?;
    Ok(())
}

fn cmd_questions(json: bool) -> Result<(), MentorCliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&QUESTIONS)?);
        return Ok(());
    }

    println!("Questionnaire");
    println!("=============");
    for question in QUESTIONS.iter() {
        println!();
        println!("{}", question.title);
        println!("  {}", question.prompt);
        match &question.control {
            ControlKind::Slider(spec) => println!(
                "  slider: {} to {}, step {}, default {}",
                spec.min, spec.max, spec.step, spec.default
            ),
            ControlKind::Toggle { default } => {
                println!("  toggle: yes/no, default {}", if *default { "yes" } else { "no" })
            }
        }
    }

    Ok(())
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), MentorCliError> {
    match schema_type {
        SchemaType::Input => println!("{}", get_input_json_schema()),
        SchemaType::Output => println!("{}", get_output_json_schema()),
    }
    Ok(())
}

// Helper functions

fn format_text(report: &ScoreReport) -> String {
    let input = &report.input;
    let sub = &report.sub_scores;
    let result = mindful_mentor::score(input);

    let mut out = String::new();
    out.push_str(&format!(
        "Answers: sleep {}h, stress {}, mood {}, active {}\n",
        input.sleep_hours(),
        input.stress_level(),
        input.mood_rating(),
        if input.physical_activity() { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "Sub-scores: sleep {}, stress {}, mood {}, activity {} (sum {})\n\n",
        sub.sleep, sub.stress, sub.mood, sub.activity, report.raw_sum
    ));
    out.push_str(&render_score(&result));
    out
}

fn get_input_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "mindful_mentor.questionnaire_response",
        "description": "Questionnaire answers; missing fields take their defaults, out-of-range values are clamped",
        "type": "object",
        "properties": {
            "sleep_hours": { "type": "number", "minimum": 0, "maximum": 12, "default": 7 },
            "stress_level": { "type": "number", "minimum": 1, "maximum": 10, "default": 5 },
            "mood_rating": { "type": "number", "minimum": 1, "maximum": 10, "default": 5 },
            "physical_activity": { "type": "boolean", "default": false }
        }
    })
    .to_string()
}

fn get_output_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "mindful_mentor.score_report",
        "description": format!("Score report produced by {}", PRODUCER_NAME),
        "type": "object",
        "required": [
            "report_version", "producer", "computed_at_utc", "input", "sub_scores",
            "raw_sum", "total_score", "category", "title", "color", "recommendations"
        ],
        "properties": {
            "report_version": { "type": "string" },
            "producer": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "version": { "type": "string" },
                    "instance_id": { "type": "string" }
                }
            },
            "computed_at_utc": { "type": "string", "format": "date-time" },
            "input": { "type": "object" },
            "sub_scores": {
                "type": "object",
                "properties": {
                    "sleep": { "type": "integer" },
                    "stress": { "type": "integer" },
                    "mood": { "type": "integer" },
                    "activity": { "type": "integer" }
                }
            },
            "raw_sum": { "type": "integer" },
            "total_score": { "type": "integer", "minimum": 0, "maximum": 100 },
            "category": { "type": "string", "enum": ["thriving", "good_job", "lets_improve"] },
            "title": { "type": "string" },
            "color": { "type": "string", "enum": ["green", "orange", "red"] },
            "recommendations": {
                "type": "array",
                "minItems": 4,
                "maxItems": 4,
                "items": {
                    "type": "object",
                    "properties": {
                        "dimension": { "type": "string", "enum": ["sleep", "stress", "mood", "activity"] },
                        "tone": { "type": "string", "enum": ["positive", "improvement"] },
                        "text": { "type": "string" }
                    }
                }
            }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum MentorCliError {
    Io(io::Error),
    Mentor(MentorError),
    Json(serde_json::Error),
    NotATerminal,
}

impl From<io::Error> for MentorCliError {
    fn from(e: io::Error) -> Self {
        MentorCliError::Io(e)
    }
}

impl From<MentorError> for MentorCliError {
    fn from(e: MentorError) -> Self {
        MentorCliError::Mentor(e)
    }
}

impl From<serde_json::Error> for MentorCliError {
    fn from(e: serde_json::Error) -> Self {
        MentorCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<MentorCliError> for CliError {
    fn from(e: MentorCliError) -> Self {
        match e {
            MentorCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            MentorCliError::Mentor(MentorError::InputClosed) => CliError {
                code: "INPUT_CLOSED".to_string(),
                message: MentorError::InputClosed.to_string(),
                hint: Some("Answer every question before closing input".to_string()),
            },
            MentorCliError::Mentor(e) => CliError {
                code: "INVALID_INPUT".to_string(),
                message: e.to_string(),
                hint: Some("Run 'mentor schema input' for the accepted answers".to_string()),
            },
            MentorCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            MentorCliError::NotATerminal => CliError {
                code: "NOT_A_TERMINAL".to_string(),
                message: "stdin is not a terminal".to_string(),
                hint: Some("Use 'mentor score' for piped input, or pass --force".to_string()),
            },
        }
    }
}
