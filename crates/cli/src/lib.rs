use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use lnu_bridge::{Bridge, BridgeError, Mode};
use lnu_protocol::{
    serialize_json, ConceptResult, ErrorEnvelope, LookupResult, Outcome, SentenceAnalysis,
};

const LEXICON_ENV: &str = "LNU_LEXICON";
const RULES_ENV: &str = "LNU_RULES";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "lnu")]
#[command(about = "Mi'kmaw word lookup and concept-candidate bridge", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Lexicon file (JSON or TOML); overrides LNU_LEXICON
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Concept rule file (JSON or TOML); overrides LNU_RULES
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a Mi'kmaw word (lexical mode)
    Lookup(LookupArgs),

    /// Propose candidate words for a concept (concept mode)
    Concept(ConceptArgs),

    /// Dispatch by mode name, as the rendering layer does
    Process(ProcessArgs),

    /// Find an entry by its English gloss
    Gloss(LookupArgs),

    /// Explain every word of a Mi'kmaw sentence
    Sentence(SentenceArgs),

    /// List entries whose analysis still needs review
    Review,

    /// Print JSON Schemas of the result shapes
    Schema,
}

#[derive(Args)]
struct LookupArgs {
    /// Word or phrase, as typed
    query: String,
}

#[derive(Args)]
struct ConceptArgs {
    /// Free-text concept description
    concept: String,

    /// What the thing is for
    #[arg(long, default_value = "")]
    purpose: String,
}

#[derive(Args)]
struct ProcessArgs {
    /// lexical | concept
    #[arg(long)]
    mode: String,

    query: String,

    #[arg(long, default_value = "")]
    purpose: String,
}

#[derive(Args)]
struct SentenceArgs {
    sentence: String,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(output) => print_stdout(&output),
        Err(err) => {
            let envelope = classify_error(&err);
            log::debug!("command failed: {err:#}");
            print_stdout(&serialize_json(&envelope, cli.pretty)?)?;
            std::process::exit(1);
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn data_path(flag: Option<&PathBuf>, env_key: &str) -> Option<PathBuf> {
    flag.cloned().or_else(|| {
        env::var_os(env_key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

fn load_bridge(cli: &Cli) -> Result<Bridge> {
    let lexicon = data_path(cli.lexicon.as_ref(), LEXICON_ENV);
    let rules = data_path(cli.rules.as_ref(), RULES_ENV);
    Bridge::load(lexicon.as_deref(), rules.as_deref()).context("Failed to load lexicon data")
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Lookup(args) => {
            let outcome = load_bridge(cli)?.process(Mode::Lexical, &args.query, "")?;
            serialize_json(&outcome, cli.pretty)
        }
        Commands::Concept(args) => {
            let outcome =
                load_bridge(cli)?.process(Mode::Concept, &args.concept, &args.purpose)?;
            serialize_json(&outcome, cli.pretty)
        }
        Commands::Process(args) => {
            let outcome =
                load_bridge(cli)?.process_raw(&args.mode, &args.query, &args.purpose)?;
            serialize_json(&outcome, cli.pretty)
        }
        Commands::Gloss(args) => {
            serialize_json(&load_bridge(cli)?.explain_gloss(&args.query)?, cli.pretty)
        }
        Commands::Sentence(args) => {
            serialize_json(&load_bridge(cli)?.explain_sentence(&args.sentence)?, cli.pretty)
        }
        Commands::Review => serialize_json(&load_bridge(cli)?.review_queue(), cli.pretty),
        Commands::Schema => serialize_json(&schemas()?, cli.pretty),
    }
}

fn schemas() -> Result<serde_json::Value> {
    Ok(serde_json::json!({
        "outcome": serde_json::to_value(schemars::schema_for!(Outcome))?,
        "lookup_result": serde_json::to_value(schemars::schema_for!(LookupResult))?,
        "concept_result": serde_json::to_value(schemars::schema_for!(ConceptResult))?,
        "sentence_analysis": serde_json::to_value(schemars::schema_for!(SentenceAnalysis))?,
        "error": serde_json::to_value(schemars::schema_for!(ErrorEnvelope))?,
    }))
}

fn classify_error(err: &anyhow::Error) -> ErrorEnvelope {
    match err.downcast_ref::<BridgeError>() {
        Some(bridge_err) => ErrorEnvelope {
            code: bridge_err.code().to_string(),
            message: format!("{err:#}"),
            hint: bridge_err.hint().map(str::to_string),
        },
        None => ErrorEnvelope {
            code: "internal".to_string(),
            message: format!("{err:#}"),
            hint: None,
        },
    }
}
