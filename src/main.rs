//! HarmonyMap CLI — query the chord graph, progression search and melody search.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use harmonymap::analysis::Style;
use harmonymap::api::{MelodyRequest, ProgressionRequest};
use harmonymap::graph::ChordGraph;
use harmonymap::melody::ScaleType;
use harmonymap::{HarmonyConfig, HarmonyEngine};

#[derive(Parser)]
#[command(name = "harmonymap", version)]
#[command(about = "Chord-progression and melodic path search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ~/.harmonymap/config.yaml if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
}

#[derive(Subcommand)]
enum Command {
    /// Print the chord graph
    Graph,
    /// Find a chord progression between two chords
    Progression {
        /// Start chord, e.g. C
        start: String,
        /// End chord, e.g. G
        end: String,

        /// Number of chords in the progression
        #[arg(short, long)]
        length: Option<usize>,

        /// Add voicings, tension curve and difficulty
        #[arg(long)]
        analyze: bool,

        /// Style used for difficulty rating
        #[arg(long, default_value = "pop")]
        style: String,
    },
    /// Find a melodic path between two notes
    Melody {
        /// Start note, e.g. C
        start: String,
        /// End note, e.g. G
        end: String,

        /// Scale: major, minor, dorian or mixolydian
        #[arg(short, long)]
        scale: Option<String>,

        /// Add phrasing, ornaments and scale character
        #[arg(long)]
        analyze: bool,

        /// Style used for ornament suggestions
        #[arg(long, default_value = "pop")]
        style: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

/// A result plus optional analysis, serialised side by side.
#[derive(Serialize)]
struct Report<R: Serialize, A: Serialize> {
    #[serde(flatten)]
    result: R,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<A>,
}

fn load_config(path: Option<&PathBuf>) -> Result<HarmonyConfig> {
    match path {
        Some(path) => HarmonyConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(HarmonyConfig::load().unwrap_or_default()),
    }
}

/// RUST_LOG first, then the config's `log_filter`, then `warn`.
fn init_logging(config: &HarmonyConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter.as_deref().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T: Serialize>(format: Format, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    let out = match format {
        Format::Text => text(),
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", out.trim_end());
    Ok(())
}

fn graph_text(graph: &ChordGraph) -> String {
    let mut out = String::from("chords:\n");
    for node in graph.nodes() {
        out.push_str(&format!(
            "  {:<5} {:<14} {}\n",
            node.id, node.display_name, node.function_label
        ));
    }
    out.push_str("transitions:\n");
    for edge in graph.edges() {
        out.push_str(&format!("  {} -> {} ({})\n", edge.from, edge.to, edge.weight));
    }
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_logging(&config);
    let engine = HarmonyEngine::new(config);

    match cli.command {
        Command::Graph => {
            let graph = engine.graph();
            emit(cli.format, &graph, || graph_text(&graph))?;
        }
        Command::Progression {
            start,
            end,
            length,
            analyze,
            style,
        } => {
            let mut req = ProgressionRequest::new(start, end);
            req.length = length;
            let resp = engine.progression(&req)?;
            let analysis =
                analyze.then(|| engine.analyze_progression(&resp.path, Style::from_name(&style)));

            let mut text = format!("{}\n{}", resp.path.join(" -> "), resp.roman.join(" -> "));
            if let Some(a) = &analysis {
                let voicings: Vec<String> = a
                    .voicings
                    .iter()
                    .map(|v| format!("{}: {}", v.chord, v.notes.join(" ")))
                    .collect();
                text.push_str(&format!(
                    "\nvoicings: {}\ntension: {:?} (peak {}, avg {:.2})\ndifficulty: {}/10",
                    voicings.join(", "),
                    a.tension.curve,
                    a.tension.peak,
                    a.tension.average,
                    a.difficulty
                ));
            }
            emit(cli.format, &Report { result: resp, analysis }, || text)?;
        }
        Command::Melody {
            start,
            end,
            scale,
            analyze,
            style,
        } => {
            let mut req = MelodyRequest::new(start, end);
            req.scale_type = scale;
            let resp = engine.melody(&req);
            let analysis = analyze.then(|| {
                engine.analyze_melody(
                    &resp.path,
                    ScaleType::from_name(&resp.meta.scale_type),
                    Style::from_name(&style),
                )
            });

            let mut text = format!("{}  ({})", resp.path.join(" -> "), resp.meta.scale_type);
            if let Some(a) = &analysis {
                let phrases: Vec<String> = a.phrasing.iter().map(|p| p.join(" ")).collect();
                text.push_str(&format!(
                    "\nphrases: {}\nornaments: {}\nmood: {}",
                    phrases.join(" | "),
                    a.ornamentations.len(),
                    a.scale_profile.mood
                ));
            }
            emit(cli.format, &Report { result: resp, analysis }, || text)?;
        }
    }

    Ok(())
}
