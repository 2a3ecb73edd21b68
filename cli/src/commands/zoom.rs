//! ZOOM command - Show one zoom level of a note.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use zoomnote_core::{ScriptClass, ZoomLevel};
use zoomnote_engine::{DEFAULT_MAX_KEYWORDS, classify, resolve};

use super::{HumanReadable, output, read_input};

/// Arguments for the zoom command.
#[derive(Args)]
pub struct ZoomArgs {
    /// Zoom level: keywords, line, brief, full (or 1-4)
    pub level: ZoomLevel,

    /// Note file to read ("-" for stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Maximum keywords for the keywords level
    #[arg(short = 'k', long, default_value_t = DEFAULT_MAX_KEYWORDS)]
    pub max_keywords: usize,
}

/// Result of the zoom command.
#[derive(Debug, Serialize)]
pub struct ZoomOutput {
    pub level: ZoomLevel,
    pub script: ScriptClass,
    pub output: String,
}

impl HumanReadable for ZoomOutput {
    fn print_human(&self) {
        println!(
            "{} {}",
            format!("[{}]", self.level).cyan().bold(),
            format!("({})", self.script).dimmed()
        );
        println!("{}", self.output);

        let neighbors: Vec<String> = [
            ("less", self.level.zoom_out()),
            ("more", self.level.zoom_in()),
        ]
        .into_iter()
        .filter_map(|(label, level)| level.map(|l| format!("{label}: {l}")))
        .collect();
        println!("{}", format!("({})", neighbors.join(", ")).dimmed());
    }
}

/// Builds the zoom output for `text`.
pub fn run(text: &str, level: ZoomLevel, max_keywords: usize) -> ZoomOutput {
    ZoomOutput {
        level,
        script: classify(text),
        output: resolve(text, level, max_keywords),
    }
}

/// Execute the zoom command.
pub fn execute(human: bool, args: ZoomArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    tracing::debug!(level = %args.level, chars = text.chars().count(), "resolving zoom level");
    output(&run(&text, args.level, args.max_keywords), human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_line() {
        let text = "Maria storms into the room. She slams the door and breaks down in tears. After a long silence, she decides to call her mother.";
        let out = run(text, ZoomLevel::Line, 5);
        assert_eq!(out.output, "After a long silence, she decides to call her mother.");
        assert_eq!(out.script, ScriptClass::Other);
    }

    #[test]
    fn zoom_output_serializes_lowercase() {
        let out = run("", ZoomLevel::Keywords, 5);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["level"], "keywords");
        assert_eq!(json["output"], "No keywords yet");
    }
}
