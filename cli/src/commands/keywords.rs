//! KEYWORDS command - Extract ranked keywords.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use zoomnote_core::ScriptClass;
use zoomnote_engine::{DEFAULT_MAX_KEYWORDS, classify, extract_keywords_for};

use super::{HumanReadable, output, read_input};

/// Arguments for the keywords command.
#[derive(Args)]
pub struct KeywordsArgs {
    /// Note file to read ("-" for stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Maximum keywords to return (capped at 6)
    #[arg(short = 'n', long = "max", default_value_t = DEFAULT_MAX_KEYWORDS)]
    pub max: usize,
}

/// Result of the keywords command.
#[derive(Debug, Serialize)]
pub struct KeywordsOutput {
    pub script: ScriptClass,
    pub keywords: Vec<String>,
}

impl HumanReadable for KeywordsOutput {
    fn print_human(&self) {
        if self.keywords.is_empty() {
            println!("  {}", "(No keywords)".dimmed());
            return;
        }

        for (i, keyword) in self.keywords.iter().enumerate() {
            println!("{} {}", format!("{:>2}.", i + 1).cyan(), keyword);
        }
    }
}

/// Builds the keywords output for `text`.
pub fn run(text: &str, max: usize) -> KeywordsOutput {
    let script = classify(text);
    KeywordsOutput {
        script,
        keywords: extract_keywords_for(text, script, max),
    }
}

/// Execute the keywords command.
pub fn execute(human: bool, args: KeywordsArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    output(&run(&text, args.max), human)
}
