//! TAGS command - List literal hashtags and suggested tags.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use zoomnote_engine::{extract_hashtags, suggest_tags};

use super::{HumanReadable, output, read_input};

/// Arguments for the tags command.
#[derive(Args)]
pub struct TagsArgs {
    /// Note file to read ("-" for stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,
}

/// Result of the tags command.
#[derive(Debug, Serialize)]
pub struct TagsOutput {
    /// Hashtags written in the note, without `#`.
    pub hashtags: Vec<String>,
    /// Suggested `#`-prefixed tags.
    pub suggested: Vec<String>,
}

impl HumanReadable for TagsOutput {
    fn print_human(&self) {
        println!("{}", "Hashtags".green().bold());
        if self.hashtags.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for tag in &self.hashtags {
            println!("  #{tag}");
        }

        println!("{}", "Suggested".green().bold());
        println!("  {}", self.suggested.join(" "));
    }
}

/// Builds the tags output for `text`.
pub fn run(text: &str) -> TagsOutput {
    TagsOutput {
        hashtags: extract_hashtags(text),
        suggested: suggest_tags(text).tags,
    }
}

/// Execute the tags command.
pub fn execute(human: bool, args: TagsArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    output(&run(&text), human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_output() {
        let out = run("Rehearsal notes #subtext #timing");
        assert_eq!(out.hashtags, vec!["subtext", "timing"]);
        assert_eq!(out.suggested[0], "#subtext");
    }
}
