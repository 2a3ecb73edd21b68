//! BEATS command - Segment a note into story beats.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use zoomnote_core::Beat;
use zoomnote_engine::segment_beats;

use super::{HumanReadable, output, read_input};

/// Arguments for the beats command.
#[derive(Args)]
pub struct BeatsArgs {
    /// Note file to read ("-" for stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,
}

/// Result of the beats command.
#[derive(Debug, Serialize)]
pub struct BeatsOutput {
    pub beats: Vec<Beat>,
}

impl HumanReadable for BeatsOutput {
    fn print_human(&self) {
        if self.beats.is_empty() {
            println!("  {}", "(No beats)".dimmed());
            return;
        }

        for (i, beat) in self.beats.iter().enumerate() {
            println!("{} {}", format!("{:>2}.", i + 1).cyan(), beat);
        }
    }
}

/// Execute the beats command.
pub fn execute(human: bool, args: BeatsArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    let beats = segment_beats(&text);
    tracing::debug!(count = beats.len(), "segmented beats");
    output(&BeatsOutput { beats }, human)
}
