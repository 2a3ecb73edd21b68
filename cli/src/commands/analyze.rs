//! ANALYZE command - Show every zoom level plus keywords, hashtags and beats.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use zoomnote_core::{Beat, ContentKey, ScriptClass, ZoomLevel};
use zoomnote_engine::{DEFAULT_MAX_KEYWORDS, analyze};

use super::{HumanReadable, output, read_input, truncate};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Note file to read ("-" for stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Maximum keywords to extract
    #[arg(short = 'k', long, default_value_t = DEFAULT_MAX_KEYWORDS)]
    pub max_keywords: usize,

    /// Most detailed view to include (keywords, line, brief, full)
    #[arg(long, default_value_t = ZoomLevel::Full)]
    pub up_to: ZoomLevel,
}

/// One zoom view.
#[derive(Debug, Serialize)]
pub struct View {
    pub level: ZoomLevel,
    pub output: String,
}

/// Result of the analyze command.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub content_key: String,
    pub script: ScriptClass,
    pub sentence_count: usize,
    pub keywords: Vec<String>,
    pub hashtags: Vec<String>,
    pub beats: Vec<Beat>,
    pub views: Vec<View>,
}

impl HumanReadable for AnalyzeOutput {
    fn print_human(&self) {
        println!("{}", "Note Analysis".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        println!("  {} {}", "Script:".cyan(), self.script);
        println!("  {} {}", "Sentences:".cyan(), self.sentence_count);
        println!("  {} {}", "Content Key:".cyan(), truncate(&self.content_key, 19));
        if !self.hashtags.is_empty() {
            let tags: Vec<String> = self.hashtags.iter().map(|t| format!("#{t}")).collect();
            println!("  {} {}", "Hashtags:".cyan(), tags.join(" "));
        }
        println!();

        for view in &self.views {
            if view.level == ZoomLevel::Full {
                continue;
            }
            println!("{}", format!("[{}]", view.level).yellow());
            println!("  {}", view.output);
        }

        println!();
        println!("{} ({})", "Beats".yellow(), self.beats.len());
        for (i, beat) in self.beats.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, beat);
        }
    }
}

/// Builds the analysis output for `text`, keeping the views `up_to` reveals.
pub fn run(text: &str, max_keywords: usize, up_to: ZoomLevel) -> AnalyzeOutput {
    let analysis = analyze(text, max_keywords);

    AnalyzeOutput {
        content_key: ContentKey::of(text).to_hex(),
        script: analysis.script,
        sentence_count: analysis.sentence_count,
        keywords: analysis.keywords,
        hashtags: analysis.hashtags,
        beats: analysis.beats,
        views: analysis
            .views
            .into_iter()
            .filter(|(level, _)| up_to.reveals(*level))
            .map(|(level, output)| View { level, output })
            .collect(),
    }
}

/// Execute the analyze command.
pub fn execute(human: bool, args: AnalyzeArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    output(&run(&text, args.max_keywords, args.up_to), human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_has_four_views() {
        let out = run("Rehearsal notes #subtext #timing", 5, ZoomLevel::Full);
        assert_eq!(out.views.len(), 4);
        assert_eq!(out.views[3].output, "Rehearsal notes #subtext #timing");
        assert_eq!(out.hashtags, vec!["subtext", "timing"]);
        assert_eq!(out.content_key.len(), 64);
    }

    #[test]
    fn up_to_limits_views() {
        let out = run("Rehearsal notes #subtext #timing", 5, ZoomLevel::Line);
        let levels: Vec<ZoomLevel> = out.views.iter().map(|v| v.level).collect();
        assert_eq!(levels, vec![ZoomLevel::Keywords, ZoomLevel::Line]);
    }
}
