//! ENHANCE command - Title, summary, tags or keywords via the remote model,
//! falling back to local heuristics.
//!
//! Configuration via environment:
//! - ZOOMNOTE_API_KEY: API key (unset means offline)
//! - ZOOMNOTE_API_URL: Chat-completions endpoint
//! - ZOOMNOTE_MODEL: Model name
//!
//! The remote call is bounded by the fixed 12 second request timeout.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use zoomnote_engine::DEFAULT_MAX_KEYWORDS;
use zoomnote_enhance::{
    CancellationToken, EnhanceConfig, EnhanceError, Enhanced, Enhancer, Source,
};

use super::{HumanReadable, output, read_input};

/// Enhancement feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureArg {
    Title,
    Summary,
    Tags,
    Keywords,
}

/// Arguments for the enhance command.
#[derive(Args)]
pub struct EnhanceArgs {
    /// Feature to run
    #[arg(value_enum)]
    pub feature: FeatureArg,

    /// Note file to read ("-" for stdin)
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Maximum keywords for the keywords feature
    #[arg(short = 'k', long, default_value_t = DEFAULT_MAX_KEYWORDS)]
    pub max_keywords: usize,

    /// Skip the remote model even if a key is configured
    #[arg(long)]
    pub offline: bool,
}

/// Why the remote result was not used.
#[derive(Debug, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
}

/// Result of the enhance command.
#[derive(Debug, Serialize)]
pub struct EnhanceOutput {
    pub feature: FeatureArg,
    pub result: serde_json::Value,
    pub source: Source,
    pub diagnostic: Option<Diagnostic>,
}

impl EnhanceOutput {
    fn from_enhanced<T: Serialize>(feature: FeatureArg, enhanced: Enhanced<T>) -> Result<Self> {
        Ok(Self {
            feature,
            result: serde_json::to_value(&enhanced.value)?,
            source: enhanced.source,
            diagnostic: enhanced
                .diagnostic
                .as_ref()
                .map(|e: &EnhanceError| Diagnostic {
                    code: e.code().to_string(),
                    message: e.to_string(),
                }),
        })
    }
}

impl HumanReadable for EnhanceOutput {
    fn print_human(&self) {
        let source = match self.source {
            Source::Remote => "remote".green(),
            Source::Local => "local".yellow(),
        };
        println!(
            "{} {}",
            format!("{:?}", self.feature).cyan().bold(),
            format!("({source})").dimmed()
        );

        if let Some(object) = self.result.as_object() {
            for (field, value) in object {
                match value {
                    serde_json::Value::String(s) => {
                        println!("  {} {}", format!("{field}:").cyan(), s)
                    }
                    serde_json::Value::Array(items) => {
                        println!("  {}", format!("{field}:").cyan());
                        for item in items {
                            println!("    - {}", item.as_str().unwrap_or_default());
                        }
                    }
                    other => println!("  {} {}", format!("{field}:").cyan(), other),
                }
            }
        }

        if let Some(diagnostic) = &self.diagnostic {
            println!();
            println!("  {} {}", "Note:".dimmed(), diagnostic.message.dimmed());
        }
    }
}

async fn run(
    enhancer: &Enhancer,
    feature: FeatureArg,
    text: &str,
    max_keywords: usize,
) -> Result<EnhanceOutput> {
    match feature {
        FeatureArg::Title => {
            EnhanceOutput::from_enhanced(feature, enhancer.suggest_title(text).await)
        }
        FeatureArg::Summary => {
            EnhanceOutput::from_enhanced(feature, enhancer.summarize(text).await)
        }
        FeatureArg::Tags => {
            EnhanceOutput::from_enhanced(feature, enhancer.suggest_tags(text).await)
        }
        FeatureArg::Keywords => EnhanceOutput::from_enhanced(
            feature,
            enhancer.extract_keywords(text, max_keywords).await,
        ),
    }
}

/// Execute the enhance command. Ctrl+C cancels a pending remote call.
pub async fn execute(human: bool, args: EnhanceArgs) -> Result<()> {
    let text = read_input(&args.file)?;

    let enhancer = if args.offline {
        Enhancer::offline()
    } else {
        Enhancer::from_config(&EnhanceConfig::from_env()?)
    };

    let token = CancellationToken::new();
    let interrupt = tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        }
    });

    let result = token
        .run_until_cancelled(run(&enhancer, args.feature, &text, args.max_keywords))
        .await;
    interrupt.abort();

    let out = result.ok_or_else(|| anyhow!("cancelled"))??;
    output(&out, human)
}
