//! CLI command definitions

use clap::{Parser, ValueEnum};
use protocol_domain::{DecisionRule, DocumentOptions, Locale, SummaryFormat, VoterListPolicy};
use std::path::PathBuf;

/// Document locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// Russian
    Ru,
    /// Kazakh
    Kk,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Ru => Locale::Ru,
            LocaleArg::Kk => Locale::Kk,
        }
    }
}

/// How an item's decision is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecisionRuleArg {
    /// More than 50% of the cast area, for every item
    Flat,
    /// Each item's own threshold policy
    Policy,
}

impl From<DecisionRuleArg> for DecisionRule {
    fn from(arg: DecisionRuleArg) -> Self {
        match arg {
            DecisionRuleArg::Flat => DecisionRule::FlatMajority,
            DecisionRuleArg::Policy => DecisionRule::ItemPolicy,
        }
    }
}

/// When agenda items get an itemized voter table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VoterListArg {
    /// Only items where someone left a comment
    WithComments,
    /// Every item
    Always,
    /// Never
    Never,
}

impl From<VoterListArg> for VoterListPolicy {
    fn from(arg: VoterListArg) -> Self {
        match arg {
            VoterListArg::WithComments => VoterListPolicy::WithComments,
            VoterListArg::Always => VoterListPolicy::Always,
            VoterListArg::Never => VoterListPolicy::Never,
        }
    }
}

/// Summary printed after generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryArg {
    /// Human-readable tally
    Text,
    /// JSON on stdout
    Json,
    /// Nothing
    None,
}

impl From<SummaryArg> for SummaryFormat {
    fn from(arg: SummaryArg) -> Self {
        match arg {
            SummaryArg::Text => SummaryFormat::Text,
            SummaryArg::Json => SummaryFormat::Json,
            SummaryArg::None => SummaryFormat::None,
        }
    }
}

/// CLI arguments for meeting-protocol
#[derive(Parser, Debug)]
#[command(name = "meeting-protocol")]
#[command(author, version, about = "Generate a homeowners' meeting protocol (.docx)")]
#[command(long_about = r#"
Meeting Protocol turns a finalized homeowners' meeting into a signed .docx protocol.

The process has five phases:
1. Tally: area-weighted results for every agenda item and the meeting quorum
2. Company signature: a verification QR code for the managing company
3. Voter signatures: one QR receipt per voter, rendered in parallel
4. Compose: cover, minutes, signatures and the signature registry
5. Package: the .docx container, saved as Protocol_<number>_<address>.docx

Configuration files are loaded from (in priority order):
1. --config <path>         Explicit config file
2. ./protocol.toml         Project-level config
3. ~/.config/meeting-protocol/config.toml   Global config

Example:
  meeting-protocol meeting.json
  meeting-protocol meeting.json -o protocols --locale kk
  meeting-protocol meeting.json --decision-rule policy --voter-lists always --summary json
"#)]
pub struct Cli {
    /// Meeting data as JSON (meeting, agenda_items, votes, votes_by_item)
    #[arg(value_name = "INPUT", required_unless_present = "show_config")]
    pub input: Option<PathBuf>,

    /// Directory to save the protocol to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Document locale
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Decision rule for agenda items
    #[arg(long, value_enum)]
    pub decision_rule: Option<DecisionRuleArg>,

    /// When to print per-item voter lists
    #[arg(long, value_enum)]
    pub voter_lists: Option<VoterListArg>,

    /// Summary printed after generation
    #[arg(short, long, value_enum)]
    pub summary: Option<SummaryArg>,

    /// Maximum number of QR codes rendered at once
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Overlay the document flags on configured options
    pub fn document_options(&self, base: DocumentOptions) -> DocumentOptions {
        let mut options = base;
        if let Some(locale) = self.locale {
            options = options.with_locale(locale.into());
        }
        if let Some(rule) = self.decision_rule {
            options = options.with_decision_rule(rule.into());
        }
        if let Some(policy) = self.voter_lists {
            options = options.with_voter_lists(policy.into());
        }
        options
    }

    /// Summary flag, falling back to the configured format
    pub fn summary_format(&self, configured: SummaryFormat) -> SummaryFormat {
        self.summary.map(Into::into).unwrap_or(configured)
    }
}
