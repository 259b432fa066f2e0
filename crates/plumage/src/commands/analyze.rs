//! Analyze command — report generation from a timeline file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use plumage_core::config::Config;
use plumage_core::timeline::Post;

use super::{build_analyzer, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Timeline file to analyze (JSON array of posts, newest first).
    pub file: Utf8PathBuf,
}

/// Analyze a timeline file and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let posts: Vec<Post> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a valid timeline", args.file))?;

    let analyzer = build_analyzer(config)?;
    let report = analyzer
        .generate_report(&posts)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — headline numbers, then the rankings
    println!(
        "{} (@{})",
        report.profile.name.bold(),
        report.profile.handle
    );
    println!(
        "  {} {} followers, {} following, joined {}",
        "Profile:".cyan(),
        report.profile.followers,
        report.profile.following,
        report.profile.year_joined,
    );
    println!(
        "  {} {} posts across {} active months",
        "Activity:".cyan(),
        posts.len(),
        report.posts_per_month.len(),
    );
    println!(
        "  {} length {} chars, sentiment {:+.2}, {:.1} entities/post",
        "Averages:".cyan(),
        report.avg_post_length,
        report.avg_sentiment,
        report.avg_entities_per_post,
    );
    match report.reading_grade_level {
        Some(grade) => println!("  {} grade {}", "Readability:".cyan(), grade),
        None => println!("  {} not enough prose to score", "Readability:".cyan()),
    }

    print_ranking("Hashtags", &report.top_hashtags);
    print_ranking("Mentions", &report.top_mentions);
    print_ranking("Reshared", &report.top_reshared);
    print_ranking("Words", &report.top_words);

    Ok(())
}

fn print_ranking(label: &str, series: &[plumage_core::graph::TermSeries]) {
    if series.is_empty() {
        return;
    }
    let terms: Vec<String> = series
        .iter()
        .map(|s| format!("{} ({})", s.term, s.points.len()))
        .collect();
    println!("  {} {}", format!("{label}:").cyan(), terms.join(", "));
}
