//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::output::write_stats_json;
use chatlens::core::{Statistics, apply_filters, compute_statistics};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::parser::{ParseOutcome, TranscriptParser};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(verbose),
        )
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();
    let filter = args.filter_config()?;
    let loud = !args.quiet;

    if loud {
        println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input);
        println!("💾 Output:  {output_path}");
        println!("📄 Format:  {format}");
        if let Some(stats) = &args.stats {
            println!("📊 Stats:   {stats}");
        }
        println!();
    }

    let parse_start = Instant::now();
    let input = Path::new(&args.input);
    let outcome = TranscriptParser::with_config(args.parse_config()).parse(input)?;
    if outcome.is_empty() {
        return Err(ChatlensError::no_messages(Some(input.to_path_buf())));
    }
    if loud {
        println!(
            "   Parsed {} messages ({:.2}s)",
            outcome.len(),
            parse_start.elapsed().as_secs_f64()
        );
        report_date_order(&outcome);
    }

    let messages = if filter.is_active() {
        let filtered = apply_filters(&outcome.messages, &filter);
        info!(kept = filtered.len(), total = outcome.len(), "applied date filter");
        filtered
    } else {
        outcome.messages.clone()
    };

    let stats = compute_statistics(&messages, &args.stats_config());

    write_to_format(&messages, &output_path, format, &args.output_config())?;
    if let Some(stats_path) = &args.stats {
        write_stats_json(&stats, stats_path)?;
    }

    if loud {
        println!();
        println!("✅ Done! Messages saved to {output_path}");
        print_summary(&stats, outcome.dropped);
        println!();
        println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn report_date_order(outcome: &ParseOutcome) {
    let how = if outcome.used_override {
        "forced"
    } else if outcome.ambiguous {
        "inferred, ambiguous"
    } else {
        "detected"
    };
    println!("📅 Dates:   {} ({how})", outcome.resolved_format);

    if outcome.ambiguous {
        for metrics in &outcome.candidate_metrics {
            println!(
                "   {}: {} decreases, span {}s, {} valid",
                metrics.format, metrics.decreases, metrics.span_seconds, metrics.valid
            );
        }
        warn!("date order could not be proven; pass --date-format to override");
    }
}

fn print_summary(stats: &Statistics, dropped: usize) {
    println!();
    println!("📊 Summary:");
    println!("   Messages:      {}", stats.total_messages);
    println!("   Words:         {}", stats.total_words);
    println!("   Media:         {}", stats.media_messages);
    println!("   System:        {}", stats.system_messages);
    if dropped > 0 {
        println!("   Dropped:       {dropped} (impossible dates)");
    }
    println!("   Participants:  {}", stats.participants.join(", "));

    if let Some(day) = stats.busiest_day {
        println!("   Busiest day:   {} ({} messages)", day.date, day.messages);
    }
    if let Some(hour) = stats.busiest_hour {
        println!("   Busiest hour:  {:02}:00 ({} messages)", hour.hour, hour.messages);
    }
    if let Some(streak) = stats.longest_streak {
        println!(
            "   Longest streak: {} days ({} to {})",
            streak.days, streak.start, streak.end
        );
    }
    if let Some(avg) = stats.overall_response.average_minutes {
        println!(
            "   Reply time:    {avg:.2} min average over {} replies",
            stats.overall_response.samples
        );
    }
}
