//! Diarist — turns a folder of journal entries into an analyzed timeline.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

mod commands;

fn print_help() {
    println!("Diarist — journal timeline analysis");
    println!();
    println!("Usage: diarist <command> [args]");
    println!();
    println!("Commands:");
    println!("  analyze <journal-dir> [out-dir]      Analyze entries, write timeline.json and timeline.md");
    println!("  stats <timeline.json>                Show statistics for a timeline");
    println!("  search <timeline.json> <term>        Find entries by keyword, summary or activity");
    println!("  filter <timeline.json> <from> <to>   Entries between two dates (YYYY-MM-DD, - for open)");
    println!("  help                                 Show this help message");
    println!();
    println!("Config is read from $DIARIST_CONFIG or .diarist.json in the journal (or current) directory.");
}

fn usage(msg: &str) -> ! {
    eprintln!("Usage: diarist {}", msg);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_help();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "analyze" => {
            if args.len() < 3 {
                usage("analyze <journal-dir> [out-dir]");
            }
            let journal_dir = PathBuf::from(&args[2]);
            let out_dir = args.get(3).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

            let config = commands::load_config(&journal_dir)?;
            let report = commands::analyze(&config, &journal_dir, &out_dir).await?;
            commands::print_analyze_report(&report);
            std::process::exit(if report.is_clean() { 0 } else { 1 });
        }
        "stats" => {
            if args.len() < 3 {
                usage("stats <timeline.json>");
            }
            let config = commands::load_config(Path::new("."))?;
            let entries = commands::load_timeline(Path::new(&args[2]))?;
            commands::print_stats(&diarist_timeline::stats(&entries, config.stats_limit));
        }
        "search" => {
            if args.len() < 4 {
                usage("search <timeline.json> <term>");
            }
            let entries = commands::load_timeline(Path::new(&args[2]))?;
            commands::print_entries(&diarist_timeline::search(&entries, &args[3]));
        }
        "filter" => {
            if args.len() < 5 {
                usage("filter <timeline.json> <from|-> <to|->");
            }
            let entries = commands::load_timeline(Path::new(&args[2]))?;
            let from = commands::parse_bound(&args[3])?;
            let to = commands::parse_bound(&args[4])?;
            commands::print_entries(&diarist_timeline::filter_by_date_range(&entries, from, to));
        }
        "--help" | "-h" | "help" => print_help(),
        other => {
            eprintln!("Unknown command: {}. Use 'diarist help' for usage.", other);
            std::process::exit(1);
        }
    }

    Ok(())
}
