//! unblank CLI - find and remove blank pages from DOCX files

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use unblank::{CleanOptions, CleanReport, EmptyRegion, Outcome, ScanOptions, ScanPolicy, Selection};

#[derive(Parser)]
#[command(name = "unblank")]
#[command(version)]
#[command(about = "Find and remove blank pages from DOCX documents", long_about = None)]
struct Cli {
    /// Input DOCX file (same as `unblank clean <FILE>`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan for empty page regions without modifying the file
    Scan {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Minimum consecutive empty paragraphs (threshold policy)
        #[arg(short, long, default_value_t = unblank::DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Detection policy
        #[arg(long, value_enum, default_value = "threshold")]
        policy: PolicyArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect empty page regions and delete the ones you accept
    Clean {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Minimum consecutive empty paragraphs (threshold policy)
        #[arg(short, long, default_value_t = unblank::DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Detection policy
        #[arg(long, value_enum, default_value = "threshold")]
        policy: PolicyArg,

        /// Delete every detected region without prompting
        #[arg(short = 'y', long)]
        yes: bool,

        /// Skip the backup copy
        #[arg(long)]
        no_backup: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Runs of consecutive empty paragraphs
    Threshold,
    /// Break-delimited pages with no text
    Paged,
}

impl From<PolicyArg> for ScanPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Threshold => ScanPolicy::Threshold,
            PolicyArg::Paged => ScanPolicy::Paged,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Scan {
            input,
            threshold,
            policy,
            json,
        }) => cmd_scan(&input, threshold, policy, json),
        Some(Commands::Clean {
            input,
            threshold,
            policy,
            yes,
            no_backup,
        }) => cmd_clean(&input, threshold, policy, yes, no_backup),
        None => {
            // Default behavior: interactive clean if input is provided
            if let Some(input) = cli.input {
                cmd_clean(
                    &input,
                    unblank::DEFAULT_THRESHOLD,
                    PolicyArg::Threshold,
                    false,
                    false,
                )
            } else {
                println!("{}", "Usage: unblank <FILE>".yellow());
                println!("       unblank --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn scan_options(policy: PolicyArg, threshold: usize) -> ScanOptions {
    ScanOptions::new()
        .with_policy(policy.into())
        .with_threshold(threshold)
}

fn cmd_scan(
    input: &std::path::Path,
    threshold: usize,
    policy: PolicyArg,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = scan_options(policy, threshold);

    if json {
        let report = unblank::scan_file(input, &options)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Scanning {}...", input.display()));
    pb.enable_steady_tick(Duration::from_millis(80));
    let report = unblank::scan_file(input, &options);
    pb.finish_and_clear();
    let report = report?;

    println!(
        "{} ({} body elements)",
        input.display().to_string().bold(),
        report.body_elements
    );
    if report.is_clean() {
        println!("{}", "No empty page regions found.".green());
    } else {
        print_regions(&report.regions);
        println!("\nRun {} to delete them.", "unblank clean".cyan());
    }
    Ok(())
}

fn cmd_clean(
    input: &std::path::Path,
    threshold: usize,
    policy: PolicyArg,
    yes: bool,
    no_backup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = CleanOptions::new()
        .with_scan_options(scan_options(policy, threshold))
        .with_backup(!no_backup);

    let mut cancelled = false;
    let report = unblank::select_with(input, &options, |regions| {
        print_regions(regions);
        println!();
        if yes {
            // --yes is the explicit accept-all confirmation, supplied up front
            return Selection::All;
        }
        match prompt_selection(regions) {
            Some(selection) => selection,
            None => {
                cancelled = true;
                Selection::None
            }
        }
    })?;

    print_outcome(&report, cancelled);
    Ok(())
}

/// Ask the operator what to do with the detected regions.
///
/// Returns `None` for cancel: an escaped prompt, a prompt failure, or a
/// missing confirmation token all mean "touch nothing".
fn prompt_selection(regions: &[EmptyRegion]) -> Option<Selection> {
    let theme = ColorfulTheme::default();

    let choice = Select::with_theme(&theme)
        .with_prompt("What should happen to these regions?")
        .items(&["Delete all", "Choose region by region", "Cancel"])
        .default(2)
        .interact_opt()
        .ok()??;

    match choice {
        0 => {
            let token: String = Input::with_theme(&theme)
                .with_prompt(format!(
                    "Delete all {} region(s)? Type 'yes' to confirm",
                    regions.len()
                ))
                .allow_empty(true)
                .interact_text()
                .ok()?;
            if token.trim().eq_ignore_ascii_case("yes") {
                Some(Selection::All)
            } else {
                None
            }
        }
        1 => {
            let mut ordinals = HashSet::new();
            for region in regions {
                let accept = Confirm::with_theme(&theme)
                    .with_prompt(format!(
                        "Delete region {} ({} empty elements)?",
                        region.ordinal,
                        region.len()
                    ))
                    .default(false)
                    .interact()
                    .ok()?;
                if accept {
                    ordinals.insert(region.ordinal);
                }
            }
            Some(Selection::Ordinals(ordinals))
        }
        _ => None,
    }
}

fn print_regions(regions: &[EmptyRegion]) {
    println!(
        "{}",
        format!("Found {} empty region(s):", regions.len())
            .yellow()
            .bold()
    );
    for region in regions {
        println!(
            "  {}. {}: {} elements (indices {}-{})",
            region.ordinal,
            region.kind,
            region.len(),
            region.start_index(),
            region.end_index()
        );
    }
}

fn print_outcome(report: &CleanReport, cancelled: bool) {
    match &report.outcome {
        Outcome::Clean => {
            println!("{}", "No empty page regions found.".green());
        }
        Outcome::Declined => {
            if cancelled {
                println!("{}", "Operation cancelled; file left untouched.".yellow());
            } else {
                println!(
                    "{}",
                    "No regions selected for deletion; file left untouched.".yellow()
                );
            }
        }
        Outcome::Removed { regions, elements } => {
            println!(
                "{}",
                format!("Removed {elements} empty element(s) in {regions} region(s).")
                    .green()
                    .bold()
            );
            if let Some(backup) = &report.backup {
                println!("Backup written to {}", backup.display().to_string().cyan());
            }
            println!("Saved {}", report.path.display());
        }
    }
}
