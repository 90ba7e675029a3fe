use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use chore_bro::chore::{Chore, Difficulty, Frequency, Priority, Season, Status, TimeOfDay};
use chore_bro::filter::{filter_chores, ChoreFilter};
use chore_bro::rank::rank_chores;
use chore_bro::scoring::{calculate_points, ScoreFactors};
use chore_bro::store::{ChoreStore, NewChore};

const EXIT_SUCCESS: i32 = 0;
const EXIT_STORE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List chores ranked by priority and due date (default if no subcommand)
    List {
        /// Filter by exact category (case-sensitive)
        #[arg(long)]
        category: Option<String>,

        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<Status>,

        /// Case-insensitive search over title, category, and notes
        #[arg(long)]
        search: Option<String>,

        /// Include completed and skipped chores too
        #[arg(long)]
        all: bool,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Add a chore (points are computed now and stored for good)
    Add {
        /// Chore title
        title: String,

        /// Category label, e.g. Kitchen, Outdoor
        #[arg(long)]
        category: String,

        #[arg(long, value_enum, default_value = "once")]
        frequency: Frequency,

        #[arg(long, value_enum, default_value = "easy")]
        difficulty: Difficulty,

        #[arg(long, value_enum, default_value = "medium")]
        priority: Priority,

        #[arg(long = "time", value_enum, default_value = "afternoon")]
        time_of_day: TimeOfDay,

        #[arg(long = "season", value_enum, default_value = "none")]
        seasonal_schedule: Season,

        /// Who the chore is assigned to
        #[arg(long)]
        assignee: Option<String>,

        /// Tools needed, e.g. "ladder, gloves"
        #[arg(long)]
        tools: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<chrono::NaiveDate>,
    },
    /// Mark a chore completed by its index number (1-based, as shown in list)
    Complete { index: usize },
    /// Mark a chore skipped by its index number
    Skip { index: usize },
    /// Postpone a chore by its index number
    Postpone {
        index: usize,

        /// Push the due date forward by this much, e.g. "2days" (rounds up
        /// to whole days)
        #[arg(long)]
        by: Option<String>,
    },
    /// Remove a chore permanently by its index number
    Remove { index: usize },
    /// Show point progress for today, this week, and this month
    Progress,
    /// Show achievement badges
    Achievements,
}

#[derive(Parser, Debug)]
#[command(name = "chore-bro")]
#[command(about = "Household chore prioritization CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/chore-bro/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to chore store (defaults to ~/.config/chore-bro/chores.json)
    #[arg(short, long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// The ranked open-chore list every index-taking command addresses into.
/// Must match what a bare `chore-bro list` prints.
fn ranked_open_chores(store: &ChoreStore) -> Vec<Chore> {
    let open: Vec<Chore> = store
        .chores
        .iter()
        .filter(|chore| chore.status.is_open())
        .cloned()
        .collect();
    rank_chores(open)
}

/// Resolve a 1-based list index to a chore id, or exit with a usage error.
fn resolve_index(store: &ChoreStore, index: usize) -> u64 {
    let ranked = ranked_open_chores(store);
    if index < 1 || index > ranked.len() {
        eprintln!(
            "Invalid index {}. Must be between 1 and {}.",
            index,
            ranked.len()
        );
        std::process::exit(EXIT_CONFIG);
    }
    ranked[index - 1].id
}

fn save_or_exit(path: &std::path::Path, store: &ChoreStore) {
    if let Err(e) = chore_bro::store::save_store(path, store) {
        eprintln!("Failed to save chore store: {}", e);
        std::process::exit(EXIT_STORE);
    }
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List {
        category: None,
        status: None,
        search: None,
        all: false,
        tsv: false,
    });
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match chore_bro::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = chore_bro::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Store path: CLI flag beats config, config beats default
    let store_path = cli
        .store
        .map(PathBuf::from)
        .or_else(|| config.store.clone())
        .unwrap_or_else(chore_bro::store::get_store_path);

    let mut store = match chore_bro::store::load_store(&store_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Store error: {}", e);
            std::process::exit(EXIT_STORE);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} chores from {}",
            store.chores.len(),
            store_path.display()
        );
    }

    let use_colors = chore_bro::output::should_use_colors();
    let today = chrono::Local::now().date_naive();
    let now = chrono::Utc::now();

    match command {
        Commands::List {
            category,
            status,
            search,
            all,
            tsv,
        } => {
            let filter = ChoreFilter {
                category,
                status,
                search,
            };

            let mut chores = store.chores.clone();
            // Default view is open chores; an explicit status filter or
            // --all widens it.
            if !all && filter.status.is_none() {
                chores.retain(|chore| chore.status.is_open());
            }

            let chores = filter_chores(chores, &filter);
            let ranked = rank_chores(chores);

            if cli.verbose {
                eprintln!("After filter: {} chores", ranked.len());
            }

            if tsv {
                let out = chore_bro::output::format_tsv(&ranked);
                if !out.is_empty() {
                    println!("{}", out);
                }
            } else if cli.verbose && !ranked.is_empty() {
                for chore in &ranked {
                    println!(
                        "{}",
                        chore_bro::output::format_chore_detail(chore, today, use_colors)
                    );
                    println!();
                }
            } else {
                println!(
                    "{}",
                    chore_bro::output::format_chore_table(&ranked, today, use_colors)
                );
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {} chores in {:?}",
                    ranked.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Add {
            title,
            category,
            frequency,
            difficulty,
            priority,
            time_of_day,
            seasonal_schedule,
            assignee,
            tools,
            notes,
            due,
        } => {
            if title.trim().is_empty() {
                eprintln!("Chore title must not be empty.");
                std::process::exit(EXIT_CONFIG);
            }
            if category.trim().is_empty() {
                eprintln!("Chore category must not be empty.");
                std::process::exit(EXIT_CONFIG);
            }

            let added = store.add(
                NewChore {
                    title,
                    category,
                    assignee,
                    frequency,
                    difficulty,
                    priority,
                    time_of_day,
                    seasonal_schedule,
                    required_tools: tools,
                    notes,
                    due_date: due,
                },
                now,
            );
            save_or_exit(&store_path, &store);

            println!(
                "Added {} ({} points): {}",
                added.short_ref(),
                added.points,
                added.title
            );

            if cli.verbose {
                // Same pure computation that just produced the stored value
                let result = calculate_points(&ScoreFactors::from(&added));
                eprintln!("{}", chore_bro::output::format_breakdown(&result));
            }
        }
        Commands::Complete { index } => {
            let id = resolve_index(&store, index);
            match store.set_status(id, Status::Completed, now) {
                Some(chore) => {
                    println!("Completed {}: {} (+{} points)", chore.short_ref(), chore.title, chore.points);
                }
                None => {
                    eprintln!("No chore with id {}", id);
                    std::process::exit(EXIT_STORE);
                }
            }
            save_or_exit(&store_path, &store);
        }
        Commands::Skip { index } => {
            let id = resolve_index(&store, index);
            match store.set_status(id, Status::Skipped, now) {
                Some(chore) => {
                    println!("Skipped {}: {}", chore.short_ref(), chore.title);
                }
                None => {
                    eprintln!("No chore with id {}", id);
                    std::process::exit(EXIT_STORE);
                }
            }
            save_or_exit(&store_path, &store);
        }
        Commands::Postpone { index, by } => {
            let push_days = match by.as_deref() {
                Some(s) => match humantime::parse_duration(s) {
                    // Round part-days up so "12h" still moves the date
                    Ok(d) => Some(d.as_secs().div_ceil(86_400)),
                    Err(e) => {
                        eprintln!("Invalid duration '{}': {}", s, e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
                None => None,
            };

            let id = resolve_index(&store, index);
            match store.postpone(id, push_days, now) {
                Some(chore) => match chore.due_date {
                    Some(due) => {
                        println!("Postponed {}: {} (due {})", chore.short_ref(), chore.title, due);
                    }
                    None => {
                        println!("Postponed {}: {}", chore.short_ref(), chore.title);
                    }
                },
                None => {
                    eprintln!("No chore with id {}", id);
                    std::process::exit(EXIT_STORE);
                }
            }
            save_or_exit(&store_path, &store);
        }
        Commands::Remove { index } => {
            let id = resolve_index(&store, index);
            let title = store.get(id).map(|chore| chore.title.clone());
            if store.remove(id) {
                println!("Removed #{}: {}", id, title.unwrap_or_default());
                save_or_exit(&store_path, &store);
            } else {
                eprintln!("No chore with id {}", id);
                std::process::exit(EXIT_STORE);
            }
        }
        Commands::Progress => {
            let report =
                chore_bro::progress::progress_report(&store.chores, today, &config.targets);
            println!(
                "{}",
                chore_bro::output::format_progress_report(&report, use_colors)
            );
        }
        Commands::Achievements => {
            let badges = chore_bro::achievements::evaluate_achievements(&store.chores, today);
            if cli.verbose {
                let earned = badges.iter().filter(|badge| badge.earned).count();
                eprintln!("{} of {} badges earned", earned, badges.len());
            }
            println!(
                "{}",
                chore_bro::output::format_achievements(&badges, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
