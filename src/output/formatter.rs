use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::achievements::Achievement;
use crate::chore::Chore;
use crate::progress::{ProgressReport, WindowProgress};
use crate::scoring::ScoreResult;

const PROGRESS_BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a due date relative to today: "-" for none, "today", "in 3d",
/// "2d late"
pub fn format_due(due_date: Option<NaiveDate>, today: NaiveDate) -> String {
    match due_date {
        None => "-".to_string(),
        Some(due) if due == today => "today".to_string(),
        Some(due) if due > today => format!("in {}d", (due - today).num_days()),
        Some(due) => format!("{}d late", (today - due).num_days()),
    }
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

/// Format chores as a ranked table, one line per chore:
/// index, points, title, category, priority, due, reference.
/// No headers (minimal format).
pub fn format_chore_table(chores: &[Chore], today: NaiveDate, use_colors: bool) -> String {
    if chores.is_empty() {
        return "No chores found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let points_width = 5;
    let separator = "  ";

    chores
        .iter()
        .enumerate()
        .map(|(idx, chore)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let points_padded = format!("{:>width$}", chore.points, width = points_width);
            let due = format_due(chore.due_date, today);

            // Everything on the line except the title
            let fixed_width = index_width + 1 + points_width
                + separator.len() * 5
                + chore.category.chars().count()
                + chore.priority.as_str().len()
                + due.chars().count()
                + chore.short_ref().len();

            let title = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_title(&chore.title, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_title(&chore.title, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                chore.title.clone()
            };

            if use_colors {
                let due_cell = if chore.is_overdue(today) {
                    due.red().to_string()
                } else {
                    due.clone()
                };
                format!(
                    "{} {}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
                    index_str.dimmed(),
                    points_padded.bold(),
                    title,
                    chore.category.cyan(),
                    chore.priority.as_str().yellow(),
                    due_cell,
                    chore.short_ref().dimmed(),
                    sep = separator
                )
            } else {
                format!(
                    "{} {}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
                    index_str,
                    points_padded,
                    title,
                    chore.category,
                    chore.priority.as_str(),
                    due,
                    chore.short_ref(),
                    sep = separator
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single chore with detailed multi-line output (for verbose mode)
pub fn format_chore_detail(chore: &Chore, today: NaiveDate, use_colors: bool) -> String {
    let age = format_age(chore.age());
    let due = format_due(chore.due_date, today);
    let notes = chore.notes.as_deref().unwrap_or("-");
    let assignee = chore.assignee.as_deref().unwrap_or("-");

    if use_colors {
        format!(
            "{} {}\n  Category: {}\n  Status: {}\n  Priority: {}\n  Due: {}\n  Points: {}\n  Assignee: {}\n  Age: {}\n  Notes: {}",
            chore.title.bold(),
            chore.short_ref().dimmed(),
            chore.category.cyan(),
            chore.status.as_str(),
            chore.priority.as_str().yellow(),
            due,
            chore.points.bold(),
            assignee,
            age,
            notes
        )
    } else {
        format!(
            "{} {}\n  Category: {}\n  Status: {}\n  Priority: {}\n  Due: {}\n  Points: {}\n  Assignee: {}\n  Age: {}\n  Notes: {}",
            chore.title,
            chore.short_ref(),
            chore.category,
            chore.status.as_str(),
            chore.priority.as_str(),
            due,
            chore.points,
            assignee,
            age,
            notes
        )
    }
}

/// Format a score breakdown, one line per factor:
/// "Frequency   x2    10 -> 20"
pub fn format_breakdown(result: &ScoreResult) -> String {
    let mut lines = vec![format!("Base points: {}", result.breakdown.base_points)];
    for factor in &result.breakdown.factors {
        lines.push(format!(
            "  {:<12} x{:<4} {} -> {}",
            factor.label, factor.multiplier, factor.before, factor.after
        ));
    }
    lines.push(format!("Total: {} points", result.points));
    lines.join("\n")
}

fn render_bar(progress: &WindowProgress) -> String {
    let filled = (progress.ratio() * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Format one progress line: "Today  [########------------]  65/100"
pub fn format_progress_line(label: &str, progress: &WindowProgress, use_colors: bool) -> String {
    let bar = render_bar(progress);
    let counts = format!("{}/{}", progress.points, progress.target);

    if use_colors {
        let bar = if progress.points >= progress.target {
            bar.green().to_string()
        } else {
            bar.to_string()
        };
        format!("{:<7} {} {:>11}", label.bold(), bar, counts)
    } else {
        format!("{:<7} {} {:>11}", label, bar, counts)
    }
}

/// Format the full progress report: three bars plus the all-time total
pub fn format_progress_report(report: &ProgressReport, use_colors: bool) -> String {
    let mut lines = vec![
        format_progress_line("Today", &report.today, use_colors),
        format_progress_line("Week", &report.week, use_colors),
        format_progress_line("Month", &report.month, use_colors),
    ];
    lines.push(format!("Total points earned: {}", report.total));
    lines.join("\n")
}

/// Format achievements, one line per badge: "[x] Daily Master (50 points)  65/50"
pub fn format_achievements(achievements: &[Achievement], use_colors: bool) -> String {
    if achievements.is_empty() {
        return "No achievements defined.".to_string();
    }

    achievements
        .iter()
        .map(|badge| {
            let marker = if badge.earned { "[x]" } else { "[ ]" };
            let progress = format!("{}/{}", badge.progress, badge.threshold);
            if use_colors && badge.earned {
                format!(
                    "{} {}  {}",
                    marker.green(),
                    badge.title.green(),
                    progress.dimmed()
                )
            } else {
                format!("{} {}  {}", marker, badge.title, progress)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format chores as tab-separated values for scripting
/// Columns: points, title, category, status, due date (no headers, no colors)
pub fn format_tsv(chores: &[Chore]) -> String {
    if chores.is_empty() {
        return String::new();
    }

    chores
        .iter()
        .map(|chore| {
            let due = chore
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{}\t{}\t{}\t{}\t{}",
                chore.points,
                chore.title,
                chore.category,
                chore.status.as_str(),
                due
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
