pub mod formatter;

pub use formatter::{
    format_achievements, format_age, format_breakdown, format_chore_detail, format_chore_table,
    format_due, format_progress_line, format_progress_report, format_tsv, should_use_colors,
};
