use crate::chore::{Chore, Status};
use crate::config::ProgressTargets;
use chrono::{DateTime, Datelike, Days, Local, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

/// Sum the points of completed chores whose completion timestamp falls in
/// the half-open interval `[window_start, window_end)`.
///
/// A completed chore with no recorded timestamp (hand-edited store) belongs
/// to no window and is skipped rather than guessed into one.
pub fn aggregate_points(
    chores: &[Chore],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> u64 {
    chores
        .iter()
        .filter(|chore| chore.status == Status::Completed)
        .filter_map(|chore| chore.status_updated_at.map(|at| (chore, at)))
        .filter(|(_, at)| *at >= window_start && *at < window_end)
        .map(|(chore, _)| chore.points as u64)
        .sum()
}

/// All-time completed points, shown next to the windowed totals.
pub fn total_points(chores: &[Chore]) -> u64 {
    chores
        .iter()
        .filter(|chore| chore.status == Status::Completed)
        .map(|chore| chore.points as u64)
        .sum()
}

/// First day (Sunday) of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Sun).first_day()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

// Local midnight as a UTC instant. A midnight skipped by a DST transition
// falls back to the UTC reading of the naive time; an ambiguous midnight
// resolves to the earlier instant.
fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match naive.and_local_timezone(Local) {
        LocalResult::Single(at) => at.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&naive),
    }
}

/// Midnight-to-midnight local-time window for `date`
pub fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    (local_midnight(date), local_midnight(date + Days::new(1)))
}

/// Sunday-to-Sunday window for the week containing `date`
pub fn week_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = week_start(date);
    (local_midnight(start), local_midnight(start + Days::new(7)))
}

/// First-of-month to first-of-next-month window for `date`
pub fn month_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = month_start(date);
    (local_midnight(start), local_midnight(start + Months::new(1)))
}

#[derive(Debug, Clone, Copy)]
pub struct WindowProgress {
    pub points: u64,
    pub target: u64,
}

impl WindowProgress {
    /// Completion ratio against the target, capped at 1.0 for bar rendering
    pub fn ratio(&self) -> f64 {
        if self.target == 0 {
            return 1.0;
        }
        (self.points as f64 / self.target as f64).min(1.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProgressReport {
    pub today: WindowProgress,
    pub week: WindowProgress,
    pub month: WindowProgress,
    pub total: u64,
}

/// Aggregate completed points into the three reporting windows around
/// `today` (day, Sunday-anchored week, calendar month).
pub fn progress_report(
    chores: &[Chore],
    today: NaiveDate,
    targets: &ProgressTargets,
) -> ProgressReport {
    let (day_start, day_end) = day_window(today);
    let (week_start, week_end) = week_window(today);
    let (month_start, month_end) = month_window(today);

    ProgressReport {
        today: WindowProgress {
            points: aggregate_points(chores, day_start, day_end),
            target: targets.daily,
        },
        week: WindowProgress {
            points: aggregate_points(chores, week_start, week_end),
            target: targets.weekly,
        },
        month: WindowProgress {
            points: aggregate_points(chores, month_start, month_end),
            target: targets.monthly,
        },
        total: total_points(chores),
    }
}
