use crate::chore::{Chore, Status};
use crate::progress::{aggregate_points, day_window, month_start, month_window, week_start, week_window};
use chrono::{DateTime, Days, Local, Months, NaiveDate, Utc};
use std::collections::BTreeSet;

// Badge thresholds, one tier list per badge family.
const DAILY_POINT_THRESHOLDS: [u64; 4] = [50, 100, 200, 500];
const WEEKLY_POINT_THRESHOLDS: [u64; 4] = [200, 500, 1000, 2000];
const MONTHLY_POINT_THRESHOLDS: [u64; 4] = [1000, 2500, 5000, 10000];
const DAILY_STREAK_THRESHOLDS: [u64; 4] = [7, 14, 30, 90];
const WEEKLY_STREAK_THRESHOLDS: [u64; 4] = [4, 8, 12, 24];
const MONTHLY_STREAK_THRESHOLDS: [u64; 4] = [3, 6, 12, 24];
const CATEGORY_THRESHOLDS: [u64; 4] = [5, 10, 20, 50];

#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub threshold: u64,
    pub progress: u64,
    pub earned: bool,
}

impl Achievement {
    fn new(id: String, title: String, description: String, threshold: u64, progress: u64) -> Self {
        Self {
            earned: progress >= threshold,
            id,
            title,
            description,
            threshold,
            progress,
        }
    }
}

/// Evaluate every badge against the chore collection as of `today`.
///
/// Pure: reads the collection, returns the badge list, touches nothing.
/// Point badges measure the current day/week/month window; streak badges
/// count consecutive periods with at least one completion; the category
/// badge counts distinct categories with at least one completed chore.
pub fn evaluate_achievements(chores: &[Chore], today: NaiveDate) -> Vec<Achievement> {
    let mut achievements = Vec::new();

    let (day_start, day_end) = day_window(today);
    let (week_start_at, week_end) = week_window(today);
    let (month_start_at, month_end) = month_window(today);

    let day_points = aggregate_points(chores, day_start, day_end);
    let week_points = aggregate_points(chores, week_start_at, week_end);
    let month_points = aggregate_points(chores, month_start_at, month_end);

    for (period, points, thresholds) in [
        ("daily", day_points, DAILY_POINT_THRESHOLDS),
        ("weekly", week_points, WEEKLY_POINT_THRESHOLDS),
        ("monthly", month_points, MONTHLY_POINT_THRESHOLDS),
    ] {
        for threshold in thresholds {
            achievements.push(points_achievement(period, threshold, points));
        }
    }

    let completion_dates = completion_dates(chores);
    for (period, streak, thresholds, unit) in [
        ("daily", daily_streak(&completion_dates, today), DAILY_STREAK_THRESHOLDS, "days"),
        ("weekly", weekly_streak(&completion_dates, today), WEEKLY_STREAK_THRESHOLDS, "weeks"),
        ("monthly", monthly_streak(&completion_dates, today), MONTHLY_STREAK_THRESHOLDS, "months"),
    ] {
        for threshold in thresholds {
            achievements.push(streak_achievement(period, unit, threshold, streak));
        }
    }

    let categories = completed_category_count(chores);
    for threshold in CATEGORY_THRESHOLDS {
        achievements.push(Achievement::new(
            format!("category-master-{}", threshold),
            format!("Category Master ({} categories)", threshold),
            format!("Complete chores in {} different categories", threshold),
            threshold,
            categories,
        ));
    }

    achievements
}

fn points_achievement(period: &str, threshold: u64, progress: u64) -> Achievement {
    let capitalized = capitalize(period);
    Achievement::new(
        format!("{}-points-{}", period, threshold),
        format!("{} Master ({} points)", capitalized, threshold),
        format!("Complete {} points in a {} window", threshold, period),
        threshold,
        progress,
    )
}

fn streak_achievement(period: &str, unit: &str, threshold: u64, progress: u64) -> Achievement {
    Achievement::new(
        format!("{}-streak-{}", period, threshold),
        format!("{} Streak ({} {})", capitalize(period), threshold, unit),
        format!("Complete chores for {} consecutive {}", threshold, unit),
        threshold,
        progress,
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Local calendar dates on which at least one chore was completed.
fn completion_dates(chores: &[Chore]) -> BTreeSet<NaiveDate> {
    chores
        .iter()
        .filter(|chore| chore.status == Status::Completed)
        .filter_map(|chore| chore.status_updated_at)
        .map(local_date)
        .collect()
}

fn local_date(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Local).date_naive()
}

/// Distinct categories with at least one completed chore
pub fn completed_category_count(chores: &[Chore]) -> u64 {
    chores
        .iter()
        .filter(|chore| chore.status == Status::Completed)
        .map(|chore| chore.category.as_str())
        .collect::<BTreeSet<_>>()
        .len() as u64
}

// Walk back one period at a time from the current period. An unfinished
// current period does not break the streak: when `current` has no
// completion, counting starts at the period before it.
fn streak_len<F>(periods: &BTreeSet<NaiveDate>, current: NaiveDate, step_back: F) -> u64
where
    F: Fn(NaiveDate) -> NaiveDate,
{
    let mut cursor = if periods.contains(&current) {
        current
    } else {
        step_back(current)
    };
    let mut streak = 0;
    while periods.contains(&cursor) {
        streak += 1;
        cursor = step_back(cursor);
    }
    streak
}

/// Consecutive days with a completion, counting back from today (or
/// yesterday when today is still empty)
pub fn daily_streak(completion_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u64 {
    streak_len(completion_dates, today, |date| date - Days::new(1))
}

/// Consecutive Sunday-anchored weeks with a completion
pub fn weekly_streak(completion_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u64 {
    let weeks: BTreeSet<NaiveDate> = completion_dates.iter().map(|date| week_start(*date)).collect();
    streak_len(&weeks, week_start(today), |date| date - Days::new(7))
}

/// Consecutive calendar months with a completion
pub fn monthly_streak(completion_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u64 {
    let months: BTreeSet<NaiveDate> = completion_dates.iter().map(|date| month_start(*date)).collect();
    streak_len(&months, month_start(today), |date| date - Months::new(1))
}
