use crate::chore::{Difficulty, Frequency, Priority, Season, TimeOfDay};

/// Base points for any chore before multipliers are applied.
pub const BASE_POINTS: f64 = 10.0;

// The multiplier tables are a fixed part of the scoring contract: chores
// keep the points they were created with, so changing a value here only
// affects chores created afterwards.

pub fn frequency_multiplier(frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Once => 1.0,
        Frequency::Daily => 1.0,
        Frequency::Weekly => 2.0,
        Frequency::Monthly => 3.0,
        Frequency::Unknown => 1.0,
    }
}

pub fn difficulty_multiplier(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 1.0,
        Difficulty::Medium => 1.5,
        Difficulty::Hard => 2.0,
        Difficulty::Unknown => 1.0,
    }
}

pub fn priority_multiplier(priority: Priority) -> f64 {
    match priority {
        Priority::Low => 1.0,
        Priority::Medium => 1.5,
        Priority::High => 2.0,
        Priority::Urgent => 2.5,
        Priority::Unknown => 1.0,
    }
}

pub fn time_of_day_multiplier(time_of_day: TimeOfDay) -> f64 {
    match time_of_day {
        TimeOfDay::Morning => 1.2,
        TimeOfDay::Afternoon => 1.0,
        TimeOfDay::Evening => 0.8,
        TimeOfDay::Night => 1.5,
        TimeOfDay::Unknown => 1.0,
    }
}

pub fn season_multiplier(season: Season) -> f64 {
    match season {
        Season::Spring => 1.1,
        Season::Summer => 1.2,
        Season::Fall => 1.1,
        Season::Winter => 0.9,
        Season::None => 1.0,
        Season::Unknown => 1.0,
    }
}
