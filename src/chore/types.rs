use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How often a chore recurs.
///
/// Unrecognized values in stored data deserialize to `Unknown` and score
/// with a neutral multiplier instead of failing the whole store load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
    Monthly,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl Priority {
    /// Rank for ordering: urgent > high > medium > low > unknown.
    /// A chore whose priority we cannot read should not jump the queue.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Unknown => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

/// Seasonal schedule. `None` means the chore is not season-bound and is the
/// default for chores created without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    #[default]
    None,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

/// Chore lifecycle status. Created `pending`; moves to the other states via
/// explicit user actions only, never automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
    Skipped,
    Postponed,
}

impl Status {
    /// Open chores still show up in the default list and can transition.
    pub fn is_open(&self) -> bool {
        matches!(self, Status::Pending | Status::Postponed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
            Status::Skipped => "skipped",
            Status::Postponed => "postponed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chore {
    pub id: u64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub assignee: Option<String>,
    pub frequency: Frequency,
    pub difficulty: Difficulty,
    pub priority: Priority,
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub seasonal_schedule: Season,
    #[serde(default)]
    pub required_tools: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: Status,
    // Computed once at creation, stored immutably; never recalculated even
    // if the multiplier tables change.
    pub points: u32,
    pub created_at: DateTime<Utc>,
    // Stamped on every status transition; doubles as the completion
    // timestamp for progress windows.
    #[serde(default)]
    pub status_updated_at: Option<DateTime<Utc>>,
}

impl Chore {
    /// Chore age from creation time
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.created_at
    }

    /// An open chore whose due date has passed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => self.status.is_open() && due < today,
            None => false,
        }
    }

    /// Short reference shown in tables, e.g. "#12"
    pub fn short_ref(&self) -> String {
        format!("#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chore(status: Status, due_date: Option<NaiveDate>) -> Chore {
        Chore {
            id: 1,
            title: "Mow the lawn".to_string(),
            category: "Outdoor".to_string(),
            assignee: None,
            frequency: Frequency::Weekly,
            difficulty: Difficulty::Medium,
            priority: Priority::High,
            time_of_day: TimeOfDay::Morning,
            seasonal_schedule: Season::Summer,
            required_tools: None,
            notes: None,
            due_date,
            status,
            points: 72,
            created_at: Utc::now(),
            status_updated_at: None,
        }
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::Urgent.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
        assert!(Priority::Low.rank() > Priority::Unknown.rank());
    }

    #[test]
    fn test_overdue_requires_open_status() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let past = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        assert!(sample_chore(Status::Pending, Some(past)).is_overdue(today));
        assert!(sample_chore(Status::Postponed, Some(past)).is_overdue(today));
        assert!(!sample_chore(Status::Completed, Some(past)).is_overdue(today));
        assert!(!sample_chore(Status::Pending, None).is_overdue(today));
        assert!(!sample_chore(Status::Pending, Some(today)).is_overdue(today));
    }

    #[test]
    fn test_unknown_enum_values_deserialize_fail_soft() {
        let json = r#"{
            "id": 7,
            "title": "Dust shelves",
            "category": "Indoor",
            "frequency": "fortnightly",
            "difficulty": "brutal",
            "priority": "whenever",
            "time_of_day": "midnight",
            "seasonal_schedule": "monsoon",
            "status": "pending",
            "points": 10,
            "created_at": "2025-06-01T12:00:00Z"
        }"#;
        let chore: Chore = serde_json::from_str(json).unwrap();
        assert_eq!(chore.frequency, Frequency::Unknown);
        assert_eq!(chore.difficulty, Difficulty::Unknown);
        assert_eq!(chore.priority, Priority::Unknown);
        assert_eq!(chore.time_of_day, TimeOfDay::Unknown);
        assert_eq!(chore.seasonal_schedule, Season::Unknown);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": 8,
            "title": "Water plants",
            "category": "Indoor",
            "frequency": "daily",
            "difficulty": "easy",
            "priority": "low",
            "time_of_day": "morning",
            "status": "pending",
            "points": 12,
            "created_at": "2025-06-01T12:00:00Z"
        }"#;
        let chore: Chore = serde_json::from_str(json).unwrap();
        assert_eq!(chore.seasonal_schedule, Season::None);
        assert!(chore.notes.is_none());
        assert!(chore.due_date.is_none());
        assert!(chore.status_updated_at.is_none());
    }
}
