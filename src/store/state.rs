use crate::chore::{Chore, Difficulty, Frequency, Priority, Season, Status, TimeOfDay};
use crate::scoring::{compute_points, ScoreFactors};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Everything a new chore needs before it gets an id, points, and status.
#[derive(Debug, Clone)]
pub struct NewChore {
    pub title: String,
    pub category: String,
    pub assignee: Option<String>,
    pub frequency: Frequency,
    pub difficulty: Difficulty,
    pub priority: Priority,
    pub time_of_day: TimeOfDay,
    pub seasonal_schedule: Season,
    pub required_tools: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoreStore {
    pub version: u32,
    pub next_id: u64,
    #[serde(default)]
    pub chores: Vec<Chore>,
}

impl Default for ChoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoreStore {
    /// Create a new empty store with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            next_id: 1,
            chores: Vec::new(),
        }
    }

    /// Add a chore. This is the only place points are computed: the result
    /// is stored on the chore and never recalculated afterwards.
    pub fn add(&mut self, new: NewChore, now: DateTime<Utc>) -> Chore {
        let points = compute_points(&ScoreFactors {
            frequency: new.frequency,
            difficulty: new.difficulty,
            priority: new.priority,
            time_of_day: new.time_of_day,
            seasonal_schedule: new.seasonal_schedule,
        });

        let chore = Chore {
            id: self.next_id,
            title: new.title,
            category: new.category,
            assignee: new.assignee,
            frequency: new.frequency,
            difficulty: new.difficulty,
            priority: new.priority,
            time_of_day: new.time_of_day,
            seasonal_schedule: new.seasonal_schedule,
            required_tools: new.required_tools,
            notes: new.notes,
            due_date: new.due_date,
            status: Status::Pending,
            points,
            created_at: now,
            status_updated_at: None,
        };

        self.next_id += 1;
        self.chores.push(chore.clone());
        chore
    }

    pub fn get(&self, id: u64) -> Option<&Chore> {
        self.chores.iter().find(|chore| chore.id == id)
    }

    /// Flip a chore's status and stamp the transition time. Points stay
    /// untouched. Returns the updated chore, or None for an unknown id.
    pub fn set_status(&mut self, id: u64, status: Status, now: DateTime<Utc>) -> Option<&Chore> {
        let chore = self.chores.iter_mut().find(|chore| chore.id == id)?;
        chore.status = status;
        chore.status_updated_at = Some(now);
        Some(chore)
    }

    /// Postpone a chore, optionally pushing its due date by whole days.
    pub fn postpone(
        &mut self,
        id: u64,
        push_days: Option<u64>,
        now: DateTime<Utc>,
    ) -> Option<&Chore> {
        let chore = self.chores.iter_mut().find(|chore| chore.id == id)?;
        chore.status = Status::Postponed;
        chore.status_updated_at = Some(now);
        if let (Some(days), Some(due)) = (push_days, chore.due_date) {
            chore.due_date = Some(due + Days::new(days));
        }
        Some(chore)
    }

    /// Remove a chore permanently.
    /// Returns true if the chore existed, false otherwise.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.chores.len();
        self.chores.retain(|chore| chore.id != id);
        self.chores.len() != before
    }
}
