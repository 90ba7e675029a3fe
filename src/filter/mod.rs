use crate::chore::{Chore, Status};

/// Filter criteria for chore lists. Every field is optional; an unset (or
/// empty) field matches all chores, and the set fields AND together.
#[derive(Debug, Clone, Default)]
pub struct ChoreFilter {
    /// Exact, case-sensitive category match
    pub category: Option<String>,
    /// Exact status match
    pub status: Option<Status>,
    /// Case-insensitive substring search over title, category, and notes
    pub search: Option<String>,
}

impl ChoreFilter {
    pub fn is_empty(&self) -> bool {
        self.category.as_deref().map_or(true, str::is_empty)
            && self.status.is_none()
            && self.search.as_deref().map_or(true, str::is_empty)
    }
}

/// Check a single chore against the filter
pub fn matches_filter(chore: &Chore, filter: &ChoreFilter) -> bool {
    if let Some(category) = filter.category.as_deref() {
        if !category.is_empty() && chore.category != category {
            return false;
        }
    }

    if let Some(status) = filter.status {
        if chore.status != status {
            return false;
        }
    }

    if let Some(search) = filter.search.as_deref() {
        if !search.is_empty() {
            let haystack = format!(
                "{} {} {}",
                chore.title,
                chore.category,
                chore.notes.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !haystack.contains(&search.to_lowercase()) {
                return false;
            }
        }
    }

    true
}

/// Keep only the chores matching the filter
pub fn filter_chores(chores: Vec<Chore>, filter: &ChoreFilter) -> Vec<Chore> {
    chores
        .into_iter()
        .filter(|chore| matches_filter(chore, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chore::{Difficulty, Frequency, Priority, Season, TimeOfDay};
    use chrono::Utc;

    fn create_test_chore(title: &str, category: &str, status: Status) -> Chore {
        Chore {
            id: 1,
            title: title.to_string(),
            category: category.to_string(),
            assignee: None,
            frequency: Frequency::Weekly,
            difficulty: Difficulty::Easy,
            priority: Priority::Medium,
            time_of_day: TimeOfDay::Morning,
            seasonal_schedule: Season::None,
            required_tools: None,
            notes: None,
            due_date: None,
            status,
            points: 10,
            created_at: Utc::now(),
            status_updated_at: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let chore = create_test_chore("Vacuum", "Indoor", Status::Pending);
        let filter = ChoreFilter::default();
        assert!(filter.is_empty());
        assert!(matches_filter(&chore, &filter));
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let chore = create_test_chore("Vacuum", "Indoor", Status::Pending);

        let matching = ChoreFilter {
            category: Some("Indoor".to_string()),
            ..Default::default()
        };
        assert!(matches_filter(&chore, &matching));

        let wrong_case = ChoreFilter {
            category: Some("indoor".to_string()),
            ..Default::default()
        };
        assert!(!matches_filter(&chore, &wrong_case));
    }

    #[test]
    fn test_empty_category_matches_all() {
        let chore = create_test_chore("Vacuum", "Indoor", Status::Completed);
        let filter = ChoreFilter {
            category: Some(String::new()),
            status: Some(Status::Completed),
            ..Default::default()
        };
        assert!(matches_filter(&chore, &filter));
    }

    #[test]
    fn test_status_filter() {
        let done = create_test_chore("Vacuum", "Indoor", Status::Completed);
        let pending = create_test_chore("Dust", "Indoor", Status::Pending);

        let filter = ChoreFilter {
            status: Some(Status::Completed),
            ..Default::default()
        };
        assert!(matches_filter(&done, &filter));
        assert!(!matches_filter(&pending, &filter));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let chore = create_test_chore("Mow the Lawn", "Outdoor", Status::Pending);
        let filter = ChoreFilter {
            search: Some("LAWN".to_string()),
            ..Default::default()
        };
        assert!(matches_filter(&chore, &filter));
    }

    #[test]
    fn test_search_covers_category_and_notes() {
        let mut chore = create_test_chore("Tidy up", "Garage", Status::Pending);
        chore.notes = Some("needs the tall ladder".to_string());

        let by_category = ChoreFilter {
            search: Some("garage".to_string()),
            ..Default::default()
        };
        assert!(matches_filter(&chore, &by_category));

        let by_notes = ChoreFilter {
            search: Some("ladder".to_string()),
            ..Default::default()
        };
        assert!(matches_filter(&chore, &by_notes));
    }

    #[test]
    fn test_search_missing_notes_treated_as_empty() {
        let chore = create_test_chore("Tidy up", "Garage", Status::Pending);
        let filter = ChoreFilter {
            search: Some("ladder".to_string()),
            ..Default::default()
        };
        assert!(!matches_filter(&chore, &filter));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let chore = create_test_chore("Mow the lawn", "Outdoor", Status::Pending);

        let all_match = ChoreFilter {
            category: Some("Outdoor".to_string()),
            status: Some(Status::Pending),
            search: Some("mow".to_string()),
        };
        assert!(matches_filter(&chore, &all_match));

        let one_fails = ChoreFilter {
            category: Some("Outdoor".to_string()),
            status: Some(Status::Completed),
            search: Some("mow".to_string()),
        };
        assert!(!matches_filter(&chore, &one_fails));
    }

    #[test]
    fn test_filter_chores_keeps_matches() {
        let chores = vec![
            create_test_chore("Vacuum", "Indoor", Status::Pending),
            create_test_chore("Mow", "Outdoor", Status::Pending),
            create_test_chore("Dust", "Indoor", Status::Completed),
        ];
        let filter = ChoreFilter {
            category: Some("Indoor".to_string()),
            ..Default::default()
        };
        let kept = filter_chores(chores, &filter);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "Vacuum");
        assert_eq!(kept[1].title, "Dust");
    }
}
