use super::tables::{
    difficulty_multiplier, frequency_multiplier, priority_multiplier, season_multiplier,
    time_of_day_multiplier, BASE_POINTS,
};
use crate::chore::{Chore, Difficulty, Frequency, Priority, Season, TimeOfDay};

/// The five descriptive attributes a chore is scored from.
///
/// Points are calculated exactly once, when the chore is created, and the
/// result is stored on the chore. Everything after that reads the stored
/// value; status transitions never rescore.
#[derive(Debug, Clone, Copy)]
pub struct ScoreFactors {
    pub frequency: Frequency,
    pub difficulty: Difficulty,
    pub priority: Priority,
    pub time_of_day: TimeOfDay,
    pub seasonal_schedule: Season,
}

impl From<&Chore> for ScoreFactors {
    fn from(chore: &Chore) -> Self {
        Self {
            frequency: chore.frequency,
            difficulty: chore.difficulty,
            priority: chore.priority,
            time_of_day: chore.time_of_day,
            seasonal_schedule: chore.seasonal_schedule,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: &'static str, // e.g. "Frequency", "Season"
    pub multiplier: f64,
    pub before: f64, // Score before this factor
    pub after: f64,  // Score after this factor
}

#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub base_points: f64,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub points: u32,
    pub breakdown: ScoreBreakdown,
}

/// Calculate chore points with a per-factor breakdown.
///
/// Points = round(10 x frequency x difficulty x priority x time-of-day x
/// season). Every multiplier comes from a fixed table; unknown values map
/// to 1.0 so scoring always returns a value.
pub fn calculate_points(factors: &ScoreFactors) -> ScoreResult {
    let mut score = BASE_POINTS;
    let mut contributions = Vec::with_capacity(5);

    let steps = [
        ("Frequency", frequency_multiplier(factors.frequency)),
        ("Difficulty", difficulty_multiplier(factors.difficulty)),
        ("Priority", priority_multiplier(factors.priority)),
        ("Time of day", time_of_day_multiplier(factors.time_of_day)),
        ("Season", season_multiplier(factors.seasonal_schedule)),
    ];

    for (label, multiplier) in steps {
        let before = score;
        score *= multiplier;
        contributions.push(FactorContribution {
            label,
            multiplier,
            before,
            after: score,
        });
    }

    ScoreResult {
        points: score.round() as u32,
        breakdown: ScoreBreakdown {
            base_points: BASE_POINTS,
            factors: contributions,
        },
    }
}

/// Point value alone, for callers that don't need the breakdown.
pub fn compute_points(factors: &ScoreFactors) -> u32 {
    calculate_points(factors).points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(
        frequency: Frequency,
        difficulty: Difficulty,
        priority: Priority,
        time_of_day: TimeOfDay,
        seasonal_schedule: Season,
    ) -> ScoreFactors {
        ScoreFactors {
            frequency,
            difficulty,
            priority,
            time_of_day,
            seasonal_schedule,
        }
    }

    fn baseline() -> ScoreFactors {
        factors(
            Frequency::Daily,
            Difficulty::Easy,
            Priority::Low,
            TimeOfDay::Afternoon,
            Season::None,
        )
    }

    #[test]
    fn test_all_neutral_factors_score_base() {
        // daily x easy x low x afternoon x none = 10 x 1 x 1 x 1 x 1
        assert_eq!(compute_points(&baseline()), 10);
    }

    #[test]
    fn test_maximal_factors_with_winter() {
        // 10 x 3 x 2 x 2.5 x 1.5 = 225, x 0.9 = 202.5, rounds half-up to 203
        let f = factors(
            Frequency::Monthly,
            Difficulty::Hard,
            Priority::Urgent,
            TimeOfDay::Night,
            Season::Winter,
        );
        assert_eq!(compute_points(&f), 203);
    }

    #[test]
    fn test_maximal_factors_without_season() {
        let f = factors(
            Frequency::Monthly,
            Difficulty::Hard,
            Priority::Urgent,
            TimeOfDay::Night,
            Season::None,
        );
        assert_eq!(compute_points(&f), 225);
    }

    #[test]
    fn test_evening_discount() {
        let f = factors(
            Frequency::Daily,
            Difficulty::Easy,
            Priority::Low,
            TimeOfDay::Evening,
            Season::None,
        );
        assert_eq!(compute_points(&f), 8);
    }

    #[test]
    fn test_monotonic_in_frequency() {
        let order = [
            Frequency::Once,
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
        ];
        let mut previous = 0;
        for frequency in order {
            let mut f = baseline();
            f.frequency = frequency;
            let points = compute_points(&f);
            assert!(
                points >= previous,
                "{:?} scored below its predecessor",
                frequency
            );
            previous = points;
        }
    }

    #[test]
    fn test_monotonic_in_difficulty() {
        let order = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        let mut previous = 0;
        for difficulty in order {
            let mut f = baseline();
            f.difficulty = difficulty;
            let points = compute_points(&f);
            assert!(points >= previous);
            previous = points;
        }
    }

    #[test]
    fn test_monotonic_in_priority() {
        let order = [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ];
        let mut previous = 0;
        for priority in order {
            let mut f = baseline();
            f.priority = priority;
            let points = compute_points(&f);
            assert!(points >= previous);
            previous = points;
        }
    }

    #[test]
    fn test_monotonic_in_time_of_day() {
        // Ascending by multiplier: evening 0.8 < afternoon 1 < morning 1.2 < night 1.5
        let order = [
            TimeOfDay::Evening,
            TimeOfDay::Afternoon,
            TimeOfDay::Morning,
            TimeOfDay::Night,
        ];
        let mut previous = 0;
        for time_of_day in order {
            let mut f = baseline();
            f.time_of_day = time_of_day;
            let points = compute_points(&f);
            assert!(points >= previous);
            previous = points;
        }
    }

    #[test]
    fn test_monotonic_in_season() {
        // Ascending by multiplier: winter 0.9 < none 1 < spring 1.1 <= fall 1.1 < summer 1.2
        let order = [
            Season::Winter,
            Season::None,
            Season::Spring,
            Season::Fall,
            Season::Summer,
        ];
        let mut previous = 0;
        for season in order {
            let mut f = baseline();
            f.seasonal_schedule = season;
            let points = compute_points(&f);
            assert!(points >= previous);
            previous = points;
        }
    }

    #[test]
    fn test_deterministic() {
        let f = factors(
            Frequency::Weekly,
            Difficulty::Medium,
            Priority::High,
            TimeOfDay::Morning,
            Season::Spring,
        );
        assert_eq!(compute_points(&f), compute_points(&f));
    }

    #[test]
    fn test_unknown_factors_score_neutral() {
        let f = factors(
            Frequency::Unknown,
            Difficulty::Unknown,
            Priority::Unknown,
            TimeOfDay::Unknown,
            Season::Unknown,
        );
        assert_eq!(compute_points(&f), 10);
    }

    #[test]
    fn test_breakdown_tracks_each_factor() {
        let f = factors(
            Frequency::Weekly,
            Difficulty::Hard,
            Priority::Low,
            TimeOfDay::Afternoon,
            Season::None,
        );
        let result = calculate_points(&f);
        assert_eq!(result.breakdown.base_points, 10.0);
        assert_eq!(result.breakdown.factors.len(), 5);

        let frequency = &result.breakdown.factors[0];
        assert_eq!(frequency.label, "Frequency");
        assert_eq!(frequency.before, 10.0);
        assert_eq!(frequency.after, 20.0);

        let last = result.breakdown.factors.last().unwrap();
        assert_eq!(last.after.round() as u32, result.points);
    }
}
