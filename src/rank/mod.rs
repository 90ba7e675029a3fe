use crate::chore::Chore;
use std::cmp::Ordering;

/// Ordering used for every chore list: priority descending (urgent first),
/// then due date ascending with dateless chores after all dated ones.
pub fn compare_chores(a: &Chore, b: &Chore) -> Ordering {
    // Primary: priority rank descending
    let priority_cmp = b.priority.rank().cmp(&a.priority.rank());
    if priority_cmp != Ordering::Equal {
        return priority_cmp;
    }

    // Tie-breaker: due date ascending, no due date sorts last
    match (a.due_date, b.due_date) {
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort chores into display order. The sort is stable, so chores equal on
/// both keys keep their original relative order.
pub fn rank_chores(mut chores: Vec<Chore>) -> Vec<Chore> {
    chores.sort_by(compare_chores);
    chores
}
