#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub start: i64,
    pub finish: i64,
}

/// Maximum set of mutually compatible activities. Returns indices into
/// `activities` in selection order.
///
/// Sorted by finish time; an activity is taken when it starts no earlier
/// than the last selected one finishes.
pub fn activity_selection(activities: &[Activity]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&i| activities[i].finish);

    let mut selected = Vec::new();
    let mut last_finish: Option<i64> = None;
    for i in order {
        if last_finish.map_or(true, |f| activities[i].start >= f) {
            selected.push(i);
            last_finish = Some(activities[i].finish);
        }
    }
    selected
}
