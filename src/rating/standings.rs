use std::cmp::Ordering;

use crate::domain::models::RankedEntry;

/// Names carrying this prefix sink to the bottom of their level bracket.
pub const DEMOTION_MARKER: &str = "---";

pub fn is_demoted(name: &str) -> bool {
    name.starts_with(DEMOTION_MARKER)
}

/// Order entries into final standing: level descending, demoted entries
/// after the rest of their level, then rating descending. Remaining ties
/// keep input order (the sort is stable).
pub fn order_standings(entries: &mut [RankedEntry]) {
    entries.sort_by(compare_standing);
}

fn compare_standing(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.level
        .cmp(&a.level)
        .then_with(|| is_demoted(&a.name).cmp(&is_demoted(&b.name)))
        .then_with(|| b.rating.cmp(&a.rating))
}

/// Assign dense 1-based ranks following the current order.
pub fn assign_ranks(entries: &mut [RankedEntry]) {
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position + 1;
    }
}
