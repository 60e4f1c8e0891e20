use std::cmp::Ordering;

use fairway_core::SortDirection;

/// A slot in the ranked order: which input it came from and its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
    pub index: usize,
    pub position: u32,
}

/// Competition ranking ("1, 2, 2, 4") over `scores`.
///
/// Output is ordered best first. Equal scores share a position and keep
/// their input order, so the result never depends on anything but the
/// arguments.
pub fn rank(scores: &[f64], direction: SortDirection) -> Vec<Ranked> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| compare(scores[a], scores[b], direction));

    let mut ranked = Vec::with_capacity(order.len());
    let mut position = 1;
    for (slot, &index) in order.iter().enumerate() {
        // Everything ahead of this slot is strictly better unless tied with the previous one.
        if slot > 0 && scores[order[slot - 1]] != scores[index] {
            position = slot as u32 + 1;
        }
        ranked.push(Ranked { index, position });
    }
    ranked
}

fn compare(a: f64, b: f64, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => a.total_cmp(&b),
        SortDirection::Desc => b.total_cmp(&a),
    }
}
