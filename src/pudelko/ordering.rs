use crate::pudelko::types::Pudelko;
use std::cmp::Ordering;

/// Order boxes by volume, then surface area, then the sum of their edges.
/// Boxes that compare `Equal` here are not necessarily `==`.
pub fn compare_capacity(lhs: &Pudelko, rhs: &Pudelko) -> Ordering {
    lhs.volume()
        .total_cmp(&rhs.volume())
        .then_with(|| lhs.surface_area().total_cmp(&rhs.surface_area()))
        .then_with(|| lhs.edge_sum().total_cmp(&rhs.edge_sum()))
}

/// Stable sort, smallest capacity first
pub fn sort_by_capacity(boxes: &mut [Pudelko]) {
    boxes.sort_by(compare_capacity);
}
