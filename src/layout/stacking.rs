//! Interval stacking.
//!
//! Assigns each visible item a lane index so that no two overlapping
//! items share a lane, with an owner-affinity rule: items of the same
//! owner get non-decreasing lanes in start order. That keeps one
//! person's work vertically contiguous at the cost of packing density —
//! a deliberate readability trade, not a bug.
//!
//! # Ongoing Items
//! An ongoing item (`start == end`) conflicts with *everything*, so it
//! always receives a lane of its own.
//!
//! # Complexity
//! O(n × lanes); fine for the small per-context item counts a dashboard
//! renders.

use std::collections::HashMap;

use crate::models::{ScheduledItem, StackAssignment, TimeWindow};

/// Whether two items conflict for lane purposes.
///
/// Ongoing items conflict unconditionally; bounded items use half-open
/// interval intersection on their raw dates.
pub fn overlaps(a: &ScheduledItem, b: &ScheduledItem) -> bool {
    if a.is_ongoing() || b.is_ongoing() {
        return true;
    }
    a.start < b.end && b.start < a.end
}

/// Whether an item belongs in the given window's rendering context.
///
/// Ongoing items are visible from their start date onward; bounded
/// items are visible when their interval touches the window.
pub fn is_visible(item: &ScheduledItem, window: &TimeWindow) -> bool {
    if item.is_ongoing() {
        item.start <= window.end
    } else {
        item.start <= window.end && item.end >= window.start
    }
}

/// Filters a collection to the items visible in the window.
pub fn visible(items: &[ScheduledItem], window: &TimeWindow) -> Vec<ScheduledItem> {
    items
        .iter()
        .filter(|item| is_visible(item, window))
        .cloned()
        .collect()
}

/// Assigns a lane to every item.
///
/// Precondition: `items` are already filtered to one rendering context
/// (see [`visible`]).
///
/// # Algorithm
/// 1. Sort by `(start asc, end asc, id asc)` — the id key makes lane
///    assignment a pure function of the item set, independent of input
///    order.
/// 2. Probe from lane 0, or from one past the owner's last lane.
/// 3. Advance the probe past every conflicting placed item, record the
///    assignment, and bump the owner's last lane (monotonic).
pub fn assign_lanes(items: &[ScheduledItem]) -> Vec<StackAssignment> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[a]
            .start
            .cmp(&items[b].start)
            .then(items[a].end.cmp(&items[b].end))
            .then(items[a].id.cmp(&items[b].id))
    });

    // Accumulators live only for this call; nothing leaks across passes
    let mut last_lane_for_owner: HashMap<&str, usize> = HashMap::new();
    let mut placed: Vec<(usize, &ScheduledItem)> = Vec::with_capacity(items.len());
    let mut assignments = Vec::with_capacity(items.len());

    for &index in &order {
        let item = &items[index];
        let mut lane = item
            .owner_id
            .as_deref()
            .and_then(|owner| last_lane_for_owner.get(owner))
            .map(|&last| last + 1)
            .unwrap_or(0);

        while placed
            .iter()
            .any(|&(occupied, other)| occupied == lane && overlaps(item, other))
        {
            lane += 1;
        }

        placed.push((lane, item));
        if let Some(owner) = item.owner_id.as_deref() {
            last_lane_for_owner.insert(owner, lane);
        }
        assignments.push(StackAssignment {
            item_id: item.id.clone(),
            lane_index: lane,
        });
    }

    assignments
}

/// Number of lanes used by a set of assignments.
pub fn lane_count(assignments: &[StackAssignment]) -> usize {
    assignments
        .iter()
        .map(|a| a.lane_index + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn item(id: &str, start: NaiveDate, end: NaiveDate) -> ScheduledItem {
        ScheduledItem::new(id, start, end)
    }

    fn lane_of(assignments: &[StackAssignment], id: &str) -> usize {
        assignments
            .iter()
            .find(|a| a.item_id == id)
            .map(|a| a.lane_index)
            .unwrap()
    }

    #[test]
    fn test_overlap_half_open() {
        let a = item("A", d(2024, 1, 1), d(2024, 1, 3));
        let b = item("B", d(2024, 1, 2), d(2024, 1, 5));
        let c = item("C", d(2024, 1, 3), d(2024, 1, 5)); // touches A's end
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_ongoing_overlaps_everything() {
        let ongoing = ScheduledItem::ongoing("G", d(2024, 1, 1));
        let far_away = item("F", d(2024, 6, 1), d(2024, 6, 5));
        assert!(overlaps(&ongoing, &far_away));
        assert!(overlaps(&far_away, &ongoing));
        let other_ongoing = ScheduledItem::ongoing("H", d(2024, 3, 1));
        assert!(overlaps(&ongoing, &other_ongoing));
    }

    #[test]
    fn test_visibility_bounded() {
        let window = TimeWindow::new(d(2024, 1, 8), d(2024, 1, 12));
        assert!(is_visible(&item("A", d(2024, 1, 1), d(2024, 1, 8)), &window)); // touches start
        assert!(is_visible(&item("B", d(2024, 1, 12), d(2024, 1, 20)), &window)); // touches end
        assert!(is_visible(&item("C", d(2024, 1, 1), d(2024, 1, 31)), &window)); // spans
        assert!(!is_visible(&item("D", d(2024, 1, 1), d(2024, 1, 5)), &window)); // before
        assert!(!is_visible(&item("E", d(2024, 1, 15), d(2024, 1, 20)), &window)); // after
    }

    #[test]
    fn test_visibility_ongoing() {
        let window = TimeWindow::new(d(2024, 1, 8), d(2024, 1, 12));
        // Visible from its start date onward, however far back
        assert!(is_visible(&ScheduledItem::ongoing("G", d(2023, 6, 1)), &window));
        assert!(is_visible(&ScheduledItem::ongoing("H", d(2024, 1, 12)), &window));
        assert!(!is_visible(&ScheduledItem::ongoing("I", d(2024, 1, 13)), &window));
    }

    #[test]
    fn test_visible_filter() {
        let window = TimeWindow::new(d(2024, 1, 8), d(2024, 1, 12));
        let items = vec![
            item("in", d(2024, 1, 9), d(2024, 1, 10)),
            item("out", d(2024, 2, 1), d(2024, 2, 5)),
            ScheduledItem::ongoing("going", d(2024, 1, 1)),
        ];
        let kept = visible(&items, &window);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|i| i.id != "out"));
    }

    #[test]
    fn test_disjoint_items_share_lane_zero() {
        let items = vec![
            item("A", d(2024, 1, 1), d(2024, 1, 3)),
            item("B", d(2024, 1, 3), d(2024, 1, 5)),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lane_of(&lanes, "A"), 0);
        assert_eq!(lane_of(&lanes, "B"), 0);
        assert_eq!(lane_count(&lanes), 1);
    }

    #[test]
    fn test_overlapping_items_split_lanes() {
        let items = vec![
            item("A", d(2024, 1, 1), d(2024, 1, 4)),
            item("B", d(2024, 1, 2), d(2024, 1, 5)),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lane_of(&lanes, "A"), 0);
        assert_eq!(lane_of(&lanes, "B"), 1);
    }

    #[test]
    fn test_same_owner_overlap_stacks_down() {
        // A (Mon–Tue) and B (Mon–Wed), same owner: A lane 0, B lane 1
        let items = vec![
            item("A", d(2024, 1, 1), d(2024, 1, 2)).with_owner("alice"),
            item("B", d(2024, 1, 1), d(2024, 1, 3)).with_owner("alice"),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lane_of(&lanes, "A"), 0);
        assert_eq!(lane_of(&lanes, "B"), 1);
    }

    #[test]
    fn test_owner_monotonicity_even_without_overlap() {
        // Owner affinity probes from last lane + 1, so a later item of
        // the same owner never climbs back above an earlier one
        let items = vec![
            item("A", d(2024, 1, 1), d(2024, 1, 3)).with_owner("alice"),
            item("B", d(2024, 1, 1), d(2024, 1, 5)).with_owner("alice"),
            item("C", d(2024, 1, 10), d(2024, 1, 12)).with_owner("alice"),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lane_of(&lanes, "A"), 0);
        assert_eq!(lane_of(&lanes, "B"), 1);
        assert_eq!(lane_of(&lanes, "C"), 2); // free lanes above are skipped
    }

    #[test]
    fn test_ongoing_and_disjoint_bounded_get_distinct_lanes() {
        // No literal date overlap, but ongoing conflicts with everything
        let items = vec![
            ScheduledItem::ongoing("G", d(2024, 1, 1)),
            item("B", d(2024, 1, 2), d(2024, 1, 3)),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lane_of(&lanes, "G"), 0);
        assert_eq!(lane_of(&lanes, "B"), 1);
    }

    #[test]
    fn test_many_ongoing_distinct_lanes() {
        // n unrelated ongoing items in one bucket consume n lanes
        let items = vec![
            ScheduledItem::ongoing("G1", d(2024, 1, 1)),
            ScheduledItem::ongoing("G2", d(2024, 1, 2)),
            ScheduledItem::ongoing("G3", d(2024, 1, 3)),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lane_of(&lanes, "G1"), 0);
        assert_eq!(lane_of(&lanes, "G2"), 1);
        assert_eq!(lane_of(&lanes, "G3"), 2);
        assert_eq!(lane_count(&lanes), 3);
    }

    #[test]
    fn test_ongoing_with_owner_affinity() {
        // The overlap rule and the owner rule interleave literally:
        // alice's second item probes from her last lane and then climbs
        // past the conflicting ongoing item
        let items = vec![
            ScheduledItem::ongoing("G", d(2024, 1, 1)).with_owner("alice"),
            item("B", d(2024, 1, 2), d(2024, 1, 3)).with_owner("alice"),
            ScheduledItem::ongoing("H", d(2024, 1, 2)).with_owner("bob"),
        ];
        let lanes = assign_lanes(&items);
        assert_eq!(lane_of(&lanes, "G"), 0);
        // H sorts before B (start Jan 2, ongoing end Jan 2 < B's Jan 3)
        assert_eq!(lane_of(&lanes, "H"), 1);
        assert_eq!(lane_of(&lanes, "B"), 2);
    }

    #[test]
    fn test_tie_break_by_id_is_input_order_independent() {
        let a = item("A", d(2024, 1, 1), d(2024, 1, 3));
        let b = item("B", d(2024, 1, 1), d(2024, 1, 3));
        let forward = assign_lanes(&[a.clone(), b.clone()]);
        let reversed = assign_lanes(&[b, a]);
        assert_eq!(lane_of(&forward, "A"), lane_of(&reversed, "A"));
        assert_eq!(lane_of(&forward, "B"), lane_of(&reversed, "B"));
        assert_eq!(lane_of(&forward, "A"), 0);
        assert_eq!(lane_of(&forward, "B"), 1);
    }

    #[test]
    fn test_no_overlap_within_any_lane() {
        // Property check over a denser mix, ongoing included
        let items = vec![
            item("A", d(2024, 1, 1), d(2024, 1, 5)).with_owner("alice"),
            item("B", d(2024, 1, 2), d(2024, 1, 4)).with_owner("bob"),
            item("C", d(2024, 1, 4), d(2024, 1, 8)),
            item("D", d(2024, 1, 5), d(2024, 1, 9)).with_owner("alice"),
            ScheduledItem::ongoing("G", d(2024, 1, 3)),
            item("E", d(2024, 1, 8), d(2024, 1, 10)),
        ];
        let lanes = assign_lanes(&items);
        for a in &lanes {
            for b in &lanes {
                if a.item_id == b.item_id || a.lane_index != b.lane_index {
                    continue;
                }
                let ia = items.iter().find(|i| i.id == a.item_id).unwrap();
                let ib = items.iter().find(|i| i.id == b.item_id).unwrap();
                assert!(
                    !overlaps(ia, ib),
                    "items {} and {} overlap in lane {}",
                    a.item_id,
                    b.item_id,
                    a.lane_index
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let lanes = assign_lanes(&[]);
        assert!(lanes.is_empty());
        assert_eq!(lane_count(&lanes), 0);
    }
}
