//! Live reordering while a payload hovers over a builder section.
//!
//! The reconciliation itself is pure: given the payload's recorded index,
//! the hovered item's index and geometry, and the pointer position, it
//! decides whether the dragged section should jump to the hovered slot.
//! Applying the decision is left to [`PromptSurface`](super::PromptSurface).

use serde::{Deserialize, Serialize};

use super::payload::DragPayload;

/// Vertical extent of a rendered list item, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ItemBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Half the item's height, measured from its top edge
    pub fn midpoint_offset(&self) -> f64 {
        (self.bottom - self.top) / 2.0
    }

    /// Pointer position relative to the item's top edge
    ///
    /// A missing pointer reading is treated as `0.0`.
    pub fn pointer_offset(&self, pointer_y: Option<f64>) -> f64 {
        pointer_y.unwrap_or(0.0) - self.top
    }
}

/// The list item currently under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    /// Position in the builder list; `None` for items outside it (library blocks)
    pub index: Option<usize>,
    pub bounds: ItemBounds,
}

impl HoverTarget {
    pub fn new(index: usize, bounds: ItemBounds) -> Self {
        Self {
            index: Some(index),
            bounds,
        }
    }
}

/// Why a hover evaluation left the list untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Library payloads are only ever appended on drop
    TemplateOrigin,
    /// Either side has no established position yet
    MissingIndex,
    /// Hovering over the dragged section itself
    SamePosition,
    /// An index points past the end of the list
    OutOfRange,
    /// Pointer has not crossed the hovered item's midpoint in the drag direction
    BelowThreshold,
}

/// Result of one hover evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverDecision {
    Swap { from: usize, to: usize },
    Skip(SkipReason),
}

impl HoverDecision {
    pub fn is_swap(&self) -> bool {
        matches!(self, HoverDecision::Swap { .. })
    }
}

/// Decides whether a hover event moves the dragged section
///
/// Direction-sensitive hysteresis: dragging downward only swaps once the
/// pointer reaches the hovered item's lower half, dragging upward only once
/// it reaches the upper half. A pointer exactly on the midpoint swaps.
pub fn reconcile(
    payload: &DragPayload,
    target: &HoverTarget,
    pointer_y: Option<f64>,
    len: usize,
) -> HoverDecision {
    let drag_index = match payload {
        DragPayload::Template(_) => return HoverDecision::Skip(SkipReason::TemplateOrigin),
        DragPayload::LiveSection { index, .. } => *index,
    };

    let (from, to) = match (drag_index, target.index) {
        (Some(from), Some(to)) => (from, to),
        _ => return HoverDecision::Skip(SkipReason::MissingIndex),
    };

    if from == to {
        return HoverDecision::Skip(SkipReason::SamePosition);
    }

    if from >= len || to >= len {
        return HoverDecision::Skip(SkipReason::OutOfRange);
    }

    let middle = target.bounds.midpoint_offset();
    let offset = target.bounds.pointer_offset(pointer_y);

    if from < to && offset < middle {
        return HoverDecision::Skip(SkipReason::BelowThreshold);
    }
    if from > to && offset > middle {
        return HoverDecision::Skip(SkipReason::BelowThreshold);
    }

    HoverDecision::Swap { from, to }
}

/// Removes the element at `from` and reinserts it at `to`
///
/// Elements between the two positions shift by one; every other element
/// keeps its relative order. Out-of-range indices leave the list unchanged.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::payload::BlockSnapshot;

    fn live(index: usize) -> DragPayload {
        DragPayload::live(BlockSnapshot::new("x", None, vec![]), index)
    }

    // Items are 40px tall, stacked from y = 0
    fn target(index: usize) -> HoverTarget {
        let top = index as f64 * 40.0;
        HoverTarget::new(index, ItemBounds::new(top, top + 40.0))
    }

    #[test]
    fn midpoint_and_pointer_offset() {
        let bounds = ItemBounds::new(100.0, 140.0);

        assert_eq!(bounds.midpoint_offset(), 20.0);
        assert_eq!(bounds.pointer_offset(Some(130.0)), 30.0);
        assert_eq!(bounds.pointer_offset(None), -100.0);
    }

    #[test]
    fn template_payload_never_swaps() {
        let payload = DragPayload::template(BlockSnapshot::new("x", None, vec![]));

        let decision = reconcile(&payload, &target(1), Some(79.0), 3);
        assert_eq!(decision, HoverDecision::Skip(SkipReason::TemplateOrigin));
    }

    #[test]
    fn same_position_is_noop() {
        let decision = reconcile(&live(1), &target(1), Some(79.0), 3);
        assert_eq!(decision, HoverDecision::Skip(SkipReason::SamePosition));
    }

    #[test]
    fn missing_indices_are_noop() {
        let unpositioned = DragPayload::LiveSection {
            snapshot: BlockSnapshot::new("x", None, vec![]),
            index: None,
        };
        assert_eq!(
            reconcile(&unpositioned, &target(1), Some(79.0), 3),
            HoverDecision::Skip(SkipReason::MissingIndex)
        );

        let library_item = HoverTarget {
            index: None,
            bounds: ItemBounds::new(0.0, 40.0),
        };
        assert_eq!(
            reconcile(&live(0), &library_item, Some(39.0), 3),
            HoverDecision::Skip(SkipReason::MissingIndex)
        );
    }

    #[test]
    fn out_of_range_is_noop() {
        assert_eq!(
            reconcile(&live(5), &target(1), Some(41.0), 3),
            HoverDecision::Skip(SkipReason::OutOfRange)
        );
        assert_eq!(
            reconcile(&live(0), &target(3), Some(159.0), 3),
            HoverDecision::Skip(SkipReason::OutOfRange)
        );
    }

    #[test]
    fn downward_drag_above_midpoint_is_suppressed() {
        // Item 1 spans 40..80, midpoint at 60
        let decision = reconcile(&live(0), &target(1), Some(59.0), 3);
        assert_eq!(decision, HoverDecision::Skip(SkipReason::BelowThreshold));
    }

    #[test]
    fn downward_drag_past_midpoint_swaps() {
        let decision = reconcile(&live(0), &target(1), Some(61.0), 3);
        assert_eq!(decision, HoverDecision::Swap { from: 0, to: 1 });
    }

    #[test]
    fn upward_drag_below_midpoint_is_suppressed() {
        let decision = reconcile(&live(2), &target(1), Some(61.0), 3);
        assert_eq!(decision, HoverDecision::Skip(SkipReason::BelowThreshold));
    }

    #[test]
    fn upward_drag_past_midpoint_swaps() {
        let decision = reconcile(&live(2), &target(1), Some(59.0), 3);
        assert_eq!(decision, HoverDecision::Swap { from: 2, to: 1 });
    }

    #[test]
    fn pointer_exactly_on_midpoint_swaps_both_ways() {
        assert!(reconcile(&live(0), &target(1), Some(60.0), 3).is_swap());
        assert!(reconcile(&live(2), &target(1), Some(60.0), 3).is_swap());
    }

    #[test]
    fn suppression_is_idempotent() {
        let payload = live(0);
        for _ in 0..10 {
            assert!(!reconcile(&payload, &target(2), Some(81.0), 3).is_swap());
        }
    }

    #[test]
    fn move_item_shifts_intermediate_elements() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_item(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        move_item(&mut items, 3, 0);
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn move_item_out_of_range_is_noop() {
        let mut items = vec![1, 2, 3];
        move_item(&mut items, 0, 3);
        move_item(&mut items, 7, 0);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn repeated_moves_preserve_relative_order_of_others() {
        let original: Vec<u32> = (0..8).collect();
        let mut items = original.clone();

        // Drag element 2 step by step down to 6, then back up to 4
        let mut at = 2;
        for to in [3, 4, 5, 6, 5, 4] {
            move_item(&mut items, at, to);
            at = to;
        }

        assert_eq!(items[at], 2);
        let others: Vec<u32> = items.iter().copied().filter(|v| *v != 2).collect();
        let expected: Vec<u32> = original.iter().copied().filter(|v| *v != 2).collect();
        assert_eq!(others, expected);
    }
}
