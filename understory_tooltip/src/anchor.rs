// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving an anchor's page position from a host offset-parent chain.
//!
//! Hosts usually report element positions relative to an *offset parent* (the nearest
//! positioned ancestor) rather than the page. [`anchor_position`] walks that chain
//! iteratively and sums the per-node offsets until it reaches a node with no offset
//! parent.

use kurbo::{Size, Vec2};

use crate::placement::AnchorPosition;

/// Upper bound on the number of offset parents visited by [`anchor_position`].
///
/// A well-formed chain ends at the document root long before this; the bound only
/// guarantees termination when a host reports a cyclic chain.
pub const MAX_OFFSET_DEPTH: usize = 1024;

/// Position queries over a host's offset-parent chain.
///
/// `K` is the host's node handle (for example an element id).
pub trait OffsetParents<K> {
    /// Offset of `node` relative to its offset parent (`x` = left, `y` = top).
    fn offset(&self, node: &K) -> Vec2;

    /// Rendered size of `node`.
    fn size(&self, node: &K) -> Size;

    /// The offset parent of `node`, or `None` at the root of the chain.
    fn offset_parent(&self, node: &K) -> Option<K>;
}

/// Compute the cumulative page position of `anchor`, paired with its own size.
///
/// At most [`MAX_OFFSET_DEPTH`] offset parents are summed. A chain with more ancestors
/// than that (or a cyclic one) is cut off there, and the result omits the offsets of
/// the remaining ancestors. With the `tracing` feature enabled the cutoff is logged.
pub fn anchor_position<K, L>(lookup: &L, anchor: &K) -> AnchorPosition
where
    K: Clone,
    L: OffsetParents<K> + ?Sized,
{
    let size = lookup.size(anchor);
    let mut total = lookup.offset(anchor);
    let mut current = lookup.offset_parent(anchor);
    let mut depth = 0;
    while let Some(node) = current {
        if depth == MAX_OFFSET_DEPTH {
            #[cfg(feature = "tracing")]
            tracing::warn!(depth, "offset parent chain exceeded maximum depth");
            break;
        }
        total += lookup.offset(&node);
        current = lookup.offset_parent(&node);
        depth += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(depth, x = total.x, y = total.y, "resolved anchor offset");

    AnchorPosition::new(total.y, total.x, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Nodes indexed by position; `parent` is an index into the same list.
    struct Chain {
        nodes: Vec<(Vec2, Size, Option<usize>)>,
    }

    impl OffsetParents<usize> for Chain {
        fn offset(&self, node: &usize) -> Vec2 {
            self.nodes[*node].0
        }

        fn size(&self, node: &usize) -> Size {
            self.nodes[*node].1
        }

        fn offset_parent(&self, node: &usize) -> Option<usize> {
            self.nodes[*node].2
        }
    }

    #[test]
    fn root_anchor_uses_its_own_offset() {
        let chain = Chain {
            nodes: alloc::vec![(Vec2::new(3.0, 4.0), Size::new(10.0, 20.0), None)],
        };
        let pos = anchor_position(&chain, &0);
        assert_eq!(
            pos,
            AnchorPosition::new(4.0, 3.0, 10.0, 20.0),
            "no parents to add"
        );
    }

    #[test]
    fn sums_offsets_through_every_parent() {
        let chain = Chain {
            nodes: alloc::vec![
                (Vec2::new(0.0, 0.0), Size::new(800.0, 600.0), None),
                (Vec2::new(50.0, 100.0), Size::new(300.0, 200.0), Some(0)),
                (Vec2::new(10.0, 5.0), Size::new(20.0, 10.0), Some(1)),
            ],
        };
        let pos = anchor_position(&chain, &2);
        assert_eq!(pos.left, 60.0, "10 + 50 + 0");
        assert_eq!(pos.top, 105.0, "5 + 100 + 0");
        assert_eq!(
            (pos.width, pos.height),
            (20.0, 10.0),
            "size comes from the anchor only"
        );
    }

    #[test]
    fn cyclic_chain_terminates() {
        let chain = Chain {
            nodes: alloc::vec![
                (Vec2::new(1.0, 0.0), Size::ZERO, Some(1)),
                (Vec2::new(1.0, 0.0), Size::ZERO, Some(0)),
            ],
        };
        let pos = anchor_position(&chain, &0);
        assert_eq!(
            pos.left,
            (MAX_OFFSET_DEPTH + 1) as f64,
            "anchor plus the maximum number of parents"
        );
    }

    #[test]
    fn chain_at_maximum_depth_is_fully_summed() {
        // Node `i` has node `i - 1` as its offset parent; node 0 is the root.
        let nodes = (0..=MAX_OFFSET_DEPTH)
            .map(|i| (Vec2::new(0.0, 1.0), Size::ZERO, i.checked_sub(1)))
            .collect();
        let chain = Chain { nodes };
        let pos = anchor_position(&chain, &MAX_OFFSET_DEPTH);
        assert_eq!(
            pos.top,
            (MAX_OFFSET_DEPTH + 1) as f64,
            "every parent up to the cap contributes"
        );
    }
}
