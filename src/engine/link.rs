// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Neighbor links between section workers.
//!
//! Every worker gets four channel ends: it receives its left neighbor's rightmost
//! cell and its right neighbor's leftmost cell, and sends its own leftmost and
//! rightmost cells the other way. The links form a ring, so the last section's
//! right neighbor is the first section, matching the cyclic tape. With a single
//! section both links lead back to the same worker.

use std::fmt;
use tokio::sync::mpsc;

/// Slots per link direction.
///
/// A worker may send iteration `t`'s boundary before its neighbor has consumed
/// iteration `t - 1`'s, so two values can be in flight at once. A lone worker
/// looped onto itself needs both slots to avoid waiting on itself.
pub const LINK_CAPACITY: usize = 2;

/// Which neighbor of a worker a link leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The four channel ends owned by one worker.
#[derive(Debug)]
pub struct NeighborLinks {
    /// Rightmost cell of the left neighbor.
    pub from_left: mpsc::Receiver<bool>,
    /// Leftmost cell of the right neighbor.
    pub from_right: mpsc::Receiver<bool>,
    /// Our leftmost cell, for the left neighbor.
    pub to_left: mpsc::Sender<bool>,
    /// Our rightmost cell, for the right neighbor.
    pub to_right: mpsc::Sender<bool>,
}

/// Wire `sections` workers into a ring, returning links in rank order.
///
/// Rank `i` sends right into rank `(i + 1) % sections` and left into rank
/// `(i + sections - 1) % sections`.
pub fn build_ring(sections: usize) -> Vec<NeighborLinks> {
    // rightward[i] carries rank i's rightmost cell to rank i + 1.
    let (rightward_tx, mut rightward_rx): (Vec<_>, Vec<_>) = (0..sections)
        .map(|_| mpsc::channel::<bool>(LINK_CAPACITY))
        .unzip();
    // leftward[i] carries rank i's leftmost cell to rank i - 1.
    let (leftward_tx, mut leftward_rx): (Vec<_>, Vec<_>) = (0..sections)
        .map(|_| mpsc::channel::<bool>(LINK_CAPACITY))
        .unzip();

    // After rotating, index i of each receiver list belongs to rank i.
    rightward_rx.rotate_right(1.min(sections));
    leftward_rx.rotate_left(1.min(sections));

    rightward_tx
        .into_iter()
        .zip(leftward_tx)
        .zip(rightward_rx.into_iter().zip(leftward_rx))
        .map(|((to_right, to_left), (from_left, from_right))| NeighborLinks {
            from_left,
            from_right,
            to_left,
            to_right,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ring_delivers_to_adjacent_ranks() {
        let mut links = build_ring(4);
        for (rank, link) in links.iter().enumerate() {
            // Encode the sender's rank parity so mis-wiring shows up.
            link.to_right.send(rank % 2 == 0).await.unwrap();
            link.to_left.send(rank % 2 == 1).await.unwrap();
        }
        for rank in 0..4 {
            let left = (rank + 3) % 4;
            let right = (rank + 1) % 4;
            let from_left = links[rank].from_left.recv().await.unwrap();
            let from_right = links[rank].from_right.recv().await.unwrap();
            assert_eq!(from_left, left % 2 == 0, "rank {} from_left", rank);
            assert_eq!(from_right, right % 2 == 1, "rank {} from_right", rank);
        }
    }

    #[tokio::test]
    async fn test_wraparound_links_first_and_last() {
        let mut links = build_ring(3);
        links[2].to_right.send(true).await.unwrap();
        links[0].to_left.send(true).await.unwrap();
        assert_eq!(links[0].from_left.try_recv(), Ok(true));
        assert_eq!(links[2].from_right.try_recv(), Ok(true));
        assert!(links[1].from_left.try_recv().is_err());
        assert!(links[1].from_right.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_single_section_links_to_itself() {
        let mut links = build_ring(1);
        assert_eq!(links.len(), 1);
        let link = &mut links[0];
        link.to_left.send(true).await.unwrap();
        link.to_right.send(false).await.unwrap();
        assert_eq!(link.from_right.recv().await, Some(true));
        assert_eq!(link.from_left.recv().await, Some(false));
    }

    #[tokio::test]
    async fn test_links_hold_two_values_without_a_reader() {
        let links = build_ring(2);
        for _ in 0..LINK_CAPACITY {
            links[0].to_right.try_send(true).unwrap();
        }
        assert!(links[0].to_right.try_send(true).is_err());
    }

    #[test]
    fn test_empty_ring() {
        assert!(build_ring(0).is_empty());
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
