// src/render/pick.rs
//
// Frame-scoped pick results. The renderer fills the buffer while drawing,
// the selection controller drains it once on the next frame.

use crate::models::{CellId, PieceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickTarget {
    Piece(PieceId),
    Cell(CellId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickResult {
    pub target: PickTarget,
    pub pick_id: u32,
}

#[derive(Debug, Default)]
pub struct PickBuffer {
    results: Vec<PickResult>,
}

impl PickBuffer {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, target: PickTarget, pick_id: u32) {
        self.results.push(PickResult { target, pick_id });
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Hands out every result in pick order and leaves the buffer empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, PickResult> {
        self.results.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_keeps_order_and_empties() {
        let mut picks = PickBuffer::new();
        picks.push(PickTarget::Cell(CellId::new(0, 1)), 101);
        picks.push(PickTarget::Piece(PieceId(3)), 3);
        assert_eq!(picks.len(), 2);

        let drained: Vec<PickResult> = picks.drain().collect();
        assert_eq!(drained[0].pick_id, 101);
        assert_eq!(drained[1].target, PickTarget::Piece(PieceId(3)));
        assert!(picks.is_empty());
    }

    #[test]
    fn test_partial_drain_still_clears() {
        let mut picks = PickBuffer::new();
        picks.push(PickTarget::Piece(PieceId(1)), 1);
        picks.push(PickTarget::Piece(PieceId(2)), 2);
        let first = picks.drain().next();
        assert_eq!(first.map(|pick| pick.pick_id), Some(1));
        assert!(picks.is_empty());
    }
}
