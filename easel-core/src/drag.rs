//! Drag sessions.
//!
//! A session lives from pointer-down on a node to the matching pointer-up.
//! Positions are absolute: each move places the node at the pointer minus
//! the offset captured when the session began, never at an accumulated delta.

use serde::{Deserialize, Serialize};

use crate::{NodeId, Position};

/// An in-progress drag of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    node: NodeId,
    offset: Position,
}

impl DragSession {
    /// Begin dragging `node`, whose top-left is at `origin`, from `pointer`.
    #[must_use]
    pub fn begin(node: NodeId, pointer: Position, origin: Position) -> Self {
        Self {
            node,
            offset: pointer - origin,
        }
    }

    /// The node being dragged.
    #[must_use]
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    /// Pointer-to-node offset captured at drag start.
    #[must_use]
    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Where the node's top-left belongs for the given pointer position.
    #[must_use]
    pub fn target(&self, pointer: Position) -> Position {
        pointer - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_pointer_minus_initial_offset() {
        let session = DragSession::begin(
            NodeId::generate(),
            Position::new(25.0, 30.0),
            Position::new(10.0, 10.0),
        );
        assert_eq!(session.offset(), Position::new(15.0, 20.0));
        assert_eq!(
            session.target(Position::new(100.0, 50.0)),
            Position::new(85.0, 30.0)
        );
        // Independent of any intermediate pointer positions.
        assert_eq!(
            session.target(Position::new(25.0, 30.0)),
            Position::new(10.0, 10.0)
        );
    }
}
