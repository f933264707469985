use std::fmt::Display;

use crate::{
    maze::{Direction, Position},
    search::{NodeId, SearchTree},
};

/// Moves from start to goal, plus every position stepped on including both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    actions: Vec<Direction>,
    positions: Vec<Position>,
}

impl Path {
    /// Walks parent links from `goal` back to the root of `tree`.
    pub fn reconstruct(tree: &SearchTree, goal: NodeId) -> Self {
        let mut cur_node = tree.node(goal);
        let mut actions = Vec::new();
        let mut positions = vec![cur_node.pos()];
        while let (Some(parent), Some(action)) = (cur_node.parent(), cur_node.action()) {
            actions.push(action);
            cur_node = tree.node(parent);
            positions.push(cur_node.pos());
        }
        actions.reverse();
        positions.reverse();

        Self { actions, positions }
    }

    pub fn steps(&self) -> usize {
        self.actions.len()
    }

    pub fn actions(&self) -> &[Direction] {
        &self.actions
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = self
            .actions
            .iter()
            .map(Direction::label)
            .collect::<Vec<_>>();
        write!(f, "[{}]", labels.join(", "))
    }
}
