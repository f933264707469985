use std::{
    collections::{HashSet, VecDeque},
    fmt::Display,
};

use tracing::{debug, warn};

use crate::{
    maze::{Direction, Maze, Position},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A discovered position plus the link back to the node that discovered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pos: Position,
    parent: Option<NodeId>,
    action: Option<Direction>,
}

impl SearchNode {
    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<Direction> {
        self.action
    }
}

/// Arena of search nodes indexed by insertion order. Only child to parent links are kept.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, pos: Position, parent: Option<NodeId>, action: Option<Direction>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            pos,
            parent,
            action,
        });

        id
    }
}

/// Working set of discovered but unexplored nodes. The removal order picks the strategy.
pub trait Frontier {
    /// Claim cells when they are added instead of when they are removed.
    const MARKS_ON_INSERT: bool;

    fn add(&mut self, id: NodeId);
    fn remove_next(&mut self) -> Option<NodeId>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
}

/// Last in, first out. The same cell may sit in the stack more than once.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<NodeId>,
}

impl Frontier for StackFrontier {
    const MARKS_ON_INSERT: bool = false;

    fn add(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        self.nodes.pop()
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<NodeId>,
}

impl Frontier for QueueFrontier {
    const MARKS_ON_INSERT: bool = true;

    fn add(&mut self, id: NodeId) {
        self.nodes.push_back(id);
    }

    fn remove_next(&mut self) -> Option<NodeId> {
        self.nodes.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

impl Strategy {
    pub fn all_strategies() -> &'static [Strategy] {
        static ALL_STRATEGIES: [Strategy; 2] = [Strategy::DepthFirst, Strategy::BreadthFirst];

        &ALL_STRATEGIES
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "Depth-First Search (Stack)",
            Strategy::BreadthFirst => "Breadth-First Search (Queue)",
        }
    }

    pub fn abbr(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "DFS",
            Strategy::BreadthFirst => "BFS",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Found(NodeId),
    NoPath,
    LimitReached,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    status: SearchStatus,
    tree: SearchTree,
    expanded_n: usize,
    frontier_peak: usize,
}

impl SearchOutcome {
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Number of nodes whose neighbors were enumerated.
    pub fn expanded_n(&self) -> usize {
        self.expanded_n
    }

    pub fn frontier_peak(&self) -> usize {
        self.frontier_peak
    }

    pub fn goal_node(&self) -> Option<&SearchNode> {
        match self.status {
            SearchStatus::Found(id) => Some(self.tree.node(id)),
            SearchStatus::NoPath | SearchStatus::LimitReached => None,
        }
    }

    pub fn path(&self) -> Option<Path> {
        match self.status {
            SearchStatus::Found(id) => Some(Path::reconstruct(&self.tree, id)),
            SearchStatus::NoPath | SearchStatus::LimitReached => None,
        }
    }
}

pub fn search(maze: &Maze, strategy: Strategy, max_expansions: Option<usize>) -> SearchOutcome {
    debug!(%strategy, start = %maze.start(), goal = %maze.goal(), "starting search");
    match strategy {
        Strategy::DepthFirst => search_with(maze, StackFrontier::default(), max_expansions),
        Strategy::BreadthFirst => search_with(maze, QueueFrontier::default(), max_expansions),
    }
}

/// Explores `maze` from its start until the goal is removed from `frontier`.
///
/// Neighbors are always enumerated up, down, right, left. Visited cells are
/// tracked per call, so nothing carries over between searches.
pub fn search_with<F: Frontier>(
    maze: &Maze,
    mut frontier: F,
    max_expansions: Option<usize>,
) -> SearchOutcome {
    let goal = maze.goal();
    let mut tree = SearchTree::default();
    let mut visited = HashSet::new();
    let root = tree.push(maze.start(), None, None);
    if F::MARKS_ON_INSERT {
        visited.insert(maze.start());
    }
    frontier.add(root);

    let mut expanded_n = 0;
    let mut frontier_peak = frontier.len();
    let status = loop {
        let Some(cur_id) = frontier.remove_next() else {
            break SearchStatus::NoPath;
        };
        let cur_pos = tree.node(cur_id).pos;
        if cur_pos == goal {
            break SearchStatus::Found(cur_id);
        }

        if !F::MARKS_ON_INSERT && !visited.insert(cur_pos) {
            continue;
        }

        if max_expansions.is_some_and(|max| expanded_n >= max) {
            warn!(expanded_n, frontier_n = frontier.len(), "search hit the expansion cap");
            break SearchStatus::LimitReached;
        }
        expanded_n += 1;

        for dir in Direction::all_dirs() {
            let Some(next_pos) = cur_pos.neighbor(*dir) else {
                continue;
            };
            if !maze.is_walkable(&next_pos) || visited.contains(&next_pos) {
                continue;
            }

            if F::MARKS_ON_INSERT {
                visited.insert(next_pos);
            }
            let next_id = tree.push(next_pos, Some(cur_id), Some(*dir));
            frontier.add(next_id);
        }
        frontier_peak = frontier_peak.max(frontier.len());
    };

    debug!(
        ?status,
        expanded_n,
        frontier_peak,
        node_n = tree.len(),
        "search finished"
    );

    SearchOutcome {
        status,
        tree,
        expanded_n,
        frontier_peak,
    }
}
