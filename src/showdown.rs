use std::{cmp::Ordering, fmt::Display};

use tracing::info;

use crate::{
    maze::Maze,
    path::Path,
    search::{self, SearchStatus, Strategy},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Found(Path),
    NoPath,
    Abandoned { expanded_n: usize },
}

impl RunResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            RunResult::Found(path) => Some(path),
            RunResult::NoPath | RunResult::Abandoned { .. } => None,
        }
    }

    /// Steps of the found path, 0 when there is none.
    pub fn steps(&self) -> usize {
        self.path().map(Path::steps).unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct StrategyRun {
    strategy: Strategy,
    result: RunResult,
}

impl StrategyRun {
    pub fn execute(maze: &Maze, strategy: Strategy, max_expansions: Option<usize>) -> Self {
        let outcome = search::search(maze, strategy, max_expansions);
        let result = match outcome.status() {
            SearchStatus::Found(_) => outcome
                .path()
                .map(RunResult::Found)
                .unwrap_or(RunResult::NoPath),
            SearchStatus::NoPath => RunResult::NoPath,
            SearchStatus::LimitReached => RunResult::Abandoned {
                expanded_n: outcome.expanded_n(),
            },
        };
        info!(
            strategy = strategy.abbr(),
            steps = result.steps(),
            expanded_n = outcome.expanded_n(),
            "strategy finished"
        );

        Self { strategy, result }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn result(&self) -> &RunResult {
        &self.result
    }

    /// Text block for this run: heading, then the path and its length or why there is none.
    pub fn report(&self, maze: &Maze, show_path: bool) -> String {
        let mut lines = vec![self.strategy.name().to_string()];
        match &self.result {
            RunResult::Found(path) => {
                lines.push(format!("Path Found: {}", path));
                lines.push(format!("Steps taken: {}", path.steps()));
                if show_path {
                    lines.push(String::new());
                    lines.push(maze.render_with_path(path));
                }
            }
            RunResult::NoPath => lines.push("No path found.".to_string()),
            RunResult::Abandoned { expanded_n } => lines.push(format!(
                "Search abandoned after {} expansions.",
                expanded_n
            )),
        }

        lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(Strategy),
    Tie(usize),
    ByDefault { winner: Strategy, loser: Strategy },
    NoneFound,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Winner(strategy) => {
                write!(f, "WINNER: {} was more efficient!", strategy.abbr())
            }
            Verdict::Tie(steps) => write!(f, "WINNER: It was a tie ({} steps each)", steps),
            Verdict::ByDefault { winner, loser } => write!(
                f,
                "WINNER: {} by default ({} found no path)",
                winner.abbr(),
                loser.abbr()
            ),
            Verdict::NoneFound => write!(f, "WINNER: None (neither strategy found a path)"),
        }
    }
}

/// Both strategies run over the same maze, depth-first first.
#[derive(Debug, Clone)]
pub struct Showdown {
    dfs: StrategyRun,
    bfs: StrategyRun,
}

impl Showdown {
    pub fn run(maze: &Maze, max_expansions: Option<usize>) -> Self {
        Self {
            dfs: StrategyRun::execute(maze, Strategy::DepthFirst, max_expansions),
            bfs: StrategyRun::execute(maze, Strategy::BreadthFirst, max_expansions),
        }
    }

    pub fn runs(&self) -> [&StrategyRun; 2] {
        [&self.dfs, &self.bfs]
    }

    pub fn run_of(&self, strategy: Strategy) -> &StrategyRun {
        match strategy {
            Strategy::DepthFirst => &self.dfs,
            Strategy::BreadthFirst => &self.bfs,
        }
    }

    pub fn verdict(&self) -> Verdict {
        match (self.dfs.result.path(), self.bfs.result.path()) {
            (Some(dfs_path), Some(bfs_path)) => match dfs_path.steps().cmp(&bfs_path.steps()) {
                Ordering::Less => Verdict::Winner(Strategy::DepthFirst),
                Ordering::Greater => Verdict::Winner(Strategy::BreadthFirst),
                Ordering::Equal => Verdict::Tie(dfs_path.steps()),
            },
            (Some(_), None) => Verdict::ByDefault {
                winner: Strategy::DepthFirst,
                loser: Strategy::BreadthFirst,
            },
            (None, Some(_)) => Verdict::ByDefault {
                winner: Strategy::BreadthFirst,
                loser: Strategy::DepthFirst,
            },
            (None, None) => Verdict::NoneFound,
        }
    }

    pub fn scoreboard(&self) -> String {
        let banner = "=".repeat(34);
        let mut lines = vec![
            banner.clone(),
            "       ALGORITHM RESULTS       ".to_string(),
            banner,
        ];
        for run in self.runs() {
            let label = match run.strategy {
                Strategy::DepthFirst => "DFS Steps (Any Path):",
                Strategy::BreadthFirst => "BFS Steps (Shortest Path):",
            };
            lines.push(format!("{:<27}{}", label, run.result.steps()));
        }
        lines.push(String::new());
        lines.push(self.verdict().to_string());

        lines.join("\n")
    }
}
