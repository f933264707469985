use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path as FsPath, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod maze;
pub mod path;
pub mod search;
pub mod showdown;

pub use maze::{Cell, Direction, Maze, MazeBuilder, MazeFormatError, Position};
pub use path::Path;
pub use search::{search, search_with, Frontier, SearchOutcome, SearchStatus, Strategy};
pub use showdown::{RunResult, Showdown, StrategyRun, Verdict};

/// 21x21 maze used when no input file is given.
pub const BUILTIN_MAZE: &str = "\
#####################
#A  #   #       #   #
# # # # # ##### # # #
# #   #   #   #   # #
# ####### # # #######
#       # # #       #
####### # # # ##### #
#       #   # #     #
# ########### # #####
# #           #     #
# # ######### ##### #
#   #       #     # #
##### ####### ### # #
#     #     #   #   #
# ##### ### # #######
# #     #   # #     #
# # ##### ### # ### #
# #     #     #   # #
# ##### ######### # #
#                 #B#
#####################";

#[derive(Debug, Parser)]
#[command(about = "Race depth-first against breadth-first search through a maze.")]
pub struct CLIArgs {
    /// Maze file, the built-in maze when omitted.
    pub input_path: Option<PathBuf>,
    /// Stop a strategy after expanding this many nodes.
    #[arg(long)]
    pub max_expansions: Option<usize>,
    /// Draw each found path over the maze.
    #[arg(long)]
    pub show_path: bool,
}

pub fn parse_maze(text: &str) -> Result<Maze, MazeFormatError> {
    let mut builder = MazeBuilder::new();
    for line in text.lines() {
        builder.add_row(line)?;
    }

    builder.build()
}

pub fn read_maze<P: AsRef<FsPath>>(path: P) -> Result<Maze> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MazeBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build()?)
}

pub fn load_maze(args: &CLIArgs) -> Result<Maze> {
    match &args.input_path {
        Some(input_path) => read_maze(input_path).with_context(|| {
            format!(
                "Failed to read maze from given file({}).",
                input_path.display()
            )
        }),
        None => parse_maze(BUILTIN_MAZE).context("Failed to parse the built-in maze."),
    }
}
