use std::{error, fmt::Display};

use tracing::debug;

use crate::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeFormatError {
    EmptyMaze,
    /// `row` counts from 0, like `Position`.
    InconsistentRow {
        row: usize,
        expect_col_n: usize,
        col_n: usize,
    },
    InvalidCharForMaze(char, Position),
    MultipleStartPosition(Position, Position),
    MultipleGoalPosition(Position, Position),
    NoStartPosition,
    NoGoalPosition,
}

impl Display for MazeFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeFormatError::EmptyMaze => write!(f, "Expect at least one row in maze, given none."),
            MazeFormatError::InconsistentRow {
                row,
                expect_col_n,
                col_n,
            } => write!(
                f,
                "Expect {} column(s) in each row, given {} in line {}.",
                expect_col_n,
                col_n,
                row + 1
            ),
            MazeFormatError::InvalidCharForMaze(c, pos) => {
                write!(f, "Invalid character({:?}) for maze at {}.", c, pos)
            }
            MazeFormatError::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            MazeFormatError::MultipleGoalPosition(last_pos, pos) => write!(
                f,
                "Expect only one goal position, given two({}, {}).",
                last_pos, pos
            ),
            MazeFormatError::NoStartPosition => write!(f, "No start position(A) in maze."),
            MazeFormatError::NoGoalPosition => write!(f, "No goal position(B) in maze."),
        }
    }
}

impl error::Error for MazeFormatError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Neighbor enumeration order. Which path a search finds depends on it.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Right,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Right => "RIGHT",
            Direction::Left => "LEFT",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn row(&self) -> usize {
        self.r
    }

    pub fn col(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    Start,
    Goal,
}

impl Cell {
    pub fn is_walkable(&self) -> bool {
        !matches!(self, Cell::Wall)
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Start => 'A',
            Cell::Goal => 'B',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '#' => Ok(Cell::Wall),
            ' ' => Ok(Cell::Open),
            'A' => Ok(Cell::Start),
            'B' => Ok(Cell::Goal),
            other => Err(other),
        }
    }
}

/// Rectangular maze with exactly one start and one goal cell.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
    start_pos: Position,
    goal_pos: Position,
}

impl Maze {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn start(&self) -> Position {
        self.start_pos
    }

    pub fn goal(&self) -> Position {
        self.goal_pos
    }

    pub fn cell(&self, pos: &Position) -> Option<&Cell> {
        self.pos_to_ind(pos).and_then(|ind| self.cells.get(ind))
    }

    pub fn is_walkable(&self, pos: &Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_walkable())
    }

    /// Row-major index of `pos`, `None` outside the maze.
    pub fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    /// Renders the maze with every cell of `path` between start and goal drawn as `.`.
    pub fn render_with_path(&self, path: &Path) -> String {
        let mut chars = self.cells.iter().map(Cell::to_char).collect::<Vec<_>>();
        for pos in path.positions() {
            if let Some(ind) = self.pos_to_ind(pos) {
                if self.cells[ind] == Cell::Open {
                    chars[ind] = '.';
                }
            }
        }

        self.join_rows(&chars)
    }

    fn join_rows(&self, chars: &[char]) -> String {
        chars
            .chunks(self.col_n.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = self.cells.iter().map(Cell::to_char).collect::<Vec<_>>();
        write!(f, "{}", self.join_rows(&chars))
    }
}

#[derive(Debug, Default)]
pub struct MazeBuilder {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: Option<usize>,
    blank_row_n: usize,
    start_pos: Option<Position>,
    goal_pos: Option<Position>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank rows are held back and only rejected once another row follows them.
    pub fn add_row(&mut self, text: &str) -> Result<(), MazeFormatError> {
        if text.is_empty() {
            self.blank_row_n += 1;
            return Ok(());
        }

        let this_col_n = text.chars().count();
        if self.blank_row_n > 0 {
            return Err(MazeFormatError::InconsistentRow {
                row: self.row_n,
                expect_col_n: self.col_n.unwrap_or(this_col_n),
                col_n: 0,
            });
        }

        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(MazeFormatError::InconsistentRow {
                row: self.row_n,
                expect_col_n,
                col_n: this_col_n,
            });
        }

        for (ind, c) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, ind);
            let cell =
                Cell::try_from(c).map_err(|c| MazeFormatError::InvalidCharForMaze(c, pos))?;
            match cell {
                Cell::Start => {
                    if let Some(last_pos) = self.start_pos {
                        return Err(MazeFormatError::MultipleStartPosition(last_pos, pos));
                    }

                    self.start_pos = Some(pos);
                }
                Cell::Goal => {
                    if let Some(last_pos) = self.goal_pos {
                        return Err(MazeFormatError::MultipleGoalPosition(last_pos, pos));
                    }

                    self.goal_pos = Some(pos);
                }
                Cell::Wall | Cell::Open => (),
            }
            self.cells.push(cell);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Maze, MazeFormatError> {
        if self.row_n == 0 {
            return Err(MazeFormatError::EmptyMaze);
        }
        let Some(start_pos) = self.start_pos else {
            return Err(MazeFormatError::NoStartPosition);
        };
        let Some(goal_pos) = self.goal_pos else {
            return Err(MazeFormatError::NoGoalPosition);
        };

        let maze = Maze {
            cells: self.cells,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            start_pos,
            goal_pos,
        };
        debug!(
            rows = maze.row_n,
            cols = maze.col_n,
            start = %maze.start_pos,
            goal = %maze.goal_pos,
            "parsed maze"
        );

        Ok(maze)
    }
}
