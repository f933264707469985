use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn builtin_maze_bfs_wins() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();

    cmd.assert()
        .success()
        .stdout(str::contains("--- GIVEN MAZE ---"))
        .stdout(str::contains("Steps taken: 116"))
        .stdout(str::contains("Steps taken: 92"))
        .stdout(str::contains("WINNER: BFS was more efficient!"));
}

#[test]
fn input_file_matches_builtin_maze() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("DFS Steps (Any Path):      116"))
        .stdout(str::contains("BFS Steps (Shortest Path): 92"));
}

#[test]
fn walled_off_goal_reports_no_path() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("tests/mazes/walled_off.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("No path found."))
        .stdout(str::contains("WINNER: None (neither strategy found a path)"));
}

#[test]
fn adjacent_goal_is_a_tie() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("tests/mazes/adjacent.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Path Found: [RIGHT]"))
        .stdout(str::contains("WINNER: It was a tie (1 steps each)"));
}

#[test]
fn missing_goal_fails_before_searching() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("tests/mazes/no_goal.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("No goal position(B) in maze."))
        .stdout(str::contains("Depth-First Search").not());
}

#[test]
fn ragged_rows_fail() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("tests/mazes/ragged.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 5 column(s) in each row, given 3 in line 3."));
}

#[test]
fn trailing_blank_lines_are_ignored() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("tests/mazes/trailing_blank_lines.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Steps taken: 116"))
        .stdout(str::contains("WINNER: BFS was more efficient!"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("tests/mazes/does_not_exist.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}

#[test]
fn expansion_cap_abandons_both_searches() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("--max-expansions").arg("5");

    cmd.assert()
        .success()
        .stdout(str::contains("Search abandoned after 5 expansions."))
        .stdout(str::contains("WINNER: None"));
}

#[test]
fn expansion_cap_can_leave_one_winner() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("tests/mazes/shortcut.txt")
        .arg("--max-expansions")
        .arg("3");

    cmd.assert()
        .success()
        .stdout(str::contains("Path Found: [LEFT, LEFT, LEFT]"))
        .stdout(str::contains("WINNER: DFS by default (BFS found no path)"));
}

#[test]
fn show_path_draws_overlay() {
    let mut cmd = Command::cargo_bin("maze_showdown").unwrap();
    cmd.arg("--show-path");

    cmd.assert().success().stdout(str::contains("#A..#   #"));
}
