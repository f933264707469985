use maze_showdown::{RunResult, Showdown, Strategy, Verdict, BUILTIN_MAZE};

fn showdown(text: &str, max_expansions: Option<usize>) -> (maze_showdown::Maze, Showdown) {
    let maze = maze_showdown::parse_maze(text).unwrap();
    let showdown = Showdown::run(&maze, max_expansions);

    (maze, showdown)
}

#[test]
fn builtin_maze_verdict() {
    let (_, showdown) = showdown(BUILTIN_MAZE, None);

    assert_eq!(showdown.verdict(), Verdict::Winner(Strategy::BreadthFirst));
    assert_eq!(showdown.run_of(Strategy::DepthFirst).result().steps(), 116);
    assert_eq!(showdown.run_of(Strategy::BreadthFirst).result().steps(), 92);
    let scoreboard = showdown.scoreboard();
    assert!(scoreboard.contains("ALGORITHM RESULTS"));
    assert!(scoreboard.ends_with("WINNER: BFS was more efficient!"));
}

#[test]
fn runs_keep_strategy_order() {
    let (_, showdown) = showdown(BUILTIN_MAZE, None);
    let strategies = showdown
        .runs()
        .iter()
        .map(|run| run.strategy())
        .collect::<Vec<_>>();

    assert_eq!(strategies, Strategy::all_strategies());
}

#[test]
fn equal_paths_tie() {
    let (_, showdown) = showdown("####\n#AB#\n####", None);

    assert_eq!(showdown.verdict(), Verdict::Tie(1));
}

#[test]
fn no_path_is_not_an_error() {
    let (maze, showdown) = showdown("#######\n#A # B#\n#######", None);

    assert_eq!(showdown.verdict(), Verdict::NoneFound);
    for run in showdown.runs() {
        assert_eq!(run.result(), &RunResult::NoPath);
        assert_eq!(run.result().steps(), 0);
        assert!(run.report(&maze, false).ends_with("No path found."));
    }
    assert!(showdown.scoreboard().contains("BFS Steps (Shortest Path): 0"));
}

#[test]
fn one_sided_failure_wins_by_default() {
    let (_, showdown) = showdown("######\n#B  A#\n#    #\n######", Some(3));

    assert_eq!(
        showdown.verdict(),
        Verdict::ByDefault {
            winner: Strategy::DepthFirst,
            loser: Strategy::BreadthFirst
        }
    );
    assert_eq!(
        showdown.run_of(Strategy::BreadthFirst).result(),
        &RunResult::Abandoned { expanded_n: 3 }
    );
}

#[test]
fn report_shows_path_and_overlay() {
    let (maze, showdown) = showdown("#####\n#A B#\n#####", None);
    let report = showdown.run_of(Strategy::BreadthFirst).report(&maze, true);

    assert_eq!(
        report,
        "Breadth-First Search (Queue)\nPath Found: [RIGHT, RIGHT]\nSteps taken: 2\n\n#####\n#A.B#\n#####"
    );
}
