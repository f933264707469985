use anyhow::Result;
use clap::Parser;
use maze_showdown::{CLIArgs, Showdown};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    let maze = maze_showdown::load_maze(&args)?;

    println!("--- GIVEN MAZE ---\n");
    println!("{}\n", maze);

    let showdown = Showdown::run(&maze, args.max_expansions);
    for (ind, run) in showdown.runs().iter().enumerate() {
        if ind > 0 {
            println!("\n{}\n", "-".repeat(50));
        }
        println!("{}", run.report(&maze, args.show_path));
    }

    println!("\n{}", showdown.scoreboard());

    Ok(())
}
