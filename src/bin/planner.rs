use bwsearch::search::{
    render_solution, SearchEngineName, StateHeuristicNames, SuccessorGeneratorName, Task,
    Verbosity,
};
use clap::Parser;
use std::{fs, path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Search a blocks world problem for a state that satisfies its goal.
struct Cli {
    #[arg(value_enum, help = "The search method to use", id = "METHOD")]
    search_engine_name: SearchEngineName,
    #[arg(help = "The problem file, with :INIT and :GOAL sections")]
    input: PathBuf,
    #[arg(help = "The file the solution is written to")]
    output: PathBuf,
    #[arg(
        value_enum,
        help = "The heuristic evaluator used by the informed methods",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = StateHeuristicNames::GoalCounting
    )]
    heuristic_name: StateHeuristicNames,
    #[arg(
        value_enum,
        help = "The successor generator to use",
        short = 'g',
        long = "generator",
        id = "GENERATOR",
        default_value_t = SuccessorGeneratorName::UnstackToTable
    )]
    successor_generator_name: SuccessorGeneratorName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let task = match Task::from_path(&cli.input) {
        Ok(task) => task,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let generator = cli.successor_generator_name.create();
    let mut heuristic = cli.heuristic_name.create();
    if !cli.search_engine_name.is_informed()
        && cli.heuristic_name != StateHeuristicNames::default()
    {
        info!(
            engine = %cli.search_engine_name,
            "the selected search method ignores the heuristic"
        );
    }

    let (result, _statistics) =
        task.search_with(cli.search_engine_name, &generator, heuristic.as_mut());
    let solution = result.into_state();
    match &solution {
        Some(state) => info!(predicates = state.len(), "solution found"),
        None => info!("no solution found"),
    }

    if let Err(e) = fs::write(&cli.output, render_solution(solution.as_ref())) {
        error!("failed to write {}: {}", cli.output.display(), e);
        return ExitCode::FAILURE;
    }
    info!(output = %cli.output.display(), "solution written");
    ExitCode::SUCCESS
}
