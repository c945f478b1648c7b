use routing_sssp::app;
use routing_sssp::config::RunConfig;
use routing_sssp::graph::sample::{sample_topology, SAMPLE_DIAGRAM};
use routing_sssp::Error;
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", RunConfig::USAGE);
        return ExitCode::SUCCESS;
    }

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported to the user on stdout
        Err(Error::InvalidSource { .. }) | Err(Error::ParseSource(_)) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &[String]) -> routing_sssp::Result<()> {
    let config = RunConfig::from_args(args)?;
    let graph = sample_topology()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&graph, SAMPLE_DIAGRAM, &config, stdin.lock(), &mut out)
}
