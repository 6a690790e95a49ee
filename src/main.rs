use calciprog::cli::{parse_args, ArgsError};
use calciprog::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    if let Err(e) = calciprog::logging::init(&config) {
        eprintln!("{e}");
    }
    log::info!("#Start main()");

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(ArgsError::Info(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match calciprog::run(&args, &mut std::io::stdout().lock()) {
        Ok(outcome) => {
            log::debug!("Finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
