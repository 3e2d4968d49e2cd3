use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io;
use std::process::ExitCode;
use vlsm_planner::cli::{run, Args};
use vlsm_planner::config::Settings;
use vlsm_planner::output::render_error;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Warnings and errors to stderr when there is no log4rs.yml next to us.
fn init_fallback_logging() -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_err() {
        if let Err(e) = init_fallback_logging() {
            eprintln!("Error initializing logging: {e}");
        }
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let args = Args::parse();
    let settings = Settings::from_env();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    match run(&args, &settings, &mut input, &mut out) {
        Ok(plan) => {
            log::info!("#End main() {} subnets planned", plan.records.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}
