/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use log::{info, warn};
use std::path::Path;

/* Custom libraries */
use elevator_dispatch::config::{self, Config, OutputFormat};
use elevator_dispatch::error::Result;
use elevator_dispatch::scenario::{self, Scenario};
use elevator_dispatch::unwrap_or_exit;
use elevator_dispatch::{DispatchError, Floor, Policy};

/***************************************/
/*                CLI                  */
/***************************************/
fn cli() -> Command<'static> {
    Command::new("elevator-dispatch")
        .about("Dispatches a single elevator car over a batch of passengers")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Configuration file"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .takes_value(true)
                .help("Scenario file with a start floor and passengers"),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .takes_value(true)
                .possible_values(["greedy", "sweep"])
                .help("Dispatch policy, overrides the configuration"),
        )
        .arg(
            Arg::new("start-floor")
                .long("start-floor")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Start floor, overrides the scenario"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the run report as JSON"),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .conflicts_with("scenario")
                .help("Run the built-in reference scenarios"),
        )
}

/* Main */
fn main() {
    let matches = cli().get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = match config::load_config(Path::new(config_path)) {
        Ok(config) => config,
        Err(e) => {
            // Logger is not up yet
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    unwrap_or_exit!(run(&matches, &config), "Dispatch run failed");
}

fn run(matches: &ArgMatches, config: &Config) -> Result<()> {
    let policy = match matches.value_of("policy") {
        Some(name) => name.parse::<Policy>()?,
        None => config.scheduler.policy,
    };
    let format = if matches.is_present("json") {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let mut scenarios = if matches.is_present("reference") {
        scenario::reference_scenarios()
    } else {
        let path = matches
            .value_of("scenario")
            .ok_or(DispatchError::MissingScenario)?;
        vec![scenario::load_scenario(Path::new(path))?]
    };

    if let Some(floor) = matches.value_of("start-floor") {
        let floor = floor
            .parse::<Floor>()
            .map_err(|_| DispatchError::InvalidFloor(floor.to_string()))?;
        for scenario in scenarios.iter_mut() {
            scenario.start_floor = floor;
        }
    }

    info!("Dispatching {} scenario(s) with {} policy", scenarios.len(), policy);
    for scenario in scenarios.iter() {
        print_report(scenario, policy, format)?;
    }
    Ok(())
}

fn print_report(scenario: &Scenario, policy: Policy, format: OutputFormat) -> Result<()> {
    if scenario.passengers.is_empty() {
        warn!("Scenario '{}' has no passengers", scenario.name);
    }

    let report = scenario::run_scenario(scenario, policy);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("== {}", scenario.name);
            println!("{}", report);
        }
    }
    Ok(())
}
