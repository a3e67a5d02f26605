/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::{DispatchError, Result};
use crate::scheduler::{ElevatorScheduler, Policy, RunReport};
use crate::shared::{Floor, Passenger};

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * A batch of passengers and the floor the car starts at.
 *
 * On disk a scenario is a TOML file:
 *
 * ```toml
 * name = "mixed directions"
 * start_floor = 3
 *
 * [[passengers]]
 * origin = 1
 * destination = 5
 * ```
 */
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub start_floor: Floor,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
}

impl Scenario {
    pub fn new(name: &str, start_floor: Floor, passengers: &[(Floor, Floor)]) -> Scenario {
        Scenario {
            name: name.to_string(),
            start_floor,
            passengers: passengers.iter().copied().map(Passenger::from).collect(),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let scenario_str = fs::read_to_string(path).map_err(|source| DispatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut scenario: Scenario =
        toml::from_str(&scenario_str).map_err(|source| DispatchError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

    if scenario.name.is_empty() {
        scenario.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(scenario)
}

pub fn run_scenario(scenario: &Scenario, policy: Policy) -> RunReport {
    info!(
        "Running scenario '{}' with {} passengers",
        scenario.name,
        scenario.passengers.len()
    );
    let mut scheduler = ElevatorScheduler::with_policy(scenario.start_floor, policy);
    scheduler.add_passengers(scenario.passengers.iter().copied());
    scheduler.run_to_completion();
    scheduler.report()
}

/// The five hand-written scenarios the scheduler is checked against.
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("basic", 3, &[(1, 5), (6, 2), (4, 3)]),
        Scenario::new("common destination", 0, &[(1, 3), (2, 3), (0, 3)]),
        Scenario::new("no passengers", 5, &[]),
        Scenario::new("single drop-off", 10, &[(10, 0)]),
        Scenario::new("multiple stops", 2, &[(2, 5), (5, 2), (2, 4)]),
    ]
}
