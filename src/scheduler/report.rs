/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::scheduler::Policy;
use crate::shared::{Floor, Passenger};

/***************************************/
/*       Public data structures        */
/***************************************/

/// One call to `service_current_floor`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    pub floor: Floor,
    #[serde(rename = "droppedOff")]
    pub dropped_off: usize,
    #[serde(rename = "pickedUp")]
    pub picked_up: usize,
}

impl Stop {
    pub fn is_empty(&self) -> bool {
        self.dropped_off == 0 && self.picked_up == 0
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub policy: Policy,
    #[serde(rename = "startFloor")]
    pub start_floor: Floor,
    #[serde(rename = "finalFloor")]
    pub final_floor: Floor,
    #[serde(rename = "totalDistance")]
    pub total_distance: u64,
    pub stops: Vec<Stop>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "policy: {}, start floor: {}, final floor: {}",
            self.policy, self.start_floor, self.final_floor
        )?;
        for stop in self.stops.iter().filter(|stop| !stop.is_empty()) {
            writeln!(
                f,
                "  floor {:>4}: {} off, {} on",
                stop.floor, stop.dropped_off, stop.picked_up
            )?;
        }
        write!(f, "total distance: {}", self.total_distance)
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Smallest distance any schedule can travel for the given batch.
 *
 * Every origin and destination has to be visited at least once, so the car must reach
 * both the lowest and the highest floor of interest. The cheapest way to do so from
 * `start_floor` is to head for the nearer end first and then cross the whole span.
 */
pub fn reachability_lower_bound(start_floor: Floor, passengers: &[Passenger]) -> u64 {
    if passengers.is_empty() {
        return 0;
    }

    let (lowest, highest) = passengers
        .iter()
        .flat_map(|p| [p.origin, p.destination])
        .fold((start_floor, start_floor), |(lo, hi), floor| {
            (lo.min(floor), hi.max(floor))
        });

    let span = u64::from(highest.abs_diff(lowest));
    let first_leg = start_floor.abs_diff(lowest).min(highest.abs_diff(start_floor));
    span + u64::from(first_leg)
}
