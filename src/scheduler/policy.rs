/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::DispatchError;

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * Strategy used by `ElevatorScheduler::run_to_completion`.
 *
 * # Variants
 * - `Greedy`:  Service the current floor, then move to the nearest floor of interest
 *              (in-car destinations and waiting origins). Ties go to the lower floor.
 * - `Sweep`:   One ascending pass from the start floor, one descending pass below the
 *              turning point, and a final ascending pass for anyone still aboard.
 *
 * The two strategies deliver the same passengers but visit floors in different orders,
 * so they generally report different distances for the same input.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Greedy,
    #[default]
    Sweep,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Policy::Greedy => write!(f, "greedy"),
            Policy::Sweep => write!(f, "sweep"),
        }
    }
}

impl FromStr for Policy {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Policy::Greedy),
            "sweep" => Ok(Policy::Sweep),
            _ => Err(DispatchError::InvalidPolicy(s.to_string())),
        }
    }
}
