/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A position on the building's vertical axis. Basements are negative.
pub type Floor = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    pub fn between(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Stop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Stop => write!(f, "stop"),
        }
    }
}

/**
 * A single travel request.
 *
 * Passengers are plain values: two passengers with the same origin and
 * destination are still two passengers and are tracked independently by the
 * scheduler.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    pub origin: Floor,
    pub destination: Floor,
}

impl Passenger {
    pub fn new(origin: Floor, destination: Floor) -> Passenger {
        Passenger {
            origin,
            destination,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.origin, self.destination)
    }
}

impl From<(Floor, Floor)> for Passenger {
    fn from((origin, destination): (Floor, Floor)) -> Self {
        Passenger::new(origin, destination)
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
