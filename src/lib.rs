/*
 * Single-car elevator dispatch.
 *
 * An `ElevatorScheduler` starts at a floor, takes a batch of passengers and moves the
 * car until every passenger has been picked up at their origin and dropped off at their
 * destination, reporting the total vertical distance traveled.
 */

/* Modules */
pub mod config;
pub mod error;
pub mod scenario;
pub mod scheduler;
pub mod shared;

mod config_tests;

/* Re-exports */
pub use error::DispatchError;
pub use scheduler::{ElevatorScheduler, Policy, RunReport, Stop};
pub use shared::{Direction, Floor, Passenger};
