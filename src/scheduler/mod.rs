pub mod policy;
pub mod report;
pub mod scheduler;
pub mod policy_tests;

pub use policy::Policy;
pub use report::{reachability_lower_bound, RunReport, Stop};
pub use scheduler::ElevatorScheduler;
