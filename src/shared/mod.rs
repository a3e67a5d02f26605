pub mod macros;
pub mod structs;
pub mod structs_tests;

pub use structs::Direction;
pub use structs::Floor;
pub use structs::Passenger;
