pub mod error;
pub mod macros;
pub mod structs;

mod structs_tests;

pub use error::DispatchError;
pub use error::DispatchResult;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::PickupRequest;
pub use structs::SystemState;
