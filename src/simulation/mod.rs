pub mod request_generator;
pub mod simulation;


pub use request_generator::RequestGenerator;
pub use simulation::Simulation;
pub use simulation::Snapshot;
