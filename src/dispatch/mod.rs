pub mod pipeline;
pub mod stages;


pub use pipeline::initialize;
pub use pipeline::tick;
pub use pipeline::tick_with;
