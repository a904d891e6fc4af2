pub mod identity;
pub mod lamp;
pub mod telemetry;

pub use identity::Identity;
pub use lamp::LampColor;
