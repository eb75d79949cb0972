//! The stock rule checks, one module per rule family.

mod connectivity;
mod depth;
mod entanglement;
mod measurement;
mod validity;

pub use connectivity::Connectivity;
pub use depth::DepthLimit;
pub use entanglement::EntanglementDepth;
pub use measurement::MeasurementPresence;
pub use validity::GateValidity;
