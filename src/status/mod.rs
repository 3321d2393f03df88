//! Status sources: the pure aggregator, the simulated demo source, and the
//! live Proxmox source.

pub mod aggregator;
pub mod live;
pub mod simulated;
pub mod source;

pub use live::ClusterStatus;
pub use simulated::SimulatedStatus;
pub use source::StatusSource;
