//! The server-rendered status page.

pub mod links;
pub mod poller;
pub mod render;
pub mod view;

pub use links::{DashboardLink, LinkState, default_links};
pub use poller::{DashboardHandle, Poller};
pub use render::PageRenderer;
pub use view::{DashboardView, ViewPhase};
