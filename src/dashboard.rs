//! Dashboard domain logic shared by the controller and the renderer.
//!
//! Nothing here touches egui or the network: forms are plain strings,
//! requests are state values, and plots are lookups into a training report.

pub mod advisory;
pub mod form;
pub mod plot_image;
pub mod plots;
pub mod prediction;
pub mod request;
pub mod training;

pub use advisory::{AdvisoryRow, Impact, advisory_rows};
pub use form::{FieldSpec, FormState};
pub use plots::PlotCategory;
pub use request::RequestStatus;
