// Application services built on top of the data and metrics modules
pub mod dashboard;

pub use dashboard::{Dashboard, DashboardView, StatusMessage};
