//! AutoIMS Console - view-model layer of the admin console
//!
//! Each data screen is a view controller: it owns the local list cache, the
//! popup state machine, and the notice slot, and talks to the backend only
//! through the session guard. Rendering is someone else's problem; these
//! controllers expose state, they do not draw it.

pub mod guard;
pub mod nav;
pub mod views;

pub use guard::{Guarded, SessionGuard};
pub use nav::{LoggingNavigator, Navigator, RecordingNavigator, Route};
pub use views::{
    BillingView, DashboardView, EmployeeView, InventoryView, ListState, LoadPhase, Notice,
    PopupState, ServiceRequestView, Severity,
};
