//! Urgency Triage Server — HTTP boundary around the classifier.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
