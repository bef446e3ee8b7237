//! ADDV HTTP facade: thin axum adapter between the wire protocol in
//! `SPEC_FULL.md` §6 and the `addv-application` use cases.
pub mod dto;
pub mod handlers;
pub mod net;
pub mod routes;
pub mod state;

pub use routes::create_routes;
pub use state::AppState;
