//! Web layer for the payment router.
//!
//! A JSON API over the resolver and validator: the option lists a transfer
//! form shows, and the payload (or violations) for a submitted draft.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
