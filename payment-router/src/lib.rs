//! Payment route resolver and transfer validator.
//!
//! Answers two questions for a transfer form: "from this source, where can
//! money go?" and "is this transfer request complete and consistent enough
//! to submit?". The routing table is loaded once; everything after that is
//! a pure function of the table and the form.

pub mod config;
pub mod domain;
pub mod feed;
pub mod normalize;
pub mod routing;
pub mod transfer;
pub mod web;
