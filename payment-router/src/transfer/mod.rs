//! Transfer request drafting and validation.
//!
//! A [`TransferDraft`] holds the form as edited. [`Validator::validate`]
//! checks it against every rule at once and, if nothing is wrong, produces
//! the [`TransferRequestPayload`] to send upstream.

mod config;
mod draft;
mod payload;
mod validate;
mod violation;


pub use config::ValidatorConfig;
pub use draft::{
    DestinationDraft, DestinationTarget, FeatureFlags, SourceDraft, SourceFunds, TransferDraft,
};
pub use payload::{Features, PayloadDestination, PayloadSource, TransferRequestPayload};
pub use validate::{ValidationResult, Validator};
pub use violation::{Field, Violation, Violations};
