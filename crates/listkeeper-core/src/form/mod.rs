//! Item Form
//!
//! Collects user input into a candidate item and validates it.
//! Nothing here assigns ids or touches storage.

mod draft;
mod validation;

pub use draft::{ItemCandidate, ItemDraft, OptionalInput};
pub use validation::{parse_positive, Field, FormError, ValidationErrors};
