//! Contact message subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/contact body
//!     → ContactSubmission (raw, every field optional)
//!     → validation.rs (presence, trimming, email grammar, lengths)
//!     → NewContact (validated)
//!     → store.rs (assign id + timestamp, append)
//!     → Contact (stored, immutable)
//! ```
//!
//! # Design Decisions
//! - The store is injected through `AppState`, never a process-wide global
//! - Records are append-only: no update or delete path exists
//! - Listing order is insertion order

pub mod model;
pub mod store;
pub mod validation;

pub use model::{Contact, ContactId, ContactSubmission, NewContact};
pub use store::{ContactStore, InMemoryContactStore, StoreError};
pub use validation::{Field, ValidationError};
