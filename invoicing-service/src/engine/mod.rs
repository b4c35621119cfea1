//! Invoice computation and update-consistency engine.
//!
//! Everything here is pure and synchronous: functions read their arguments
//! and return new values. Storage and transport live elsewhere.

pub mod assembler;
pub mod error;
pub mod planner;
pub mod totals;
pub mod validation;
pub mod words;

pub use assembler::{assemble_invoice, assemble_invoice_at};
pub use error::EngineError;
pub use planner::{apply_update, plan_update, UpdatePlan};
pub use totals::compute_totals;
pub use words::amount_in_words;
