/*!
 * Process Module
 * Process records, lifecycle states, and input validation
 */

pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::{Process, ProcessSpec, ProcessState};
pub use validation::{sanitize, validate, RawProcess};
