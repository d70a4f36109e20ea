//! The multi-step application form state machine.

mod session;

pub use session::{Advance, FormSession};
