pub mod calculations;
pub mod catalog;
pub mod form;
pub mod models;
pub mod store;

pub use form::{Advance, FormSession};
pub use models::*;
pub use store::{DraftStore, DraftStoreError, InMemoryDraftStore};
