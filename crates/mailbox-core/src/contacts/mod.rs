//! Contacts kept alongside the mailbox for address lookup.

mod model;

pub use model::{Contact, ContactId, NewContact};
