//! Email records and the folders they live in.

mod folder;
mod model;

pub use folder::Folder;
pub use model::{Attachment, Email, EmailId, NewEmail};
