//! # mailbox-core
//!
//! Core state and helpers for the Mailbox email client.
//!
//! This crate provides:
//! - **Mailbox Store** - the in-memory email collection and view selection
//! - Domain models (emails, folders, attachments, contacts)
//! - Folder filtering and full-text search over the collection
//! - Compose, reply and forward flows
//! - Login/signup form validation and password strength scoring
//! - Display formatting (dates, file sizes, avatars)
//! - Keyboard shortcut dispatch
//!
//! ## Example
//!
//! ```ignore
//! use mailbox_core::{Folder, Mailbox, MemoryMailbox, SearchQuery};
//!
//! let mut mailbox = MemoryMailbox::with_sample_data();
//! let inbox = mailbox_core::store::in_folder(mailbox.emails(), Folder::Inbox);
//! let hits = SearchQuery::new("budget").filter(mailbox.emails());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod compose;
pub mod config;
pub mod contacts;
pub mod email;
mod error;
pub mod format;
pub mod sample;
pub mod shortcuts;
pub mod store;

pub use auth::{
    FormError, LoginForm, PasswordScorer, PasswordStrength, SignupForm, ZxcvbnScorer,
    is_valid_email,
};
pub use compose::{ComposeDraft, ComposeError};
pub use config::MailboxConfig;
pub use contacts::{Contact, ContactId, NewContact};
pub use email::{Attachment, Email, EmailId, Folder, NewEmail};
pub use error::{Error, Result};
pub use shortcuts::{Shortcut, ShortcutOutcome};
pub use store::{Mailbox, MemoryMailbox, SearchQuery};
