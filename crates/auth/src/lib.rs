//! `solidarity-auth` — local sign-in state.
//!
//! There is no credential check: signing in records who the user says they are
//! in the injected key/value store, the same way the browser app kept it in
//! local storage.

pub mod error;
pub mod session;
pub mod user;

pub use error::SessionError;
pub use session::{LOGGED_IN_KEY, Session, USER_KEY};
pub use user::{ProfileUpdate, User};
