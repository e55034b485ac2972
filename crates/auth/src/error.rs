use solidarity_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("no user is signed in")]
    NotLoggedIn,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for SessionError {
    fn from(value: serde_json::Error) -> Self {
        Self::Store(StoreError::Serialization(value))
    }
}
