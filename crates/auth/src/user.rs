use serde::{Deserialize, Serialize};

use solidarity_core::{Entity, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Records saved without an id are given a fresh one when read.
    #[serde(default)]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Overwrite the fields present in `update`; absent fields are kept.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial profile edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.avatar.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_given_fields() {
        let mut user = User::new("amal@example.org", "Amal");
        user.merge(ProfileUpdate {
            avatar: Some("/avatars/amal.png".to_string()),
            ..Default::default()
        });
        assert_eq!(user.name, "Amal");
        assert_eq!(user.email, "amal@example.org");
        assert_eq!(user.avatar.as_deref(), Some("/avatars/amal.png"));
    }

    #[test]
    fn avatar_is_optional_in_json() {
        let json = format!(
            r#"{{"id":"{}","name":"Amal","email":"amal@example.org"}}"#,
            UserId::new()
        );
        let user: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn id_is_optional_in_json() {
        let user: User =
            serde_json::from_str(r#"{"name":"Amal","email":"amal@example.org"}"#).unwrap();
        assert_eq!(user.name, "Amal");
        assert_eq!(user.email, "amal@example.org");
    }
}
