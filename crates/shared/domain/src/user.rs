//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// This is the public projection of a stored user record. The password
/// column stays in the persistence layer and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub username: String,
    pub is_active: bool,
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUser {
    /// User email address
    pub email: String,
    /// User display name
    pub name: String,
    /// Password, already hashed by the caller
    pub password: String,
    /// Unique handle
    pub username: String,
}

/// Partial user update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub username: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUser {
    /// Update that only flips the account to active
    pub fn activate() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }

    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.username.is_none() && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_sets_only_is_active() {
        let update = UpdateUser::activate();
        assert_eq!(update.is_active, Some(true));
        assert!(update.name.is_none());
        assert!(update.username.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_default_update_is_empty() {
        assert!(UpdateUser::default().is_empty());
    }

    #[test]
    fn test_user_serializes_without_password() {
        let user = User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            username: "a".to_string(),
            is_active: false,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["is_active"], false);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_create_user_deserializes() {
        let input: CreateUser = serde_json::from_str(
            r#"{"email":"t@t.com","name":"t","password":"p","username":"t"}"#,
        )
        .unwrap();

        assert_eq!(input.email, "t@t.com");
        assert_eq!(input.password, "p");
    }
}
