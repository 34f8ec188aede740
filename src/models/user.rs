use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account as stored in the `users` table.
///
/// Deliberately not `Serialize`: the password hash must never be written to a
/// response. Use [`UserSummary`] for anything leaving the service.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public view of a user returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a user with a freshly generated id.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("Ada".into(), "ada@example.com".into(), "hash".into());
        let b = User::new("Ada".into(), "ada@example.com".into(), "hash".into());

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_summary_omits_password_hash() {
        let user = User::new("Ada".into(), "ada@example.com".into(), "$2b$04$secret".into());
        let json = serde_json::to_value(user.summary()).unwrap();

        assert_eq!(json["id"], user.id.as_str());
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
