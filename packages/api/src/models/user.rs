//! # User and authentication models
//!
//! ## [`User`]
//!
//! The user record returned by `/auth/login/`, `/auth/register/` and `/auth/me/`
//! and persisted under the `user` storage key. The backend serialises the
//! tenant reference as `tenant`, either a bare id or (on `/auth/me/`) the full
//! tenant object; both are read into [`User::tenant_id`].
//!
//! ## [`Role`]
//!
//! `admin` is the system administrator and the only role admitted to admin-only
//! routes. `tenant_admin` manages a single tenant; `user` is a regular member.
//!
//! ## Request bodies
//!
//! [`RegisterData`], [`ProfileUpdate`], [`PasswordChange`] and [`NewUser`]
//! serialise with optional fields omitted, so the backend's partial-update
//! semantics apply.

use serde::{Deserialize, Deserializer, Serialize};

/// Role of a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    TenantAdmin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::TenantAdmin => "tenant_admin",
            Role::User => "user",
        }
    }
}

/// A console user as seen by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub is_tenant_admin: bool,
    #[serde(
        default,
        alias = "tenant",
        deserialize_with = "tenant_reference",
        skip_serializing_if = "Option::is_none"
    )]
    pub tenant_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl User {
    /// Full name, falling back to the email address when both name parts are blank.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    /// System administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Administrator of their own tenant, by flag or by role.
    pub fn manages_tenant(&self) -> bool {
        self.is_tenant_admin || self.role == Role::TenantAdmin
    }
}

/// Accepts `null`, a numeric id, or a tenant object carrying an `id`.
fn tenant_reference<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::Object(obj)) => obj.get("id").and_then(|id| id.as_i64()),
        _ => None,
    })
}

/// Access/refresh bearer token pair, persisted under the `tokens` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// Body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: TokenPair,
}

/// Self-service registration. A present `tenant_name` creates a new tenant
/// with the registrant as its administrator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
}

impl RegisterData {
    pub fn creates_tenant(&self) -> bool {
        self.tenant_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Partial update of the signed-in user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

/// A user created by an administrator from the users view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_json(tenant: serde_json::Value) -> serde_json::Value {
        json!({
            "id": 7,
            "email": "owner@acme.test",
            "first_name": "Ada",
            "last_name": "Byron",
            "role": "tenant_admin",
            "is_tenant_admin": true,
            "tenant": tenant,
            "tenant_name": "Acme",
            "profile": null,
            "is_active": true
        })
    }

    #[test]
    fn test_user_reads_tenant_id_from_number() {
        let user: User = serde_json::from_value(user_json(json!(3))).unwrap();
        assert_eq!(user.tenant_id, Some(3));
        assert_eq!(user.role, Role::TenantAdmin);
        assert!(user.manages_tenant());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_user_reads_tenant_id_from_object() {
        let user: User =
            serde_json::from_value(user_json(json!({"id": 11, "name": "Acme"}))).unwrap();
        assert_eq!(user.tenant_id, Some(11));
    }

    #[test]
    fn test_user_without_tenant() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "email": "root@console.test",
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(user.tenant_id, None);
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "root@console.test");
    }

    #[test]
    fn test_stored_user_reloads() {
        let user: User = serde_json::from_value(user_json(json!(3))).unwrap();
        let stored = serde_json::to_string(&user).unwrap();
        assert!(stored.contains("\"tenant_id\":3"));
        let reloaded: User = serde_json::from_str(&stored).unwrap();
        assert_eq!(reloaded, user);
        assert_eq!(reloaded.display_name(), "Ada Byron");
    }

    #[test]
    fn test_register_data_omits_absent_optionals() {
        let data = RegisterData {
            email: "new@acme.test".into(),
            password: "secret123".into(),
            password2: "secret123".into(),
            first_name: "New".into(),
            last_name: "Person".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(&data).unwrap();
        assert!(body.get("tenant_name").is_none());
        assert!(body.get("phone_number").is_none());
        assert!(!data.creates_tenant());

        let with_tenant = RegisterData {
            tenant_name: Some("Acme".into()),
            ..data
        };
        assert!(with_tenant.creates_tenant());
    }
}
