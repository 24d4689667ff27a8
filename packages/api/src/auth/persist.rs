//! Persisted session: the token pair and user record in durable storage.

use store::KeyValueStore;

use crate::error::ApiError;
use crate::models::{TokenPair, User};

/// Storage key of the serialised `{access, refresh}` pair.
pub const TOKENS_KEY: &str = "tokens";
/// Storage key of the serialised user record.
pub const USER_KEY: &str = "user";

/// Both halves of a persisted session.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub user: User,
    pub tokens: TokenPair,
}

/// Typed access to the two session entries of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    inner: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The stored session, or `None` unless both entries are present.
    ///
    /// An entry that does not parse is an error: the caller treats it as
    /// corruption and signs out.
    pub fn load(&self) -> Result<Option<StoredSession>, ApiError> {
        let (Some(tokens), Some(user)) = (self.inner.get(TOKENS_KEY)?, self.inner.get(USER_KEY)?)
        else {
            return Ok(None);
        };
        Ok(Some(StoredSession {
            tokens: serde_json::from_str(&tokens)?,
            user: serde_json::from_str(&user)?,
        }))
    }

    /// The stored token pair alone.
    pub fn tokens(&self) -> Result<Option<TokenPair>, ApiError> {
        match self.inner.get(TOKENS_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, user: &User, tokens: &TokenPair) -> Result<(), ApiError> {
        self.inner.set(TOKENS_KEY, &serde_json::to_string(tokens)?)?;
        self.inner.set(USER_KEY, &serde_json::to_string(user)?)?;
        Ok(())
    }

    /// Rewrite the token pair only, leaving the user record untouched.
    pub fn save_tokens(&self, tokens: &TokenPair) -> Result<(), ApiError> {
        self.inner.set(TOKENS_KEY, &serde_json::to_string(tokens)?)?;
        Ok(())
    }

    /// Remove both entries. Both removals are attempted even if one fails.
    pub fn clear(&self) -> Result<(), ApiError> {
        let tokens = self.inner.remove(TOKENS_KEY);
        let user = self.inner.remove(USER_KEY);
        tokens?;
        user?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use store::MemoryStore;

    fn user() -> User {
        User {
            id: 42,
            email: "a@b.com".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            role: Role::User,
            is_tenant_admin: false,
            tenant_id: Some(3),
            tenant_name: Some("Acme".into()),
            phone_number: None,
        }
    }

    #[test]
    fn test_save_load_clear() {
        let kv = MemoryStore::new();
        let store = TokenStore::new(kv.clone());
        assert!(store.load().unwrap().is_none());

        let tokens = TokenPair::new("A1", "R1");
        store.save(&user(), &tokens).unwrap();
        assert_eq!(
            kv.get(TOKENS_KEY).unwrap().as_deref(),
            Some(r#"{"access":"A1","refresh":"R1"}"#)
        );

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.user, user());
        assert_eq!(loaded.tokens, tokens);

        store.clear().unwrap();
        assert!(kv.is_empty());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_half_a_session_is_no_session() {
        let kv = MemoryStore::new();
        let store = TokenStore::new(kv.clone());
        store.save_tokens(&TokenPair::new("A1", "R1")).unwrap();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.tokens().unwrap(), Some(TokenPair::new("A1", "R1")));
    }

    #[test]
    fn test_corrupt_entry_is_an_error() {
        let kv = MemoryStore::new();
        kv.set(TOKENS_KEY, "{not json").unwrap();
        kv.set(USER_KEY, "{}").unwrap();
        let store = TokenStore::new(kv);
        assert!(matches!(store.load(), Err(ApiError::Decode(_))));
        assert!(store.tokens().is_err());
    }
}
