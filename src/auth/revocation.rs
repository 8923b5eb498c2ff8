use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;

/// Tokens revoked by logout, kept until their own expiry
#[derive(Clone, Default)]
pub struct RevokedTokens {
    tokens: Arc<RwLock<HashMap<String, i64>>>,
}

impl RevokedTokens {
    /// Process-wide list consulted by the auth middleware
    pub fn global() -> &'static RevokedTokens {
        static INSTANCE: OnceLock<RevokedTokens> = OnceLock::new();
        INSTANCE.get_or_init(RevokedTokens::default)
    }

    /// Revoke `token` until `expires_at` (unix seconds). Entries that have
    /// already expired are dropped on the way in.
    pub async fn revoke(&self, token: &str, expires_at: i64) {
        let now = Utc::now().timestamp();
        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, exp| *exp > now);
        if expires_at > now {
            tokens.insert(token.to_string(), expires_at);
        }
    }

    pub async fn is_revoked(&self, token: &str) -> bool {
        self.tokens.read().await.contains_key(token)
    }

    #[cfg(test)]
    async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revoked_token_is_reported() {
        let revoked = RevokedTokens::default();
        let exp = Utc::now().timestamp() + 60;

        assert!(!revoked.is_revoked("abc").await);
        revoked.revoke("abc", exp).await;
        assert!(revoked.is_revoked("abc").await);
        assert!(!revoked.is_revoked("xyz").await);
    }

    #[tokio::test]
    async fn expired_entries_are_pruned() {
        let revoked = RevokedTokens::default();
        let now = Utc::now().timestamp();

        revoked.revoke("stale", now - 10).await;
        assert_eq!(revoked.count().await, 0);

        revoked.revoke("live", now + 60).await;
        assert_eq!(revoked.count().await, 1);
    }
}
