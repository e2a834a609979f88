//! Platform credentials

use std::fmt;

/// Which kind of principal a platform token authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// OAuth access token of a human user
    User,
    /// Token of the service's own bot account
    Bot,
}

/// Opaque platform credential
///
/// The secret is never printed: `Debug` is redacted and there is no
/// `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct PlatformToken {
    kind: TokenKind,
    secret: String,
}

impl PlatformToken {
    /// Wrap a user's OAuth access token
    pub fn user(secret: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::User,
            secret: secret.into(),
        }
    }

    /// Wrap the service bot token
    pub fn bot(secret: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Bot,
            secret: secret.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        match self.kind {
            TokenKind::User => format!("Bearer {}", self.secret),
            TokenKind::Bot => format!("Bot {}", self.secret),
        }
    }
}

impl fmt::Debug for PlatformToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformToken")
            .field("kind", &self.kind)
            .field("secret", &"[redacted]")
            .finish()
    }
}
