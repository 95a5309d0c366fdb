//! Authentication primitives library
//!
//! The two leaf components of the credential lifecycle:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-bounded token issuance and verification
//!
//! Neither module knows about the identity domain; both take plain field
//! arguments so services can layer their own models on top.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenCodec, TokenConfig, TokenKind};
//!
//! let config = TokenConfig::new("secret_key_at_least_32_bytes_long!");
//! let codec = TokenCodec::new(config).unwrap();
//!
//! let token = codec
//!     .issue_access_token("u1", "alice", "alice@example.com", false)
//!     .unwrap();
//! let claims = codec.verify(&token, TokenKind::Access).unwrap();
//! assert_eq!(claims.sub, "u1");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Algorithm;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenConfig;
pub use token::TokenError;
pub use token::TokenKind;
