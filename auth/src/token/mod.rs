pub mod claims;
pub mod codec;
pub mod config;
pub mod errors;

pub use claims::TokenClaims;
pub use claims::TokenKind;
pub use codec::TokenCodec;
pub use config::TokenConfig;
pub use errors::TokenError;

// Re-exported so consumers can name the signing algorithm without a direct
// jsonwebtoken dependency.
pub use jsonwebtoken::Algorithm;
