//! Canonical claim names for JWT and OpenID Connect tokens.
//!
//! A single catalog mapping logical claim identifiers to the exact wire
//! strings that appear in serialized tokens, so services share one source
//! of truth instead of hand-typed literals. The crate carries no parsing,
//! validation, or issuance logic; issuers and verifiers consume it as a
//! lookup table only.
//!
//! ```
//! use claim_names::{ClaimName, constants};
//!
//! assert_eq!(constants::SUBJECT, "sub");
//!
//! let claim: ClaimName = "email".parse()?;
//! assert_eq!(claim, ClaimName::Email);
//! assert_eq!(claim.origin().as_str(), "oidc-core");
//! # Ok::<(), claim_names::UnknownClaimError>(())
//! ```

pub mod claim;
pub mod constants;

pub use claim::{ClaimName, ClaimOrigin, UnknownClaimError};
