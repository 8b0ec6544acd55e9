use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// Error returned when a wire string does not name a cataloged claim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown claim name: {0:?}")]
pub struct UnknownClaimError(pub String);

/// Specification a claim name originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimOrigin {
    /// Registered JWT claims and header parameters (RFC 7519).
    Rfc7519,
    /// OpenID Connect Core standard, ID token, and scope claims.
    OidcCore,
    /// Members of the OpenID Connect address claim.
    OidcAddress,
    /// Ecosystem conventions shared by common token handlers.
    Interop,
}

impl ClaimOrigin {
    /// Returns the slug form of the origin.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimOrigin::Rfc7519 => "rfc7519",
            ClaimOrigin::OidcCore => "oidc-core",
            ClaimOrigin::OidcAddress => "oidc-address",
            ClaimOrigin::Interop => "interop",
        }
    }

    /// Returns the URL of the defining document.
    pub fn reference(&self) -> &'static str {
        match self {
            ClaimOrigin::Rfc7519 => "https://datatracker.ietf.org/doc/html/rfc7519#section-4",
            ClaimOrigin::OidcCore => {
                "https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims"
            }
            ClaimOrigin::OidcAddress => {
                "https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim"
            }
            ClaimOrigin::Interop => {
                "https://github.com/openiddict/openiddict-core/blob/dev/src/OpenIddict.Abstractions/OpenIddictConstants.cs"
            }
        }
    }
}

impl fmt::Display for ClaimOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical identifier for a registered claim name.
///
/// Each variant maps to exactly one wire string from [`crate::constants`];
/// the mapping is fixed and collision free. Serialization uses the wire
/// string, so a `ClaimName` can key claim maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimName {
    IdentityProvider,
    AccessTokenHash,
    Active,
    Address,
    Audience,
    AuthenticationContextReference,
    AuthenticationMethodReference,
    AuthenticationTime,
    AuthorizationServer,
    AuthorizedParty,
    Birthdate,
    ClientId,
    CodeHash,
    Country,
    Email,
    EmailVerified,
    ExpiresAt,
    FamilyName,
    Formatted,
    Gender,
    GivenName,
    IssuedAt,
    Issuer,
    Locale,
    Locality,
    JwtId,
    KeyId,
    MiddleName,
    Name,
    NameId,
    Nickname,
    Nonce,
    NotBefore,
    PhoneNumber,
    PhoneNumberVerified,
    Picture,
    PostalCode,
    PreferredUsername,
    Profile,
    Region,
    Role,
    Scope,
    StreetAddress,
    Subject,
    TokenType,
    Typ,
    UpdatedAt,
    Username,
    Website,
    Zoneinfo,
}

impl ClaimName {
    /// Every cataloged claim, in catalog order.
    pub const ALL: [ClaimName; 50] = [
        ClaimName::IdentityProvider,
        ClaimName::AccessTokenHash,
        ClaimName::Active,
        ClaimName::Address,
        ClaimName::Audience,
        ClaimName::AuthenticationContextReference,
        ClaimName::AuthenticationMethodReference,
        ClaimName::AuthenticationTime,
        ClaimName::AuthorizationServer,
        ClaimName::AuthorizedParty,
        ClaimName::Birthdate,
        ClaimName::ClientId,
        ClaimName::CodeHash,
        ClaimName::Country,
        ClaimName::Email,
        ClaimName::EmailVerified,
        ClaimName::ExpiresAt,
        ClaimName::FamilyName,
        ClaimName::Formatted,
        ClaimName::Gender,
        ClaimName::GivenName,
        ClaimName::IssuedAt,
        ClaimName::Issuer,
        ClaimName::Locale,
        ClaimName::Locality,
        ClaimName::JwtId,
        ClaimName::KeyId,
        ClaimName::MiddleName,
        ClaimName::Name,
        ClaimName::NameId,
        ClaimName::Nickname,
        ClaimName::Nonce,
        ClaimName::NotBefore,
        ClaimName::PhoneNumber,
        ClaimName::PhoneNumberVerified,
        ClaimName::Picture,
        ClaimName::PostalCode,
        ClaimName::PreferredUsername,
        ClaimName::Profile,
        ClaimName::Region,
        ClaimName::Role,
        ClaimName::Scope,
        ClaimName::StreetAddress,
        ClaimName::Subject,
        ClaimName::TokenType,
        ClaimName::Typ,
        ClaimName::UpdatedAt,
        ClaimName::Username,
        ClaimName::Website,
        ClaimName::Zoneinfo,
    ];

    /// Returns the canonical wire string for the claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimName::IdentityProvider => constants::IDENTITY_PROVIDER,
            ClaimName::AccessTokenHash => constants::ACCESS_TOKEN_HASH,
            ClaimName::Active => constants::ACTIVE,
            ClaimName::Address => constants::ADDRESS,
            ClaimName::Audience => constants::AUDIENCE,
            ClaimName::AuthenticationContextReference => {
                constants::AUTHENTICATION_CONTEXT_REFERENCE
            }
            ClaimName::AuthenticationMethodReference => constants::AUTHENTICATION_METHOD_REFERENCE,
            ClaimName::AuthenticationTime => constants::AUTHENTICATION_TIME,
            ClaimName::AuthorizationServer => constants::AUTHORIZATION_SERVER,
            ClaimName::AuthorizedParty => constants::AUTHORIZED_PARTY,
            ClaimName::Birthdate => constants::BIRTHDATE,
            ClaimName::ClientId => constants::CLIENT_ID,
            ClaimName::CodeHash => constants::CODE_HASH,
            ClaimName::Country => constants::COUNTRY,
            ClaimName::Email => constants::EMAIL,
            ClaimName::EmailVerified => constants::EMAIL_VERIFIED,
            ClaimName::ExpiresAt => constants::EXPIRES_AT,
            ClaimName::FamilyName => constants::FAMILY_NAME,
            ClaimName::Formatted => constants::FORMATTED,
            ClaimName::Gender => constants::GENDER,
            ClaimName::GivenName => constants::GIVEN_NAME,
            ClaimName::IssuedAt => constants::ISSUED_AT,
            ClaimName::Issuer => constants::ISSUER,
            ClaimName::Locale => constants::LOCALE,
            ClaimName::Locality => constants::LOCALITY,
            ClaimName::JwtId => constants::JWT_ID,
            ClaimName::KeyId => constants::KEY_ID,
            ClaimName::MiddleName => constants::MIDDLE_NAME,
            ClaimName::Name => constants::NAME,
            ClaimName::NameId => constants::NAME_ID,
            ClaimName::Nickname => constants::NICKNAME,
            ClaimName::Nonce => constants::NONCE,
            ClaimName::NotBefore => constants::NOT_BEFORE,
            ClaimName::PhoneNumber => constants::PHONE_NUMBER,
            ClaimName::PhoneNumberVerified => constants::PHONE_NUMBER_VERIFIED,
            ClaimName::Picture => constants::PICTURE,
            ClaimName::PostalCode => constants::POSTAL_CODE,
            ClaimName::PreferredUsername => constants::PREFERRED_USERNAME,
            ClaimName::Profile => constants::PROFILE,
            ClaimName::Region => constants::REGION,
            ClaimName::Role => constants::ROLE,
            ClaimName::Scope => constants::SCOPE,
            ClaimName::StreetAddress => constants::STREET_ADDRESS,
            ClaimName::Subject => constants::SUBJECT,
            ClaimName::TokenType => constants::TOKEN_TYPE,
            ClaimName::Typ => constants::TYP,
            ClaimName::UpdatedAt => constants::UPDATED_AT,
            ClaimName::Username => constants::USERNAME,
            ClaimName::Website => constants::WEBSITE,
            ClaimName::Zoneinfo => constants::ZONEINFO,
        }
    }

    /// Resolves a wire string back to its logical claim.
    ///
    /// The lookup is exact; wire names are case sensitive.
    pub fn from_wire(value: &str) -> Option<ClaimName> {
        ClaimName::ALL
            .iter()
            .copied()
            .find(|claim| claim.as_str() == value)
    }

    /// Returns the specification the claim originates from.
    pub fn origin(&self) -> ClaimOrigin {
        match self {
            ClaimName::Audience
            | ClaimName::ExpiresAt
            | ClaimName::IssuedAt
            | ClaimName::Issuer
            | ClaimName::JwtId
            | ClaimName::NotBefore
            | ClaimName::Subject
            | ClaimName::Typ => ClaimOrigin::Rfc7519,
            ClaimName::Address
            | ClaimName::Country
            | ClaimName::Formatted
            | ClaimName::Locality
            | ClaimName::PostalCode
            | ClaimName::Region
            | ClaimName::StreetAddress => ClaimOrigin::OidcAddress,
            ClaimName::IdentityProvider
            | ClaimName::Active
            | ClaimName::AuthorizationServer
            | ClaimName::ClientId
            | ClaimName::KeyId
            | ClaimName::NameId
            | ClaimName::Role
            | ClaimName::TokenType
            | ClaimName::Username => ClaimOrigin::Interop,
            _ => ClaimOrigin::OidcCore,
        }
    }
}

impl fmt::Display for ClaimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimName {
    type Err = UnknownClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimName::from_wire(s).ok_or_else(|| UnknownClaimError(s.to_owned()))
    }
}

impl Serialize for ClaimName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClaimName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ClaimName::from_wire(&value)
            .ok_or_else(|| serde::de::Error::custom(UnknownClaimError(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, to_string};

    #[test]
    fn wire_round_trip_covers_every_claim() {
        for claim in ClaimName::ALL {
            assert_eq!(ClaimName::from_wire(claim.as_str()), Some(claim));
            assert_eq!(claim.as_str().parse::<ClaimName>(), Ok(claim));
        }
    }

    #[test]
    fn unknown_wire_values_are_rejected() {
        for input in ["rfp", "SUB", "Email", "subject", ""] {
            assert_eq!(ClaimName::from_wire(input), None, "accepted {input:?}");
        }
        let err = "mystery".parse::<ClaimName>().unwrap_err();
        assert_eq!(err, UnknownClaimError("mystery".into()));
        assert_eq!(err.to_string(), "unknown claim name: \"mystery\"");
    }

    #[test]
    fn display_matches_wire_value() {
        assert_eq!(ClaimName::Subject.to_string(), "sub");
        assert_eq!(
            ClaimName::PhoneNumberVerified.to_string(),
            "phone_number_verified"
        );
        assert_eq!(ClaimOrigin::OidcAddress.to_string(), "oidc-address");
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = to_string(&ClaimName::ExpiresAt).expect("serialize claim");
        assert_eq!(json, "\"exp\"");
        let parsed: ClaimName = from_str("\"preferred_username\"").expect("deserialize claim");
        assert_eq!(parsed, ClaimName::PreferredUsername);
        assert!(from_str::<ClaimName>("\"not_a_claim\"").is_err());
    }

    #[test]
    fn origins_cite_their_documents() {
        assert_eq!(ClaimName::Subject.origin(), ClaimOrigin::Rfc7519);
        assert_eq!(ClaimName::Email.origin(), ClaimOrigin::OidcCore);
        assert_eq!(ClaimName::StreetAddress.origin(), ClaimOrigin::OidcAddress);
        assert_eq!(ClaimName::Role.origin(), ClaimOrigin::Interop);
        assert!(ClaimOrigin::Rfc7519.reference().contains("rfc7519"));
        assert!(ClaimOrigin::OidcCore.reference().contains("openid-connect-core"));
    }
}
