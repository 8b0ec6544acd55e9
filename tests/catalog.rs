use std::collections::HashSet;

use claim_names::{ClaimName, ClaimOrigin, constants};

/// Recorded wire values, in catalog order. A release must never change an
/// existing entry; additions go at the end of the catalog and of this list.
const BASELINE: [&str; 50] = [
    "identityprovider",
    "at_hash",
    "active",
    "address",
    "aud",
    "acr",
    "amr",
    "auth_time",
    "as",
    "azp",
    "birthdate",
    "client_id",
    "c_hash",
    "country",
    "email",
    "email_verified",
    "exp",
    "family_name",
    "formatted",
    "gender",
    "given_name",
    "iat",
    "iss",
    "locale",
    "locality",
    "jti",
    "kid",
    "middle_name",
    "name",
    "nameid",
    "nickname",
    "nonce",
    "nbf",
    "phone_number",
    "phone_number_verified",
    "picture",
    "postal_code",
    "preferred_username",
    "profile",
    "region",
    "role",
    "scope",
    "street_address",
    "sub",
    "token_type",
    "typ",
    "updated_at",
    "username",
    "website",
    "zoneinfo",
];

#[test]
fn wire_values_are_collision_free() {
    let distinct: HashSet<&str> = ClaimName::ALL.iter().map(|claim| claim.as_str()).collect();
    assert_eq!(distinct.len(), ClaimName::ALL.len());
}

#[test]
fn wire_values_use_the_lowercase_wire_charset() {
    for claim in ClaimName::ALL {
        let value = claim.as_str();
        assert!(!value.is_empty(), "{claim:?} has an empty wire value");
        assert!(
            value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "{claim:?} wire value {value:?} leaves the wire charset"
        );
    }
}

#[test]
fn catalog_is_complete() {
    assert_eq!(ClaimName::ALL.len(), 50);
    let distinct: HashSet<ClaimName> = ClaimName::ALL.iter().copied().collect();
    assert_eq!(distinct.len(), 50, "catalog lists a claim twice");
}

#[test]
fn seed_values_match_their_specs() {
    assert_eq!(ClaimName::Subject.as_str(), "sub");
    assert_eq!(ClaimName::Issuer.as_str(), "iss");
    assert_eq!(ClaimName::Audience.as_str(), "aud");
    assert_eq!(ClaimName::ExpiresAt.as_str(), "exp");
    assert_eq!(ClaimName::Email.as_str(), "email");
    assert_eq!(
        ClaimName::PhoneNumberVerified.as_str(),
        "phone_number_verified"
    );
    assert_eq!(ClaimName::Role.as_str(), "role");
}

#[test]
fn wire_values_match_the_recorded_baseline() {
    let current: Vec<&str> = ClaimName::ALL.iter().map(|claim| claim.as_str()).collect();
    assert_eq!(current, BASELINE, "a wire value changed; this breaks every consumer");
}

#[test]
fn repeated_access_yields_the_same_value() {
    assert_eq!(ClaimName::Subject.as_str(), constants::SUBJECT);
    assert!(std::ptr::eq(
        ClaimName::Subject.as_str(),
        ClaimName::Subject.as_str()
    ));
}

#[test]
fn request_forgery_protection_stays_excluded() {
    assert_eq!(ClaimName::from_wire("rfp"), None);
    assert!(!BASELINE.contains(&"rfp"));
}

#[test]
fn origins_partition_the_catalog() {
    let count = |origin: ClaimOrigin| {
        ClaimName::ALL
            .iter()
            .filter(|claim| claim.origin() == origin)
            .count()
    };
    assert_eq!(count(ClaimOrigin::Rfc7519), 8);
    assert_eq!(count(ClaimOrigin::OidcAddress), 7);
    assert_eq!(count(ClaimOrigin::Interop), 9);
    assert_eq!(count(ClaimOrigin::OidcCore), 26);
}
