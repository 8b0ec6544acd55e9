//! Wire-format names for registered identity claims.
//!
//! Sources:
//! - RFC 7519 (JSON Web Token): <https://datatracker.ietf.org/doc/html/rfc7519#section-4>
//! - OpenID Connect Core 1.0: <https://openid.net/specs/openid-connect-core-1_0.html>
//!
//! Entries without a citation follow ecosystem convention (OpenIddict and
//! the Microsoft IdentityModel token handlers use the same strings).
//!
//! These values appear verbatim in serialized tokens; renaming one is a
//! breaking change for every consumer.

/// Identity provider that authenticated the end-user, typically a local
/// built-in provider.
pub const IDENTITY_PROVIDER: &str = "identityprovider";

/// Access token hash, binds an ID token to its access token.
/// <https://openid.net/specs/openid-connect-core-1_0.html#CodeIDToken>
pub const ACCESS_TOKEN_HASH: &str = "at_hash";

/// Whether the presented token is currently active.
pub const ACTIVE: &str = "active";

/// End-user's preferred postal address, carried as a JSON structure.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim>
pub const ADDRESS: &str = "address";

/// Recipients the token is intended for.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.3>
pub const AUDIENCE: &str = "aud";

/// Authentication context class reference satisfied by the authentication.
/// <https://openid.net/specs/openid-connect-core-1_0.html#IDToken>
pub const AUTHENTICATION_CONTEXT_REFERENCE: &str = "acr";

/// Authentication methods used (e.g. password, otp, mfa).
/// <https://openid.net/specs/openid-connect-core-1_0.html#IDToken>
pub const AUTHENTICATION_METHOD_REFERENCE: &str = "amr";

/// Time at which the end-user authentication occurred.
/// <https://openid.net/specs/openid-connect-core-1_0.html#IDToken>
pub const AUTHENTICATION_TIME: &str = "auth_time";

/// Authorization server that issued the token.
pub const AUTHORIZATION_SERVER: &str = "as";

/// Party to which the ID token was issued.
/// <https://openid.net/specs/openid-connect-core-1_0.html#IDToken>
pub const AUTHORIZED_PARTY: &str = "azp";

/// End-user's birthday in ISO 8601 `YYYY-MM-DD` format.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const BIRTHDATE: &str = "birthdate";

/// Client identifier registered with the authorization server.
pub const CLIENT_ID: &str = "client_id";

/// Authorization code hash, prevents code substitution in hybrid flows.
/// <https://openid.net/specs/openid-connect-core-1_0.html#HybridIDToken>
pub const CODE_HASH: &str = "c_hash";

/// Country name component of the address claim.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim>
pub const COUNTRY: &str = "country";

/// End-user's preferred e-mail address.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const EMAIL: &str = "email";

/// Whether the end-user's e-mail address has been verified.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const EMAIL_VERIFIED: &str = "email_verified";

/// Expiration time on or after which the token must be rejected.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.4>
pub const EXPIRES_AT: &str = "exp";

/// Surname(s) or last name(s) of the end-user.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const FAMILY_NAME: &str = "family_name";

/// Full mailing address formatted for display, possibly multi-line.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim>
pub const FORMATTED: &str = "formatted";

/// End-user's gender.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const GENDER: &str = "gender";

/// Given name(s) or first name(s) of the end-user.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const GIVEN_NAME: &str = "given_name";

/// Time at which the token was issued.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.6>
pub const ISSUED_AT: &str = "iat";

/// Principal that issued the token.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.1>
pub const ISSUER: &str = "iss";

/// End-user's locale as a BCP 47 language tag.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const LOCALE: &str = "locale";

/// City or locality component of the address claim.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim>
pub const LOCALITY: &str = "locality";

/// Unique identifier for the token itself.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.7>
pub const JWT_ID: &str = "jti";

/// Identifier of the key used to sign the token.
pub const KEY_ID: &str = "kid";

/// Middle name(s) of the end-user.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const MIDDLE_NAME: &str = "middle_name";

/// End-user's full name in displayable form, including titles and suffixes.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const NAME: &str = "name";

/// Unique name identifier for the end-user.
pub const NAME_ID: &str = "nameid";

/// Casual name of the end-user, which may differ from the given name.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const NICKNAME: &str = "nickname";

/// Value associating a client session with an ID token to mitigate replay.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AuthRequest>
pub const NONCE: &str = "nonce";

/// Time before which the token must be rejected.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.5>
pub const NOT_BEFORE: &str = "nbf";

/// End-user's preferred telephone number, E.164 recommended.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const PHONE_NUMBER: &str = "phone_number";

/// Whether the end-user's phone number has been verified.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const PHONE_NUMBER_VERIFIED: &str = "phone_number_verified";

/// URL of the end-user's profile picture (an image file, not a page).
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const PICTURE: &str = "picture";

/// Zip code or postal code component of the address claim.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim>
pub const POSTAL_CODE: &str = "postal_code";

/// Shorthand name the end-user wishes to be referred to as, e.g. `janedoe`.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const PREFERRED_USERNAME: &str = "preferred_username";

/// URL of the end-user's profile page.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const PROFILE: &str = "profile";

/// State, province, prefecture, or region component of the address claim.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim>
pub const REGION: &str = "region";

/// Roles granted to the end-user.
pub const ROLE: &str = "role";

/// Scope values requested by or granted to the client.
/// <https://openid.net/specs/openid-connect-core-1_0.html#ScopeClaims>
pub const SCOPE: &str = "scope";

/// Full street address component, which may span multiple lines.
/// <https://openid.net/specs/openid-connect-core-1_0.html#AddressClaim>
pub const STREET_ADDRESS: &str = "street_address";

/// Principal that is the subject of the token.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1.2>
pub const SUBJECT: &str = "sub";

/// Authentication scheme of the token (Bearer, API key, etc.).
pub const TOKEN_TYPE: &str = "token_type";

/// Media type of the complete token, declared in the JOSE header.
/// <https://datatracker.ietf.org/doc/html/rfc7519#section-5.1>
pub const TYP: &str = "typ";

/// Time the end-user's information was last updated, in unix seconds.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const UPDATED_AT: &str = "updated_at";

/// Login name of the end-user, usually equal to the preferred username.
pub const USERNAME: &str = "username";

/// URL of the end-user's web page or blog.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const WEBSITE: &str = "website";

/// End-user's time zone from the IANA zoneinfo database, e.g. `Europe/Paris`.
/// <https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims>
pub const ZONEINFO: &str = "zoneinfo";
