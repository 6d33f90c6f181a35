use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;

use super::claims::Claims;
use super::errors::ClaimsError;
use super::errors::JwtError;
use super::settings::JwtSettings;

const EXPECTED_ALGORITHM: &str = "HS256";

/// Only the algorithm is inspected before the signature is checked.
#[derive(Debug, Deserialize)]
struct JoseHeader {
    alg: String,
}

/// Validates access tokens produced by [`TokenIssuer`](super::TokenIssuer).
///
/// Validation is stateless and runs in a fixed order: structure, algorithm,
/// signature, then claims. The first failing step decides the error.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
}

impl TokenValidator {
    pub fn new(settings: &JwtSettings) -> Self {
        // Signature only; time, issuer and audience are checked against the
        // caller-supplied clock in `check_claims`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(settings.secret_bytes()),
            validation,
            issuer: settings.issuer().to_string(),
            audience: settings.audience().to_string(),
        }
    }

    /// Validate a token against the current time.
    ///
    /// # Errors
    /// * `MalformedToken` - Token is not three base64url segments with a JSON header
    /// * `UnsupportedAlgorithm` - Header declares anything other than HS256
    /// * `InvalidSignature` - Signature does not match header and payload
    /// * `InvalidClaims` - Issuer, audience or lifetime check failed
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as of `now`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let header_segment = Self::header_segment(token)?;
        Self::check_header(header_segment)?;

        let claims = self.verify_signature(token)?;
        self.check_claims(&claims, now.timestamp())?;

        Ok(claims)
    }

    fn header_segment(token: &str) -> Result<&str, JwtError> {
        let segments: Vec<&str> = token.split('.').collect();

        match segments.as_slice() {
            [header, payload, signature]
                if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
            {
                Ok(header)
            }
            _ => Err(JwtError::MalformedToken),
        }
    }

    /// Decode the header once: the algorithm name is checked first, then the
    /// full header shape, so that `decode` only fails on signature or claims.
    fn check_header(header_segment: &str) -> Result<(), JwtError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(header_segment)
            .map_err(|_| JwtError::MalformedToken)?;
        let header: JoseHeader =
            serde_json::from_slice(&bytes).map_err(|_| JwtError::MalformedToken)?;

        if header.alg != EXPECTED_ALGORITHM {
            return Err(JwtError::UnsupportedAlgorithm(header.alg));
        }

        serde_json::from_slice::<Header>(&bytes).map_err(|_| JwtError::MalformedToken)?;

        Ok(())
    }

    fn verify_signature(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::Json(err) => {
                    JwtError::InvalidClaims(ClaimsError::Unreadable(err.to_string()))
                }
                _ => JwtError::MalformedToken,
            })
    }

    fn check_claims(&self, claims: &Claims, now: i64) -> Result<(), ClaimsError> {
        if claims.iss != self.issuer {
            return Err(ClaimsError::IssuerMismatch);
        }
        if claims.aud != self.audience {
            return Err(ClaimsError::AudienceMismatch);
        }
        if claims.is_expired(now) {
            return Err(ClaimsError::Expired);
        }
        if claims.is_issued_after(now) {
            return Err(ClaimsError::NotYetValid);
        }

        Ok(())
    }
}
