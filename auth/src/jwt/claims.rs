use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub id: String,
    pub email: String,
}

impl TokenSubject {
    pub fn new(id: impl ToString, email: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
        }
    }
}

/// Claims carried by an access token.
///
/// Every field is required; a token missing any of them is rejected.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Subject email address
    pub email: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject issued at `issued_at` and valid for `lifetime`.
    ///
    /// The same value is used as issuer and audience. Returns `None` when
    /// the expiration falls outside the representable time range.
    pub fn for_subject(
        subject: &TokenSubject,
        issuer: &str,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Option<Self> {
        let expiration = issued_at.checked_add_signed(lifetime)?;

        Some(Self {
            sub: subject.id.clone(),
            email: subject.email.clone(),
            iss: issuer.to_string(),
            aud: issuer.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// Check if token is expired. A token is expired from `exp` onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Check if token was issued after the given instant.
    pub fn is_issued_after(&self, current_timestamp: i64) -> bool {
        current_timestamp < self.iat
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_subject() {
        let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let subject = TokenSubject::new("u1", "a@b.com");

        let claims =
            Claims::for_subject(&subject, "rastro", issued_at, Duration::hours(6)).unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.iss, "rastro");
        assert_eq!(claims.aud, "rastro");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 6 * 60 * 60);
    }

    #[test]
    fn test_for_subject_expiration_overflow() {
        let subject = TokenSubject::new("u1", "a@b.com");

        let claims = Claims::for_subject(
            &subject,
            "rastro",
            DateTime::<Utc>::MAX_UTC,
            Duration::hours(1),
        );
        assert!(claims.is_none());
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "u1".to_string(),
            email: "a@b.com".to_string(),
            iss: "rastro".to_string(),
            aud: "rastro".to_string(),
            iat: 0,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_is_issued_after() {
        let claims = Claims {
            sub: "u1".to_string(),
            email: "a@b.com".to_string(),
            iss: "rastro".to_string(),
            aud: "rastro".to_string(),
            iat: 500,
            exp: 1000,
        };

        assert!(claims.is_issued_after(499));
        assert!(!claims.is_issued_after(500));
    }

    #[test]
    fn test_serialized_field_names() {
        let claims = Claims {
            sub: "u1".to_string(),
            email: "a@b.com".to_string(),
            iss: "rastro".to_string(),
            aud: "rastro".to_string(),
            iat: 1,
            exp: 2,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sub": "u1",
                "email": "a@b.com",
                "iss": "rastro",
                "aud": "rastro",
                "iat": 1,
                "exp": 2,
            })
        );
    }
}
