pub mod claims;
pub mod errors;
pub mod issuer;
pub mod settings;
pub mod validator;

pub use claims::Claims;
pub use claims::TokenSubject;
pub use errors::ClaimsError;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use settings::JwtSettings;
pub use validator::TokenValidator;
