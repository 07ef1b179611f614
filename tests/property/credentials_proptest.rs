//! Property-based tests for the Basic credential gate

use base64::{engine::general_purpose::STANDARD, Engine};
use proptest::prelude::*;
use user_api::backend::auth::credentials::{parse_basic_header, CredentialSet};
use user_api::backend::auth::sessions::{TokenClaims, TokenService};
use user_api::backend::error::AuthError;
use user_api::backend::server::config::{AppConfig, TokenLifetime};

proptest! {
    #[test]
    fn test_basic_header_roundtrip(
        username in "[^:\\x00]{1,24}",
        password in "[ -~]{0,32}",
    ) {
        let header = format!("Basic {}", STANDARD.encode(format!("{username}:{password}")));
        let parsed = parse_basic_header(Some(&header)).unwrap();

        prop_assert_eq!(parsed.username, username);
        prop_assert_eq!(parsed.password, password);
    }

    #[test]
    fn test_only_exact_password_accepted(
        password in "[ -~]{1,32}",
        attempt in "[ -~]{1,32}",
    ) {
        let gate = CredentialSet::single("admin", password.clone());
        let result = gate.verify("admin", &attempt);

        if attempt == password {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }
    }

    #[test]
    fn test_valid_credentials_yield_token_for_username(
        username in "[^:\\x00]{1,24}",
        password in "[ -~]{0,32}",
    ) {
        prop_assume!(!username.trim().is_empty());
        let config = AppConfig::builder()
            .basic_auth_user(username.clone())
            .basic_auth_pass(password.clone())
            .jwt_secret("proptest-secret")
            .token_lifetime(TokenLifetime::parse("1h").unwrap())
            .build()
            .unwrap();
        let gate = CredentialSet::from_config(&config);
        let tokens = TokenService::from_config(&config);

        let header = format!("Basic {}", STANDARD.encode(format!("{username}:{password}")));
        let subject = gate.authenticate(Some(&header)).unwrap();
        let issued = tokens.issue(&TokenClaims::new(subject)).unwrap();
        let claims = tokens.verify(&issued.token).unwrap();

        prop_assert_eq!(claims.sub, username);
    }

    #[test]
    fn test_whitespace_subject_is_issued(subject in "[ \\t]{1,8}") {
        let tokens = TokenService::new(b"proptest-secret", TokenLifetime::parse("1h").unwrap());
        let issued = tokens.issue(&TokenClaims::new(subject.clone())).unwrap();

        prop_assert_eq!(tokens.verify(&issued.token).unwrap().sub, subject);
    }
}
