use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use softdesk_domain::{DomainError, IdentityProvider, NewUser, User, UserId};
use softdesk_security::TokenIdentityProvider;

fn provider() -> TokenIdentityProvider {
    TokenIdentityProvider::new(b"integration-test-secret-0123", Duration::minutes(30)).unwrap()
}

fn user(id: u64, is_admin: bool) -> User {
    User::from_new(
        UserId::new(id),
        NewUser {
            username: format!("user{id}"),
            password_hash: String::new(),
            birth_date: NaiveDate::from_ymd_opt(2000, 2, 29).unwrap(),
            can_be_contacted: false,
            can_data_be_shared: false,
            is_admin,
        },
    )
}

#[test]
fn test_token_resolves_to_its_user() {
    let provider = provider();
    let token = provider.issue_token(&user(42, false)).unwrap();
    assert_eq!(provider.verify_token(&token.token).unwrap(), UserId::new(42));
}

#[test]
fn test_tampered_token_is_invalid_credentials() {
    let provider = provider();
    let mut token = provider.issue_token(&user(1, true)).unwrap().token;
    token.push('x');
    assert!(matches!(
        provider.verify_token(&token),
        Err(DomainError::InvalidCredentials { .. })
    ));
}

#[test]
fn test_weak_password_is_field_error() {
    let err = provider().validate_password("12345678").unwrap_err();
    assert!(matches!(err, DomainError::ValidationError { ref field, .. } if field == "password"));
}

#[test]
fn test_hash_never_contains_raw_password() {
    let provider = provider();
    let hash = provider.hash_password("correct-horse").unwrap();
    assert!(!hash.contains("correct-horse"));
    assert!(provider.verify_password("correct-horse", &hash));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_all_digit_passwords_rejected(digits in "[0-9]{8,24}") {
        prop_assert!(provider().validate_password(&digits).is_err());
    }

    #[test]
    fn prop_long_passwords_with_letters_accepted(prefix in "[a-zA-Z]{1,4}", rest in "[a-zA-Z0-9]{7,20}") {
        let raw = format!("{prefix}{rest}");
        prop_assert!(provider().validate_password(&raw).is_ok());
    }

    #[test]
    fn prop_short_passwords_rejected(raw in "[a-z0-9]{0,7}") {
        prop_assert!(provider().validate_password(&raw).is_err());
    }
}
