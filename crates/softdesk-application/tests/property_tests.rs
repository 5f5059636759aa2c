//! Property tests for registration rules

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use softdesk_application::dto::RegisterUserCommand;
use softdesk_application::errors::ApplicationError;
use softdesk_application::Services;
use softdesk_permissions::Actor;
use softdesk_persistence::InMemoryStore;
use softdesk_security::TokenIdentityProvider;

fn services() -> Services {
    let identity =
        TokenIdentityProvider::new(b"property-tests-secret-value", Duration::minutes(5)).unwrap();
    Services::new(Arc::new(InMemoryStore::new()), Arc::new(identity))
}

fn register(password: String, password2: String) -> Result<(), ApplicationError> {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        services()
            .users
            .register(
                &Actor::Anonymous,
                RegisterUserCommand {
                    username: "prop".into(),
                    password,
                    password2,
                    birth_date: NaiveDate::from_ymd_opt(1985, 3, 3).unwrap(),
                    can_be_contacted: false,
                    can_data_be_shared: false,
                },
            )
            .await
            .map(|_| ())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_differing_passwords_rejected(
        password in "[a-z]{4}[0-9]{4}[a-z]{0,8}",
        password2 in "[a-z]{4}[0-9]{4}[a-z]{0,8}",
    ) {
        prop_assume!(password != password2);
        let err = register(password, password2).unwrap_err();
        prop_assert_eq!(
            err,
            ApplicationError::validation("password", "Password fields didn't match.")
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn prop_equal_passwords_accepted(password in "[a-z]{4}[0-9]{4}[a-z]{0,8}") {
        prop_assert!(register(password.clone(), password).is_ok());
    }
}
