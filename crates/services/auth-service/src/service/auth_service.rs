//! Authentication service - Staff login and account registration.
//!
//! Credentials are only ever compared through a [`CredentialHasher`]; the
//! plain password never reaches the repository.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::repository::UserRepository;
use common::{AppError, AppResult};
use domain::{
    CredentialHasher, Cuil, Employee, EmployeeRole, Password, RegisterUser, User, UserResponse,
    INVALID_LOGIN_MESSAGE, MISSING_CREDENTIALS_MESSAGE, PASSWORD_MISMATCH_MESSAGE,
};

const DUMMY_SECRET: &str = "no-account-has-this-password";

/// Real Argon2 hash, built once, that login verifies against when the email
/// is unknown so both failures run the same hash.
static DUMMY_PASSWORD: Lazy<Option<Password>> = Lazy::new(|| Password::new(DUMMY_SECRET).ok());

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check an email/password pair and return the matching profile
    async fn login(&self, email: &str, password: &str) -> AppResult<UserResponse>;

    /// Register a new employee account.
    ///
    /// `Ok(None)` means the repository did not store the account
    /// (e.g. the email is already taken).
    async fn register(&self, data: RegisterUser) -> AppResult<Option<UserResponse>>;
}

/// Concrete implementation of AuthService backed by a user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }
}

/// Return the field value, or the "cannot be omitted" error naming `label`.
fn required<'a>(value: &'a Option<String>, label: &str) -> AppResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::invalid_input(format!(
            "The field '{}' cannot be omitted.",
            label
        ))),
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: &str, password: &str) -> AppResult<UserResponse> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::invalid_input(MISSING_CREDENTIALS_MESSAGE));
        }

        let found = self.users.find_by_email(email.trim()).await?;

        // Verify even without a user so unknown emails cost the same
        let stored = found
            .as_ref()
            .map(|user| &user.password)
            .or(DUMMY_PASSWORD.as_ref());
        let password_valid = stored.is_some_and(|hash| self.hasher.verify(password, hash));

        match found {
            Some(user) if password_valid => {
                info!(user_id = %user.id, role = %user.role(), "User logged in");
                Ok(UserResponse::from(&user))
            }
            _ => {
                debug!("Login rejected");
                Err(AppError::not_found(INVALID_LOGIN_MESSAGE))
            }
        }
    }

    async fn register(&self, data: RegisterUser) -> AppResult<Option<UserResponse>> {
        let email = required(&data.email, "Email")?;
        let password = required(&data.password, "Password")?;
        let confirmation = required(&data.confirm_password, "Confirmation")?;
        let name = required(&data.name, "Name")?;
        let last_name = required(&data.last_name, "Last name")?;
        let cuil = required(&data.cuil, "CUIL")?;
        let licence = required(&data.licence, "Licence")?;
        let phone_number = required(&data.phone_number, "Phone number")?;
        let employee_type = required(&data.employee_type, "Employee type")?;

        if password != confirmation {
            return Err(AppError::mismatch(PASSWORD_MISMATCH_MESSAGE));
        }

        let role = EmployeeRole::from(employee_type);
        let cuil = Cuil::new(cuil)?;
        let password = self.hasher.hash(password)?;

        let email = email.trim().to_string();
        let employee = Employee {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            cuil,
            email: email.clone(),
            phone_number: phone_number.trim().to_string(),
            licence: licence.trim().to_string(),
            role,
        };

        match self.users.create(User::new(email, password, employee)).await? {
            Some(user) => {
                info!(user_id = %user.id, role = %user.role(), "User registered");
                Ok(Some(UserResponse::from(&user)))
            }
            None => {
                warn!("Registration was not stored");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use domain::Argon2Hasher;
    use mockall::predicate::eq;

    const EMAIL: &str = "ramirobrito@gmail.com";
    const PASSWORD: &str = "bocateamo";

    fn stored_user() -> User {
        let employee = Employee {
            id: Uuid::new_v4(),
            name: "Ramiro".to_string(),
            last_name: "Brito".to_string(),
            cuil: Cuil::new("20-42365986-7").unwrap(),
            email: EMAIL.to_string(),
            phone_number: "381754963".to_string(),
            licence: "LO78Q".to_string(),
            role: EmployeeRole::Doctor,
        };
        User::new(
            EMAIL.to_string(),
            Password::new(PASSWORD).unwrap(),
            employee,
        )
    }

    fn registration() -> RegisterUser {
        RegisterUser {
            email: Some(EMAIL.to_string()),
            password: Some(PASSWORD.to_string()),
            confirm_password: Some(PASSWORD.to_string()),
            name: Some("Ramiro".to_string()),
            last_name: Some("Brito".to_string()),
            cuil: Some("20-42365986-7".to_string()),
            licence: Some("LO78Q".to_string()),
            phone_number: Some("381754963".to_string()),
            employee_type: Some("Doctor".to_string()),
        }
    }

    fn service(repo: MockUserRepository) -> Authenticator {
        Authenticator::new(Arc::new(repo), Arc::new(Argon2Hasher))
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq(EMAIL))
            .times(1)
            .returning(|_| Ok(Some(stored_user())));

        let response = service(repo).login(EMAIL, PASSWORD).await.unwrap();

        assert_eq!(response.email, EMAIL);
        assert_eq!(response.name, "Ramiro");
        assert_eq!(response.last_name, "Brito");
        assert_eq!(response.employee_type, "Doctor");
    }

    #[tokio::test]
    async fn test_login_trims_email_before_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq(EMAIL))
            .times(1)
            .returning(|_| Ok(Some(stored_user())));

        let response = service(repo)
            .login(" ramirobrito@gmail.com ", PASSWORD)
            .await
            .unwrap();

        assert_eq!(response.email, EMAIL);
    }

    #[test]
    fn test_dummy_password_is_a_real_argon2_hash() {
        let dummy = DUMMY_PASSWORD.as_ref().unwrap();

        assert!(dummy.as_str().starts_with("$argon2id$"));
        // Only a parseable hash can ever match, so this proves Argon2 runs
        assert!(Argon2Hasher.verify(DUMMY_SECRET, dummy));
        assert!(!Argon2Hasher.verify(PASSWORD, dummy));
    }

    #[tokio::test]
    async fn test_login_missing_credentials_skips_lookup() {
        for (email, password) in [("", PASSWORD), (EMAIL, ""), ("   ", PASSWORD), (EMAIL, " ")] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_email().never();

            let err = service(repo).login(email, password).await.unwrap_err();
            assert!(
                matches!(err, AppError::InvalidInput(ref m) if m == MISSING_CREDENTIALS_MESSAGE)
            );
        }
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let err = service(repo)
            .login("nobody@gmail.com", PASSWORD)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == INVALID_LOGIN_MESSAGE));
    }

    #[tokio::test]
    async fn test_login_wrong_password_matches_unknown_email_message() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq(EMAIL))
            .times(1)
            .returning(|_| Ok(Some(stored_user())));

        let wrong_password = service(repo)
            .login(EMAIL, "riverteamo")
            .await
            .unwrap_err();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let unknown_email = service(repo)
            .login("nobody@gmail.com", "riverteamo")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::NotFound(_)));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_propagates_repository_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Err(AppError::internal("connection reset")));

        let err = service(repo).login(EMAIL, PASSWORD).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_register_success_stores_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user: &User| {
                user.email == EMAIL
                    && user.password.as_str() != PASSWORD
                    && user.password.verify(PASSWORD)
                    && user.employee.cuil.as_str() == "20-42365986-7"
            })
            .times(1)
            .returning(|user| Ok(Some(user)));

        let response = service(repo).register(registration()).await.unwrap().unwrap();

        assert_eq!(response.email, EMAIL);
        assert_eq!(response.cuil, "20-42365986-7");
        assert_eq!(response.licence, "LO78Q");
        assert_eq!(response.employee_type, "Doctor");
    }

    #[tokio::test]
    async fn test_register_reports_first_missing_field() {
        let cases: [(&str, fn(&mut RegisterUser)); 9] = [
            ("Email", |d| d.email = None),
            ("Password", |d| d.password = None),
            ("Confirmation", |d| d.confirm_password = None),
            ("Name", |d| d.name = Some("  ".to_string())),
            ("Last name", |d| d.last_name = None),
            ("CUIL", |d| d.cuil = Some(String::new())),
            ("Licence", |d| d.licence = None),
            ("Phone number", |d| d.phone_number = None),
            ("Employee type", |d| d.employee_type = None),
        ];

        for (label, clear) in cases {
            let mut data = registration();
            clear(&mut data);

            let mut repo = MockUserRepository::new();
            repo.expect_create().never();

            let err = service(repo).register(data).await.unwrap_err();
            let expected = format!("The field '{}' cannot be omitted.", label);
            assert!(matches!(err, AppError::InvalidInput(ref m) if *m == expected));
        }
    }

    #[tokio::test]
    async fn test_register_checks_fields_in_order() {
        let data = RegisterUser {
            email: Some(EMAIL.to_string()),
            ..Default::default()
        };

        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let err = service(repo).register(data).await.unwrap_err();
        assert_eq!(err.to_string(), "The field 'Password' cannot be omitted.");
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let mut data = registration();
        data.confirm_password = Some("riverteamo".to_string());

        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let err = service(repo).register(data).await.unwrap_err();
        assert!(matches!(err, AppError::Mismatch(ref m) if m == PASSWORD_MISMATCH_MESSAGE));
    }

    #[tokio::test]
    async fn test_register_role_mapping() {
        let cases = [
            ("doctor", EmployeeRole::Doctor),
            ("NURSE", EmployeeRole::Nurse),
            ("Nurse", EmployeeRole::Nurse),
            ("Receptionist", EmployeeRole::Employee),
        ];

        for (raw, expected) in cases {
            let mut data = registration();
            data.employee_type = Some(raw.to_string());

            let mut repo = MockUserRepository::new();
            repo.expect_create()
                .withf(move |user: &User| user.role() == expected)
                .times(1)
                .returning(|user| Ok(Some(user)));

            let response = service(repo).register(data).await.unwrap().unwrap();
            assert_eq!(response.employee_type, expected.as_str());
        }
    }

    #[tokio::test]
    async fn test_register_invalid_cuil() {
        let mut data = registration();
        data.cuil = Some("20423659867".to_string());

        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let err = service(repo).register(data).await.unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[tokio::test]
    async fn test_register_not_stored_is_soft_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(1).returning(|_| Ok(None));

        let result = service(repo).register(registration()).await.unwrap();
        assert!(result.is_none());
    }
}
