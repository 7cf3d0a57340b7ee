//! Authentication helpers used by HTTP handlers.
//!
//! Credential checks live here so the HTTP modules stay focused on
//! request/response mapping. The credential store is a fixture; a real
//! deployment would swap this for a directory-backed implementation.

use crate::domain::Error;

use super::ApiResult;

/// Validated login credentials.
#[derive(Debug)]
pub struct LoginCredentials {
    username: String,
    password: String,
}

/// Validation failures for [`LoginCredentials`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username is empty or whitespace only.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl LoginCredentials {
    /// Validate raw credential parts.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        if username.trim().is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// The supplied username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The supplied password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Check credentials and return the authenticated subject.
pub fn authenticate(credentials: &LoginCredentials) -> ApiResult<String> {
    if credentials.username() == "admin" && credentials.password() == "password" {
        Ok("admin".to_owned())
    } else {
        Err(Error::unauthorized("invalid credentials"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn accepts_fixture_credentials() {
        let credentials = LoginCredentials::try_from_parts("admin", "password").expect("valid");
        assert_eq!(authenticate(&credentials).expect("subject"), "admin");
    }

    #[rstest]
    fn rejects_wrong_password() {
        let credentials = LoginCredentials::try_from_parts("admin", "wrong").expect("valid shape");
        let error = authenticate(&credentials).expect_err("should fail");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(" ", "password", LoginValidationError::EmptyUsername)]
    #[case("admin", "", LoginValidationError::EmptyPassword)]
    fn rejects_blank_parts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        assert_eq!(
            LoginCredentials::try_from_parts(username, password).expect_err("invalid"),
            expected
        );
    }
}
