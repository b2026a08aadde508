use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::Username;

pub(super) const MIN_PASSWORD_LENGTH: usize = 12;

/// Registration password policy: length counted in characters, four
/// character classes, and no copy of the account name.
pub(super) fn validate_password(username: &Username, password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let missing: Vec<&str> = [
        (password.chars().any(char::is_uppercase), "an uppercase letter"),
        (password.chars().any(char::is_lowercase), "a lowercase letter"),
        (password.chars().any(|c| c.is_ascii_digit()), "a digit"),
        (password.chars().any(|c| !c.is_alphanumeric()), "a symbol"),
    ]
    .into_iter()
    .filter_map(|(present, class)| (!present).then_some(class))
    .collect();
    if !missing.is_empty() {
        return Err(ApplicationError::validation(format!(
            "password is missing {}",
            missing.join(", ")
        )));
    }

    if password
        .to_lowercase()
        .contains(&username.as_str().to_lowercase())
    {
        return Err(ApplicationError::validation(
            "password must not contain the username",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> Username {
        Username::new(value).unwrap()
    }

    #[test]
    fn weak_passwords_are_rejected() {
        let writer = name("writer");
        assert!(validate_password(&writer, "short1!A").is_err());
        assert!(validate_password(&writer, "alllowercase123!").is_err());
        assert!(validate_password(&writer, "NoDigitsHere!!").is_err());
        assert!(validate_password(&writer, "Str0ng!Passw0rd").is_ok());
    }

    #[test]
    fn error_lists_every_missing_class() {
        let err = validate_password(&name("writer"), "abcdefghijklmn").unwrap_err();
        let ApplicationError::Validation(message) = err else {
            panic!("expected validation error");
        };
        assert!(message.contains("uppercase"));
        assert!(message.contains("digit"));
        assert!(message.contains("symbol"));
        assert!(!message.contains("lowercase"));
    }

    #[test]
    fn username_inside_password_is_rejected() {
        assert!(validate_password(&name("writer"), "My-Wr1ter-Secret").is_err());
    }
}
