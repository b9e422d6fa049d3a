//! Form checks run before any request is sent.

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn required(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), String> {
    required("Email", value)?;
    if value.contains('@') {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

pub fn password(value: &str) -> Result<(), String> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"))
    } else {
        Ok(())
    }
}

pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(email("jean@example.rw").is_ok());
        assert_eq!(email("  ").unwrap_err(), "Email is required");
        assert!(email("jean.example.rw").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(password("1234567").is_err());
        assert!(password("12345678").is_ok());
        assert!(password_confirmation("password1", "password1").is_ok());
        assert_eq!(
            password_confirmation("password1", "password2").unwrap_err(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_required_names_the_field() {
        assert_eq!(required("Full name", "").unwrap_err(), "Full name is required");
        assert!(required("Full name", "Jean").is_ok());
    }
}
