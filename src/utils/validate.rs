use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：4 <= x <= 20
    if username.len() < 4 || username.len() > 20 {
        return Err("Username length must be between 4 and 20 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> Result<(), String> {
    let mut errors: Vec<&'static str> = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 常见弱密码检查
    let weak_passwords = ["password", "12345678", "password1", "Password1", "Abcd1234"];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_ok());
        assert!(validate_password("MarkBook2024").is_ok());
    }

    #[test]
    fn test_short_password() {
        let err = validate_password("Ab1").unwrap_err();
        assert!(err.contains("at least 8 characters"));
    }

    #[test]
    fn test_missing_character_classes() {
        assert!(
            validate_password("abcd1234")
                .unwrap_err()
                .contains("uppercase")
        );
        assert!(
            validate_password("ABCD1234")
                .unwrap_err()
                .contains("lowercase")
        );
        assert!(validate_password("AbcdEfgh").unwrap_err().contains("digit"));
    }

    #[test]
    fn test_common_password() {
        let err = validate_password("Password1").unwrap_err();
        assert!(err.contains("too common"));
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("teacher_01").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("admin@school.edu.pk").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }
}
