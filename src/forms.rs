//! 登录、注册、找回密码表单的本地校验
//!
//! 校验在提交前进行，失败时按字段给出提示，不发出任何请求。

/// 宽松的邮箱格式检查：存在 `x@y.z` 形式的无空白片段
pub fn looks_like_email(s: &str) -> bool {
    s.split_whitespace().any(|token| {
        token.char_indices().any(|(i, c)| {
            if c != '@' || i == 0 {
                return false;
            }
            let rest = &token[i + 1..];
            rest.char_indices()
                .any(|(j, d)| d == '.' && j > 0 && j + 1 < rest.len())
        })
    })
}

/// 同时含有小写字母、大写字母和数字
pub fn has_mixed_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

// =========================================================
// 密码强度
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// 强度条的格数 (0..=3)
    pub fn level(&self) -> u8 {
        *self as u8
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    if len == 0 {
        PasswordStrength::Empty
    } else if len < 6 {
        PasswordStrength::Weak
    } else if len < 8 || !has_mixed_classes(password) {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Strong
    }
}

// =========================================================
// 注册
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

/// 每个字段至多一条提示
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub terms: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.terms.is_none()
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), SignupErrors> {
        let mut errors = SignupErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Full name is required");
        } else if name.chars().count() < 2 {
            errors.name = Some("Name must be at least 2 characters");
        }

        errors.email = email_error(&self.email);

        if self.password.is_empty() {
            errors.password = Some("Password is required");
        } else if self.password.chars().count() < 6 {
            errors.password = Some("Password must be at least 6 characters");
        } else if !has_mixed_classes(&self.password) {
            errors.password = Some(
                "Password must contain at least one uppercase letter, one lowercase letter, and one number",
            );
        }

        if self.confirm_password.is_empty() {
            errors.confirm_password = Some("Please confirm your password");
        } else if self.confirm_password != self.password {
            errors.confirm_password = Some("Passwords do not match");
        }

        if !self.agree_to_terms {
            errors.terms = Some("You must agree to the terms and conditions");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !looks_like_email(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

// =========================================================
// 登录 / 找回密码
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), LoginErrors> {
        let errors = LoginErrors {
            email: self.email.trim().is_empty().then_some("Email is required"),
            password: self.password.is_empty().then_some("Password is required"),
        };
        if errors.email.is_none() && errors.password.is_none() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        match email_error(&self.email) {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupForm {
        SignupForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Engine42".to_string(),
            confirm_password: "Engine42".to_string(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.c"));
    }

    #[test]
    fn strength_levels() {
        assert_eq!(password_strength(""), PasswordStrength::Empty);
        assert_eq!(password_strength("Ab1"), PasswordStrength::Weak);
        assert_eq!(password_strength("Abc123"), PasswordStrength::Medium);
        assert_eq!(password_strength("abcdefgh1"), PasswordStrength::Medium);
        assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::Strong.level(), 3);
    }

    #[test]
    fn valid_signup_passes() {
        assert_eq!(valid_signup().validate(), Ok(()));
    }

    #[test]
    fn signup_reports_every_field() {
        let errors = SignupForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some("Full name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
        assert_eq!(errors.confirm_password, Some("Please confirm your password"));
        assert!(errors.terms.is_some());
    }

    #[test]
    fn signup_field_rules() {
        let mut form = valid_signup();
        form.name = " A ".to_string();
        form.password = "abcdef".to_string();
        form.confirm_password = "abcdeg".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name, Some("Name must be at least 2 characters"));
        assert!(errors.password.unwrap().starts_with("Password must contain"));
        assert_eq!(errors.confirm_password, Some("Passwords do not match"));
        assert_eq!(errors.email, None);
        assert_eq!(errors.terms, None);
    }

    #[test]
    fn login_and_forgot_password() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));

        let form = LoginForm {
            email: "user@test.com".to_string(),
            password: "abc".to_string(),
        };
        assert!(form.validate().is_ok());

        let forgot = ForgotPasswordForm {
            email: "nope".to_string(),
        };
        assert_eq!(forgot.validate(), Err("Please enter a valid email address"));
    }
}
