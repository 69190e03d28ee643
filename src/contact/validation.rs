use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-\(\)]{10,}$").expect("phone pattern"));

/// The fields of the contact form, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Message,
    ];

    /// The `name` attribute of the form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }

    /// DOM id of the control, used to focus it.
    pub fn input_id(self) -> String {
        format!("contact-{}", self.name())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Phone => validate_phone(value),
            Field::Service => validate_service(value),
            Field::Message => validate_message(value),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Пожалуйста, введите ваше имя")]
    NameMissing,
    #[error("Имя должно содержать минимум 2 символа")]
    NameTooShort,
    #[error("Имя не должно превышать 50 символов")]
    NameTooLong,
    #[error("Пожалуйста, введите email")]
    EmailMissing,
    #[error("Пожалуйста, введите корректный email")]
    EmailMalformed,
    #[error("Пожалуйста, введите корректный номер телефона")]
    PhoneMalformed,
    #[error("Пожалуйста, выберите услугу")]
    ServiceMissing,
    #[error("Пожалуйста, введите сообщение")]
    MessageMissing,
    #[error("Сообщение должно содержать минимум 10 символов")]
    MessageTooShort,
    #[error("Сообщение не должно превышать 1000 символов")]
    MessageTooLong,
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::NameMissing);
    }
    match char_len(value) {
        n if n < NAME_MIN_CHARS => Err(FieldError::NameTooShort),
        n if n > NAME_MAX_CHARS => Err(FieldError::NameTooLong),
        _ => Ok(()),
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::EmailMissing);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::EmailMalformed);
    }
    Ok(())
}

/// Phone is optional: blank input passes.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if !value.trim().is_empty() && !PHONE_RE.is_match(value) {
        return Err(FieldError::PhoneMalformed);
    }
    Ok(())
}

pub fn validate_service(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::ServiceMissing);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MessageMissing);
    }
    match char_len(value) {
        n if n < MESSAGE_MIN_CHARS => Err(FieldError::MessageTooShort),
        n if n > MESSAGE_MAX_CHARS => Err(FieldError::MessageTooLong),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(Field::Name.validate(""), Err(FieldError::NameMissing));
        assert_eq!(Field::Name.validate("   "), Err(FieldError::NameMissing));
        assert_eq!(Field::Name.validate("A"), Err(FieldError::NameTooShort));
        assert_eq!(Field::Name.validate(&"A".repeat(51)), Err(FieldError::NameTooLong));
        assert_eq!(Field::Name.validate(&"A".repeat(50)), Ok(()));
        assert_eq!(Field::Name.validate("Alex"), Ok(()));
        assert_eq!(Field::Name.validate("Юля"), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(Field::Email.validate(""), Err(FieldError::EmailMissing));
        assert_eq!(Field::Email.validate("bad"), Err(FieldError::EmailMalformed));
        assert_eq!(Field::Email.validate("a@b"), Err(FieldError::EmailMalformed));
        assert_eq!(Field::Email.validate("a b@c.d"), Err(FieldError::EmailMalformed));
        assert_eq!(Field::Email.validate("a@b.c"), Ok(()));
        assert_eq!(Field::Email.validate("ivan.petrov@mail.ru"), Ok(()));
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        assert_eq!(Field::Phone.validate(""), Ok(()));
        assert_eq!(Field::Phone.validate("   "), Ok(()));
        assert_eq!(Field::Phone.validate("12345"), Err(FieldError::PhoneMalformed));
        assert_eq!(Field::Phone.validate("call me maybe"), Err(FieldError::PhoneMalformed));
        assert_eq!(Field::Phone.validate("+1 (555) 123-4567"), Ok(()));
        assert_eq!(Field::Phone.validate("89991234567"), Ok(()));
    }

    #[test]
    fn service_requires_selection() {
        assert_eq!(Field::Service.validate(""), Err(FieldError::ServiceMissing));
        assert_eq!(Field::Service.validate("web"), Ok(()));
    }

    #[test]
    fn message_rules() {
        assert_eq!(Field::Message.validate(" \n "), Err(FieldError::MessageMissing));
        assert_eq!(Field::Message.validate("Привет"), Err(FieldError::MessageTooShort));
        assert_eq!(
            Field::Message.validate(&"x".repeat(1001)),
            Err(FieldError::MessageTooLong)
        );
        assert_eq!(Field::Message.validate("Нужен сайт для кафе"), Ok(()));
    }

    #[test]
    fn error_text_is_user_facing() {
        assert_eq!(
            FieldError::NameTooShort.to_string(),
            "Имя должно содержать минимум 2 символа"
        );
        assert_eq!(FieldError::ServiceMissing.to_string(), "Пожалуйста, выберите услугу");
    }

    #[test]
    fn only_phone_is_optional() {
        assert_eq!(Field::Email.input_id(), "contact-email");
        assert!(!Field::Phone.is_required());
        assert!(Field::Service.is_required());
    }
}
