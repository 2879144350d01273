//! Form-field validation rules and their user-facing messages.
//!
//! DESIGN
//! ======
//! Each rule is a pure predicate paired with a fixed message constant.
//! Callers validate before issuing requests and surface the message next
//! to the offending field; the messages are part of the product copy and
//! must not be reworded here.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const EMAIL_MESSAGE: &str = "Invalid email format";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 3 characters long, contain at least one letter and one number and must includes only letters and numbers.";
pub const FIRST_NAME_MESSAGE: &str = "First name must be at least 3 characters long and contains only letters.";
pub const LAST_NAME_MESSAGE: &str = "Last name must be at least 3 characters long and contains only letters.";

/// Loose email shape: no whitespace, an `@` with at least one character
/// before it, and a `.` after the `@` with at least one character on each
/// side. Deliberately permissive; the server owns real address policy.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = email
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '@')
        .map(|(i, _)| i)
    else {
        return false;
    };
    let domain = &email[at + 1..];
    domain
        .char_indices()
        .skip(1)
        .any(|(i, c)| c == '.' && i + 1 < domain.len())
}

/// At least three characters, ASCII letters and digits only, with at least
/// one letter and at least one digit.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 3
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// At least three ASCII letters, nothing else.
#[must_use]
pub fn is_valid_first_name(name: &str) -> bool {
    is_letters_only(name)
}

/// At least three ASCII letters, nothing else.
#[must_use]
pub fn is_valid_last_name(name: &str) -> bool {
    is_letters_only(name)
}

fn is_letters_only(name: &str) -> bool {
    name.len() >= 3 && name.chars().all(|c| c.is_ascii_alphabetic())
}
