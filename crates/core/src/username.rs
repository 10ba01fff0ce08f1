//! Username and nickname validation.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum username length.
pub const MIN_USERNAME_LEN: usize = 3;

/// Maximum username length.
pub const MAX_USERNAME_LEN: usize = 30;

/// Maximum nickname length.
pub const MAX_NICKNAME_LEN: usize = 50;

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("static regex must compile"))
}

/// Validate a username: length bounds and `[a-zA-Z0-9_]` charset.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.len() < MIN_USERNAME_LEN || username.len() > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be {MIN_USERNAME_LEN}-{MAX_USERNAME_LEN} characters"
        )));
    }
    if !username_regex().is_match(username) {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, and underscores".to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional nickname: non-blank when present, within length limit.
pub fn validate_nickname(nickname: Option<&str>) -> Result<(), CoreError> {
    if let Some(nick) = nickname {
        if nick.trim().is_empty() {
            return Err(CoreError::Validation(
                "Nickname must not be blank".to_string(),
            ));
        }
        if nick.len() > MAX_NICKNAME_LEN {
            return Err(CoreError::Validation(format!(
                "Nickname too long: {} chars (max {MAX_NICKNAME_LEN})",
                nick.len()
            )));
        }
    }
    Ok(())
}
