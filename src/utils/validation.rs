use crate::utils::error::{QuizError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(QuizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_chars(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let count = value.chars().count();
    if count > max_chars {
        return Err(QuizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value is {} characters long, at most {} allowed", count, max_chars),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QuizError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("leaderboard.path", "highscores.json").is_ok());
        assert!(validate_path("leaderboard.path", "").is_err());
        assert!(validate_path("leaderboard.path", "   ").is_err());
        assert!(validate_path("leaderboard.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("leaderboard.capacity", 10usize, 1, 100).is_ok());
        assert!(validate_range("leaderboard.capacity", 0usize, 1, 100).is_err());
        assert!(validate_range("leaderboard.capacity", 101usize, 1, 100).is_err());
    }

    #[test]
    fn test_validate_name_length() {
        assert!(validate_non_empty_string("game.player_name", "Ann").is_ok());
        assert!(validate_non_empty_string("game.player_name", " ").is_err());
        assert!(validate_max_chars("game.player_name", "Ñino", 4).is_ok());
        assert!(validate_max_chars("game.player_name", "Ñinos", 4).is_err());
    }
}
