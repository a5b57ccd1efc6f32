use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Invalid selection '{input}': {reason}")]
    InvalidSelection { input: String, reason: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No more questions in category: {0}")]
    CategoryExhausted(String),

    #[error("No unused question worth {points} in category {category}")]
    PointsNotFound { category: String, points: u32 },

    #[error("Cannot {action} while {phase}")]
    InvalidTransition { action: String, phase: String },

    #[error("The game is over")]
    GameOver,

    #[error("Invalid question: {message}")]
    InvalidQuestion { message: String },

    #[error("Unknown question id: {0}")]
    UnknownQuestion(u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,
    Persistence,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuizError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuizError::InvalidSelection { .. }
            | QuizError::UnknownCategory(_)
            | QuizError::CategoryExhausted(_)
            | QuizError::PointsNotFound { .. }
            | QuizError::InvalidTransition { .. }
            | QuizError::GameOver => ErrorCategory::UserInput,
            QuizError::IoError(_) | QuizError::SerializationError(_) => ErrorCategory::Persistence,
            QuizError::TomlParseError(_)
            | QuizError::ConfigValidationError { .. }
            | QuizError::InvalidConfigValueError { .. }
            | QuizError::MissingConfigError { .. } => ErrorCategory::Configuration,
            QuizError::InvalidQuestion { .. } | QuizError::UnknownQuestion(_) => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::Persistence => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// 遊戲迴圈可以繼續執行的錯誤
    pub fn is_recoverable(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuizError::InvalidSelection { .. } => "Invalid choice. Try again.".to_string(),
            QuizError::UnknownCategory(name) => format!("There is no category called '{}'.", name),
            QuizError::CategoryExhausted(_) => "No more questions in this category.".to_string(),
            QuizError::PointsNotFound { .. } => "Invalid money value.".to_string(),
            QuizError::InvalidTransition { .. } => "That action is not available right now.".to_string(),
            QuizError::GameOver => "The game is already over.".to_string(),
            QuizError::IoError(_) => "Could not access the high score file.".to_string(),
            QuizError::SerializationError(_) => "Could not encode the high scores.".to_string(),
            QuizError::TomlParseError(_) => "The config file is not valid TOML.".to_string(),
            QuizError::ConfigValidationError { field, .. }
            | QuizError::InvalidConfigValueError { field, .. }
            | QuizError::MissingConfigError { field } => {
                format!("The configuration value '{}' is not valid.", field)
            }
            QuizError::InvalidQuestion { .. } | QuizError::UnknownQuestion(_) => {
                "The question bank is broken.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::UserInput => "Pick one of the listed numbers or names",
            ErrorCategory::Persistence => {
                "Check that the high score path is writable and not a directory"
            }
            ErrorCategory::Configuration => "Fix the config file or command line flags and retry",
            ErrorCategory::Internal => "This is a bug in the question bank, please report it",
        }
    }
}
