use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required input: {field}")]
    MissingInputError { field: String },

    #[error("Invalid date format: {0}")]
    DateParseError(#[from] chrono::ParseError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl NumerologyError {
    /// Message shown on stderr when the CLI rejects its input.
    pub fn user_friendly_message(&self) -> String {
        match self {
            NumerologyError::InvalidInputError { field, reason, .. } => {
                format!("{} の入力が正しくありません（{}）", field, reason)
            }
            NumerologyError::MissingInputError { field } => {
                format!("{} を入力してください。", field)
            }
            NumerologyError::DateParseError(_) => {
                "生年月日は YYYY-MM-DD 形式で入力してください。".to_string()
            }
            NumerologyError::SerializationError(e) => format!("出力に失敗しました: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
