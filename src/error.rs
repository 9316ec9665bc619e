use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitCalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown activity level '{value}'{}", did_you_mean(.suggestion))]
    UnknownActivityLevel {
        value: String,
        suggestion: Option<String>,
    },

    #[error("Unknown gender '{value}'{}", did_you_mean(.suggestion))]
    UnknownGender {
        value: String,
        suggestion: Option<String>,
    },

    #[error("Invalid meal catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, FitCalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_activity_message_with_suggestion() {
        let err = FitCalError::UnknownActivityLevel {
            value: "moderat".to_string(),
            suggestion: Some("moderate".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown activity level 'moderat' (did you mean 'moderate'?)"
        );
    }

    #[test]
    fn test_unknown_gender_message_without_suggestion() {
        let err = FitCalError::UnknownGender {
            value: "x".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown gender 'x'");
    }
}
