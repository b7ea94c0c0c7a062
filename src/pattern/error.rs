use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("placeholder opened at byte {start} in template '{template}' is never closed")]
    UnterminatedPlaceholder { template: String, start: usize },
    #[error("placeholder '{placeholder}' in template '{template}' has an empty parameter name")]
    ParameterNameEmpty {
        template: String,
        placeholder: String,
    },
    #[error("parameter name '{name}' in template '{template}' contains ':'")]
    ParameterNameContainsColon { template: String, name: String },
    #[error(
        "parameter name '{name}' in template '{template}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        template: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in template '{template}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        template: String,
        name: String,
        invalid: char,
    },
    #[error("duplicate parameter name '{name}' in template '{template}'")]
    DuplicateParameterName { template: String, name: String },
    #[error("template '{template}' does not compile to a valid pattern: {message}")]
    InvalidPattern { template: String, message: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
