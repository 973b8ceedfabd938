use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid term: {months} months, a term must cover at least one month")]
    InvalidTerm {
        months: u32,
    },

    #[error("desired term {desired_term} exceeds original term {original_term}")]
    TermExtension {
        original_term: u32,
        desired_term: u32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
