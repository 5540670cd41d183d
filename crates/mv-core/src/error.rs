use thiserror::Error;

pub type MvResult<T> = Result<T, MvError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Could not parse '{text}' as a number")]
    Parse { text: String },

    #[error("Missing value for {what}")]
    Missing { what: &'static str },
}
