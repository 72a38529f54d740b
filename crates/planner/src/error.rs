#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! invalid_input {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::InvalidInput(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::InvalidInput(format!($fmt, $($arg)*)))
    };
}
