use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrextError {
    #[error("Invalid argument '{param}': {message}")]
    InvalidArgument { param: String, message: String },

    #[error("Secure string is read-only")]
    ReadOnly,

    #[error("Secure string cannot hold more than {max} characters")]
    CapacityExceeded { max: usize },
}

impl StrextError {
    pub(crate) fn invalid_argument(param: &str, message: &str) -> Self {
        log::debug!("rejecting argument '{}': {}", param, message);
        StrextError::InvalidArgument {
            param: param.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StrextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        let err = StrextError::invalid_argument("selector", "Must provide a valid property selector");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'selector': Must provide a valid property selector"
        );
    }

    #[test]
    fn error_capacity_formats_correctly() {
        let err = StrextError::CapacityExceeded { max: 65536 };
        assert_eq!(
            err.to_string(),
            "Secure string cannot hold more than 65536 characters"
        );
    }
}
