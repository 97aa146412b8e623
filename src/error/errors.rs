use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;

pub struct GenericError {
    message: String
}

impl Debug for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for GenericError {

}

impl GenericError {
    pub fn new(message: String) -> GenericError {
        GenericError { message }
    }
}

/*
    Wraps anything that can go wrong outside of the selection model itself
    i.e terminal I/O, reading settings or setting up logging
 */
pub enum ErrorWrapper {
    Io(io::Error),
    Settings(GenericError),
    Generic(GenericError)
}

impl ErrorWrapper {
    pub fn new_generic(message: String) -> ErrorWrapper {
        ErrorWrapper::Generic(GenericError::new(message))
    }

    pub fn new_settings(message: String) -> ErrorWrapper {
        ErrorWrapper::Settings(GenericError::new(message))
    }

    // ratatui backends carry their own error type
    pub fn from_backend<E: Display>(error: E) -> ErrorWrapper {
        ErrorWrapper::new_generic(format!("Terminal backend error: {}", error))
    }
}

impl Debug for ErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for ErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorWrapper::Io(e) => write!(f, "I/O error: {}", e),
            ErrorWrapper::Settings(e) => write!(f, "Settings error: {}", e),
            ErrorWrapper::Generic(e) => write!(f, "{}", e)
        }
    }
}

impl Error for ErrorWrapper {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ErrorWrapper::Io(e) => Some(e),
            ErrorWrapper::Settings(e) => Some(e),
            ErrorWrapper::Generic(e) => Some(e)
        }
    }
}

impl From<io::Error> for ErrorWrapper {
    fn from(e: io::Error) -> Self {
        ErrorWrapper::Io(e)
    }
}

impl From<serde_json::Error> for ErrorWrapper {
    fn from(e: serde_json::Error) -> Self {
        ErrorWrapper::new_settings(format!("Failed to parse settings JSON: {}", e))
    }
}

impl From<log4rs::config::runtime::ConfigErrors> for ErrorWrapper {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        ErrorWrapper::new_generic(format!("Invalid logging configuration: {}", e))
    }
}

impl From<log::SetLoggerError> for ErrorWrapper {
    fn from(e: log::SetLoggerError) -> Self {
        ErrorWrapper::new_generic(format!("Failed to initialise logging: {}", e))
    }
}
