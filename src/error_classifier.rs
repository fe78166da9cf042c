use crate::library::error::LibraryError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, error: &LibraryError) -> LogLevel {
        match error {
            // Temporary server issues
            LibraryError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong base URL or a request the backend refuses outright
            LibraryError::Http { status, .. } if *status == 401 => LogLevel::Error,
            LibraryError::Http { status, .. } if *status == 403 => LogLevel::Error,
            LibraryError::Http { status, .. } if *status == 404 => LogLevel::Error,

            // Backend answered with something we cannot read
            LibraryError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> LibraryError {
        LibraryError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_http_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify(&http(404)), LogLevel::Error);
        assert_eq!(classifier.classify(&http(403)), LogLevel::Error);
        // A refused borrow (e.g. already lent out) is not a configuration problem.
        assert_eq!(classifier.classify(&http(400)), LogLevel::Warn);
    }

    #[test]
    fn test_classify_decode_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert_eq!(
            ErrorClassifier::new().classify(&LibraryError::Decode(err)),
            LogLevel::Error
        );
    }

    #[test]
    fn test_log_level_maps_to_level_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
