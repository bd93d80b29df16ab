use std::fmt;

/// Severity of a diagnostic attached to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => f.write_str("Error"),
            Level::Warning => f.write_str("Warning"),
            Level::Info => f.write_str("Info"),
        }
    }
}

/// A single diagnostic from the server.
///
/// Warnings are produced on demand from the reply by position and are not
/// consumed by reading: the same warning can be read any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    level: Level,
    code: u16,
    message: String,
}

impl Warning {
    pub fn new(level: Level, code: u16, message: impl Into<String>) -> Self {
        Self {
            level,
            code,
            message: message.into(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Server warning code; 0 when the server attached none.
    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if self.code != 0 {
            write!(f, " {}", self.code)?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_warning_display() {
        let w = Warning::new(Level::Warning, 1265, "Data truncated");
        assert_eq!(w.to_string(), "Warning 1265: Data truncated");
    }

    #[test]
    fn test_warning_display_without_code() {
        let w = Warning::new(Level::Info, 0, "note");
        assert_eq!(w.to_string(), "Info: note");
    }

    #[test]
    fn test_warning_accessors() {
        let w = Warning::new(Level::Error, 1064, "syntax error");
        assert_eq!(w.level(), Level::Error);
        assert_eq!(w.code(), 1064);
        assert_eq!(w.message(), "syntax error");
    }
}
