use thiserror::Error;

/// Time component a parse error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        }
    }
}

/// The two failure kinds of the time parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Malformed input, non-numeric component or wrong field count
    Format,
    /// Numeric component outside its valid domain
    Range,
}

/// Rejected time specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.describe())]
pub struct ParseError {
    kind: ParseErrorKind,
    field: Option<Field>,
}

impl ParseError {
    pub fn format(field: Option<Field>) -> Self {
        Self {
            kind: ParseErrorKind::Format,
            field,
        }
    }

    pub fn range(field: Field) -> Self {
        Self {
            kind: ParseErrorKind::Range,
            field: Some(field),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Field that failed, `None` for a wrong field count
    pub fn field(&self) -> Option<Field> {
        self.field
    }

    pub fn is_format(&self) -> bool {
        self.kind == ParseErrorKind::Format
    }

    pub fn is_range(&self) -> bool {
        self.kind == ParseErrorKind::Range
    }

    fn describe(&self) -> String {
        match (self.kind, self.field) {
            (ParseErrorKind::Format, None) => "time attribute has unexpected format".to_string(),
            (ParseErrorKind::Format, Some(field)) => {
                format!("time attribute has unexpected format for {}", field.name())
            }
            (ParseErrorKind::Range, Some(field)) => {
                format!("time attribute is out of range for {}", field.name())
            }
            (ParseErrorKind::Range, None) => "time attribute is out of range".to_string(),
        }
    }
}

/// Crate level error
#[derive(Debug, Error)]
pub enum ClockError {
    /// Time specification was rejected.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Host cannot deliver the requested visibility signal.
    #[error("host does not support the {requested} visibility signal")]
    VisibilityUnsupported { requested: &'static str },
    /// Config file could not be understood.
    #[error("config error: {0}")]
    Config(String),
    /// I/O failure while reading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ClockError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
