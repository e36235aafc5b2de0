#[derive(Debug, Clone, PartialEq)]
pub enum LayerError {
    Io(String),
    Parse(String),
    InvalidConfig(String),
    Logging(String),
}

impl std::fmt::Display for LayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerError::Io(msg) => {
                write!(f, "I/O error: {}", msg)
            }
            LayerError::Parse(msg) => {
                write!(f, "Invalid config file format - {}", msg)
            }
            LayerError::InvalidConfig(msg) => {
                write!(f, "Invalid config: {}", msg)
            }
            LayerError::Logging(msg) => {
                write!(f, "Logging setup failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LayerError {}

impl From<std::io::Error> for LayerError {
    fn from(err: std::io::Error) -> Self {
        LayerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LayerError {
    fn from(err: serde_json::Error) -> Self {
        LayerError::Parse(err.to_string())
    }
}

pub type LayerResult<T> = Result<T, LayerError>;
