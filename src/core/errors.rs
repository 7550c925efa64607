use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagCloudError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Requested {requested} words but the text only has {available} distinct words")]
    InvalidWordCount { requested: usize, available: usize },

    #[error("Not an integer word count: '{0}'")]
    MalformedNumericInput(String),
}

impl From<std::io::Error> for TagCloudError {
    fn from(error: std::io::Error) -> Self {
        TagCloudError::Io(Box::new(error))
    }
}

impl From<tempfile::PersistError> for TagCloudError {
    fn from(error: tempfile::PersistError) -> Self {
        TagCloudError::Io(Box::new(error.error))
    }
}
