use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Unknown lesson: '{0}' (run with --list to see every lesson)")]
    UnknownLesson(String),

    #[error("Index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Failed to parse config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Channel disconnected")]
    Disconnected,

    #[error("Worker thread panicked")]
    WorkerPanicked,
}

impl From<toml::de::Error> for LessonError {
    fn from(err: toml::de::Error) -> Self {
        LessonError::Config(err.to_string())
    }
}

impl<T> From<crossbeam::channel::SendError<T>> for LessonError {
    fn from(_: crossbeam::channel::SendError<T>) -> Self {
        LessonError::Disconnected
    }
}

impl From<crossbeam::channel::RecvError> for LessonError {
    fn from(_: crossbeam::channel::RecvError) -> Self {
        LessonError::Disconnected
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
