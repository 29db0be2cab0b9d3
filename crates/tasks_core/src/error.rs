use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    InvalidInput(String),
    IndexOutOfBounds(String),
    InvalidData(String),
    Storage(String),
    Editor(String),
    Transport(String),
    Io(String),
}

impl AppError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn index_out_of_bounds<M: Into<String>>(message: M) -> Self {
        Self::IndexOutOfBounds(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn storage<M: Into<String>>(message: M) -> Self {
        Self::Storage(message.into())
    }

    pub fn editor<M: Into<String>>(message: M) -> Self {
        Self::Editor(message.into())
    }

    pub fn transport<M: Into<String>>(message: M) -> Self {
        Self::Transport(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::IndexOutOfBounds(_) => "index_out_of_bounds",
            Self::InvalidData(_) => "invalid_data",
            Self::Storage(_) => "storage_error",
            Self::Editor(_) => "editor_error",
            Self::Transport(_) => "transport_error",
            Self::Io(_) => "io_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) => message,
            Self::IndexOutOfBounds(message) => message,
            Self::InvalidData(message) => message,
            Self::Storage(message) => message,
            Self::Editor(message) => message,
            Self::Transport(message) => message,
            Self::Io(message) => message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}
