use thiserror::Error;

use crate::domain::error::DomainError;

/// Caller-facing text for plan configuration problems.
pub const CONTACT_OPERATOR_MESSAGE: &str =
    "Contact your operator, service configuration issue occurred";

/// Exit code for any failure without a dedicated code.
pub const GENERIC_EXIT_CODE: i32 = 1;

/// Exit code telling the broker the binding it asked to delete is gone.
pub const BINDING_NOT_FOUND_EXIT_CODE: i32 = 41;

/// Exit code telling the broker the binding it asked to create exists.
pub const BINDING_ALREADY_EXISTS_EXIT_CODE: i32 = 49;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors produced by an instance group mapper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("no instance groups provided")]
    NoInstanceGroups,

    #[error("job '{job}' not provided")]
    JobNotProvided { job: String },

    #[error("job '{job}' provided {count} times, by {}", releases.join(", "))]
    JobProvidedMultipleTimes {
        job: String,
        count: usize,
        releases: Vec<String>,
    },
}

/// Failure to start an external command at all.
///
/// A command that starts and exits non-zero is not an error at this level;
/// see [`crate::port::outbound::command::CommandStatus`].
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Closed set of binding outcomes the broker can react to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("binding already exists")]
    AlreadyExists,

    #[error("binding not found")]
    NotFound,

    /// Any other failure. The message is what the caller is shown and is
    /// usually empty.
    #[error("{0}")]
    Generic(String),
}

/// What the broker's caller is told about a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Plan configuration problem; points the caller at their operator.
    ContactOperator,
    /// Verbatim caller message, often empty to avoid leaking internals.
    Message(String),
    /// Binding outcome with its own exit code.
    Binding(BindingError),
}

/// A failure reported on two channels.
///
/// `detail` is written to the operator log and may contain internal state
/// such as raw command output. `user` decides the caller-facing message and
/// exit code. Constructing one requires both.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct AdapterError {
    detail: String,
    user: UserError,
}

impl AdapterError {
    #[must_use]
    pub fn new(detail: impl Into<String>, user: UserError) -> Self {
        Self {
            detail: detail.into(),
            user,
        }
    }

    /// Plan configuration error: full detail for the operator, a pointer to
    /// the operator for the caller.
    #[must_use]
    pub fn configuration(detail: impl Into<String>) -> Self {
        Self::new(detail, UserError::ContactOperator)
    }

    /// Internal error: full detail for the operator, nothing for the caller.
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(detail, UserError::Message(String::new()))
    }

    /// Error in the caller's own input, reported identically on both channels.
    #[must_use]
    pub fn caller(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(message.clone(), UserError::Message(message))
    }

    #[must_use]
    pub fn binding(kind: BindingError, detail: impl Into<String>) -> Self {
        Self::new(detail, UserError::Binding(kind))
    }

    /// Operator-channel detail.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn user_error(&self) -> &UserError {
        &self.user
    }

    /// The binding classification, when this error came from a binding call.
    #[must_use]
    pub fn binding_error(&self) -> Option<&BindingError> {
        match &self.user {
            UserError::Binding(kind) => Some(kind),
            _ => None,
        }
    }

    /// Caller-channel message.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match &self.user {
            UserError::ContactOperator => CONTACT_OPERATOR_MESSAGE,
            UserError::Message(message) | UserError::Binding(BindingError::Generic(message)) => {
                message.as_str()
            }
            UserError::Binding(BindingError::AlreadyExists | BindingError::NotFound) => "",
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match &self.user {
            UserError::Binding(BindingError::AlreadyExists) => BINDING_ALREADY_EXISTS_EXIT_CODE,
            UserError::Binding(BindingError::NotFound) => BINDING_NOT_FOUND_EXIT_CODE,
            _ => GENERIC_EXIT_CODE,
        }
    }
}

impl From<DomainError> for AdapterError {
    fn from(err: DomainError) -> Self {
        if err.is_caller_input() {
            Self::caller(err.to_string())
        } else if err.is_configuration() {
            Self::configuration(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl From<MappingError> for AdapterError {
    fn from(err: MappingError) -> Self {
        Self::internal(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("invalid {argument} argument: {reason}")]
    Decode {
        argument: &'static str,
        reason: String,
    },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Text for the operator log.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Error::Adapter(err) => err.detail().to_string(),
            other => other.to_string(),
        }
    }

    /// Text for the broker's caller.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::Adapter(err) => err.user_message().to_string(),
            Error::Decode { .. } => self.to_string(),
            _ => String::new(),
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Adapter(err) => err.exit_code(),
            _ => GENERIC_EXIT_CODE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
