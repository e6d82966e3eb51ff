use thiserror::Error;

use crate::actor::actor_key::ActorKey;

/// Definition-time failures, raised synchronously by `RoleBuilder::register`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
  #[error("role class name must not be empty")]
  EmptyClassName,
  #[error("role '{class_name}' defines method '{method}' more than once")]
  DuplicateMethod { class_name: String, method: String },
  #[error("role '{class_name}' has no constructor; register one with RoleBuilder::constructor")]
  MissingConstructor { class_name: String },
}

/// Lifecycle failures raised in the caller's context when asking the
/// director to materialize an actor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
  #[error("director is not started; call Director::start before spawning actors")]
  DirectorNotStarted,
  #[error("actor key '{0}' is already registered")]
  DuplicateKey(ActorKey),
}

/// Caller-side proxy misuse, raised synchronously with no actor side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
  #[error(
    "actor methods cannot be called directly: instead of '{class_name}.{method}(..)', \
     use '{class_name}.{method}.remote(..)'"
  )]
  DirectInvocation { class_name: String, method: String },
  #[error("role '{class_name}' has no method '{method}'")]
  UnknownMethod { class_name: String, method: String },
  #[error("actor key '{actor_key}' does not belong to role '{class_name}' (class id '{class_id}')")]
  ForeignKey {
    actor_key: ActorKey,
    class_name: String,
    class_id: String,
  },
}

/// Execution-side failures, observed inside the target worker while an
/// action runs. Fatal to the action, never to the mailbox.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
  #[error("instance has no method '{method}'")]
  MethodNotFound { method: String },
  #[error("method '{method}' takes {expected} arguments but {got} were given")]
  TooManyArguments { method: String, expected: usize, got: usize },
  #[error("method '{method}' missing argument '{param}'")]
  MissingArgument { method: String, param: String },
  #[error("method '{method}' got an unexpected keyword argument '{keyword}'")]
  UnexpectedKeyword { method: String, keyword: String },
  #[error("method '{method}' got multiple values for argument '{param}'")]
  DuplicateArgument { method: String, param: String },
  #[error("actor instance is not a '{expected}'")]
  InstanceMismatch { expected: &'static str },
  #[error("{message}")]
  Failed { message: String },
}

impl ActionError {
  /// Wraps a user-code failure message.
  pub fn failed(message: impl Into<String>) -> Self {
    ActionError::Failed {
      message: message.into(),
    }
  }
}
