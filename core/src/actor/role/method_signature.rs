use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::actor::actor_error::ActionError;
use crate::actor::message::{CallValue, Invocation};

/// One declared parameter of an actor method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
  name: String,
}

impl ParamSpec {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }
}

/// The ordered parameter list of one actor method, receiver excluded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MethodSignature {
  params: Vec<ParamSpec>,
}

impl MethodSignature {
  pub fn new(params: Vec<ParamSpec>) -> Self {
    Self { params }
  }

  pub fn params(&self) -> &[ParamSpec] {
    &self.params
  }

  pub fn arity(&self) -> usize {
    self.params.len()
  }

  fn position_of(&self, name: &str) -> Option<usize> {
    self.params.iter().position(|param| param.name == name)
  }

  /// Binds an invocation against this signature: positionals first, then
  /// keywords by name, every parameter exactly once. Returns the fully
  /// positional invocation the method handler observes.
  pub fn bind(&self, method: &str, invocation: Invocation) -> Result<Invocation, ActionError> {
    let (args, kwargs) = invocation.into_parts();
    if args.len() > self.params.len() {
      return Err(ActionError::TooManyArguments {
        method: method.to_string(),
        expected: self.params.len(),
        got: args.len(),
      });
    }
    let mut slots: Vec<Option<CallValue>> = args.into_iter().map(Some).collect();
    slots.resize(self.params.len(), None);
    for (name, value) in kwargs {
      match self.position_of(&name) {
        None => {
          return Err(ActionError::UnexpectedKeyword {
            method: method.to_string(),
            keyword: name,
          })
        }
        Some(index) if slots[index].is_some() => {
          return Err(ActionError::DuplicateArgument {
            method: method.to_string(),
            param: name,
          })
        }
        Some(index) => slots[index] = Some(value),
      }
    }
    let mut bound = Vec::with_capacity(self.params.len());
    for (slot, param) in slots.into_iter().zip(self.params.iter()) {
      match slot {
        Some(value) => bound.push(value),
        None => {
          return Err(ActionError::MissingArgument {
            method: method.to_string(),
            param: param.name.clone(),
          })
        }
      }
    }
    Ok(Invocation::positional(bound))
  }
}

/// The read-only signature snapshot of a role, shared by its metadata and by
/// every proxy and weak ref addressing its actors.
pub type MethodSignatures = Arc<HashMap<String, MethodSignature>>;

/// Builds a signature from ordered parameter names as declared on the user
/// method. The instance receiver never appears in a signature.
pub fn extract_signature(params: &[&str]) -> MethodSignature {
  MethodSignature::new(params.iter().map(|name| ParamSpec::new(*name)).collect())
}
