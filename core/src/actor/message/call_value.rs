use std::collections::HashMap;

use crate::actor::proxy::{ActorProxy, WeakRef};

/// A value that may appear among an action's arguments.
///
/// `Proxy` never crosses a mailbox: `Action::build` rewrites it to `Weak`
/// before departure, and the destination worker rewrites `Weak` back into a
/// live `Proxy`. Only data travels, never closures or runtime handles.
#[derive(Debug, Clone, PartialEq)]
pub enum CallValue {
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
  List(Vec<CallValue>),
  Map(HashMap<String, CallValue>),
  Proxy(ActorProxy),
  Weak(WeakRef),
}

impl CallValue {
  pub fn is_null(&self) -> bool {
    matches!(self, CallValue::Null)
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      CallValue::Bool(value) => Some(*value),
      _ => None,
    }
  }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      CallValue::Int(value) => Some(*value),
      _ => None,
    }
  }

  pub fn as_float(&self) -> Option<f64> {
    match self {
      CallValue::Float(value) => Some(*value),
      CallValue::Int(value) => Some(*value as f64),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      CallValue::Str(value) => Some(value),
      _ => None,
    }
  }

  pub fn as_list(&self) -> Option<&[CallValue]> {
    match self {
      CallValue::List(values) => Some(values),
      _ => None,
    }
  }

  pub fn as_map(&self) -> Option<&HashMap<String, CallValue>> {
    match self {
      CallValue::Map(values) => Some(values),
      _ => None,
    }
  }

  /// A live handle, present only on the destination side of a delivery.
  pub fn as_proxy(&self) -> Option<&ActorProxy> {
    match self {
      CallValue::Proxy(proxy) => Some(proxy),
      _ => None,
    }
  }

  pub fn as_weak(&self) -> Option<&WeakRef> {
    match self {
      CallValue::Weak(weak) => Some(weak),
      _ => None,
    }
  }
}

impl From<bool> for CallValue {
  fn from(value: bool) -> Self {
    CallValue::Bool(value)
  }
}

impl From<i32> for CallValue {
  fn from(value: i32) -> Self {
    CallValue::Int(value as i64)
  }
}

impl From<i64> for CallValue {
  fn from(value: i64) -> Self {
    CallValue::Int(value)
  }
}

impl From<f64> for CallValue {
  fn from(value: f64) -> Self {
    CallValue::Float(value)
  }
}

impl From<&str> for CallValue {
  fn from(value: &str) -> Self {
    CallValue::Str(value.to_string())
  }
}

impl From<String> for CallValue {
  fn from(value: String) -> Self {
    CallValue::Str(value)
  }
}

impl From<Vec<CallValue>> for CallValue {
  fn from(values: Vec<CallValue>) -> Self {
    CallValue::List(values)
  }
}

impl From<ActorProxy> for CallValue {
  fn from(proxy: ActorProxy) -> Self {
    CallValue::Proxy(proxy)
  }
}

impl From<&ActorProxy> for CallValue {
  fn from(proxy: &ActorProxy) -> Self {
    CallValue::Proxy(proxy.clone())
  }
}

impl From<WeakRef> for CallValue {
  fn from(weak: WeakRef) -> Self {
    CallValue::Weak(weak)
  }
}
