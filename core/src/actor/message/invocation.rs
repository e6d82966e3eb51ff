use std::collections::HashMap;

use crate::actor::director::Director;
use crate::actor::message::call_value::CallValue;

/// The positional and keyword argument payload of one method call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Invocation {
  args: Vec<CallValue>,
  kwargs: HashMap<String, CallValue>,
}

impl Invocation {
  pub fn new(args: Vec<CallValue>, kwargs: HashMap<String, CallValue>) -> Self {
    Self { args, kwargs }
  }

  pub fn empty() -> Self {
    Self::default()
  }

  pub fn positional(args: Vec<CallValue>) -> Self {
    Self {
      args,
      kwargs: HashMap::new(),
    }
  }

  pub fn with_kwarg(mut self, name: impl Into<String>, value: impl Into<CallValue>) -> Self {
    self.kwargs.insert(name.into(), value.into());
    self
  }

  pub fn args(&self) -> &[CallValue] {
    &self.args
  }

  pub fn kwargs(&self) -> &HashMap<String, CallValue> {
    &self.kwargs
  }

  pub fn arg(&self, index: usize) -> Option<&CallValue> {
    self.args.get(index)
  }

  pub fn len(&self) -> usize {
    self.args.len() + self.kwargs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.args.is_empty() && self.kwargs.is_empty()
  }

  pub(crate) fn into_parts(self) -> (Vec<CallValue>, HashMap<String, CallValue>) {
    (self.args, self.kwargs)
  }

  /// Rewrites every top-level `Proxy` argument into its `Weak` form.
  /// Returns the rewritten invocation and whether anything was rewritten.
  pub(crate) fn seal_handles(self) -> (Self, bool) {
    let mut refs = false;
    let mut seal = |value: CallValue| match value {
      CallValue::Proxy(proxy) => {
        refs = true;
        CallValue::Weak(proxy.to_weak())
      }
      other => other,
    };
    let args = self.args.into_iter().map(&mut seal).collect();
    let kwargs = self.kwargs.into_iter().map(|(name, value)| (name, seal(value))).collect();
    (Self { args, kwargs }, refs)
  }

  /// The inverse scan, run on the destination side: every top-level `Weak`
  /// becomes a live `Proxy` bound to the worker's own director handle.
  pub(crate) fn hydrate_handles(self, director: &Director) -> Self {
    let hydrate = |value: CallValue| match value {
      CallValue::Weak(weak) => CallValue::Proxy(weak.build_proxy(director)),
      other => other,
    };
    let args = self.args.into_iter().map(hydrate).collect();
    let kwargs = self.kwargs.into_iter().map(|(name, value)| (name, hydrate(value))).collect();
    Self { args, kwargs }
  }
}

impl From<Vec<CallValue>> for Invocation {
  fn from(args: Vec<CallValue>) -> Self {
    Invocation::positional(args)
  }
}

impl<const N: usize> From<[CallValue; N]> for Invocation {
  fn from(args: [CallValue; N]) -> Self {
    Invocation::positional(args.into())
  }
}

impl From<()> for Invocation {
  fn from(_: ()) -> Self {
    Invocation::empty()
  }
}
