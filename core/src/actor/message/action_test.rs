#[cfg(test)]
mod tests {
  use std::collections::HashMap;
  use std::sync::Arc;

  use crate::actor::actor_key::ActorKey;
  use crate::actor::director::Director;
  use crate::actor::message::{Action, CallValue, Invocation};
  use crate::actor::proxy::ActorProxy;
  use crate::actor::role::{extract_signature, MethodSignatures};

  fn signatures() -> MethodSignatures {
    let mut map = HashMap::new();
    map.insert("ping".to_string(), extract_signature(&[]));
    Arc::new(map)
  }

  fn test_proxy(director: &Director) -> ActorProxy {
    ActorProxy::new(
      ActorKey::from("troupe:Pinger:00000000-0000-4000-8000-000000000001"),
      signatures(),
      "Pinger".to_string(),
      "troupe:Pinger".to_string(),
      director.clone(),
    )
  }

  #[test]
  fn test_build_generates_action_id() {
    let target = ActorKey::from("troupe:Counter:abc");
    let a = Action::build(target.clone(), "increment", Invocation::empty());
    let b = Action::build(target, "increment", Invocation::empty());
    assert!(!a.action_id().is_empty());
    assert_ne!(a.action_id(), b.action_id());
  }

  #[test]
  fn test_new_accepts_caller_supplied_action_id() {
    let target = ActorKey::from("troupe:Counter:abc");
    let action = Action::new(target, "increment", Some("my-id".to_string()), Invocation::empty());
    assert_eq!(action.action_id(), "my-id");
  }

  #[test]
  fn test_build_rewrites_proxy_arguments_to_weak() {
    let director = Director::new();
    let proxy = test_proxy(&director);
    let target = ActorKey::from("troupe:Counter:abc");

    let action = Action::build(
      target,
      "set_peer",
      Invocation::positional(vec![CallValue::from(&proxy), CallValue::from(7)]),
    );

    assert!(action.refs());
    let weak = action.invocation().arg(0).and_then(CallValue::as_weak).unwrap();
    assert_eq!(weak.actor_key(), proxy.actor_key());
    assert_eq!(action.invocation().arg(1).and_then(CallValue::as_int), Some(7));
  }

  #[test]
  fn test_build_without_handles_leaves_refs_unset() {
    let target = ActorKey::from("troupe:Counter:abc");
    let action = Action::build(target, "add", Invocation::positional(vec![CallValue::from(1)]));
    assert!(!action.refs());
  }

  #[test]
  fn test_kwargs_are_scanned_too() {
    let director = Director::new();
    let proxy = test_proxy(&director);
    let target = ActorKey::from("troupe:Counter:abc");

    let action = Action::build(
      target,
      "set_peer",
      Invocation::empty().with_kwarg("peer", CallValue::from(&proxy)),
    );

    assert!(action.refs());
    let weak = action.invocation().kwargs().get("peer").and_then(CallValue::as_weak).unwrap();
    assert_eq!(weak.actor_key(), proxy.actor_key());
  }

  #[test]
  fn test_hydrate_restores_a_live_proxy() {
    let director = Director::new();
    let proxy = test_proxy(&director);

    let (sealed, refs) = Invocation::positional(vec![CallValue::from(&proxy)]).seal_handles();
    assert!(refs);

    let hydrated = sealed.hydrate_handles(&director);
    let restored = hydrated.arg(0).and_then(CallValue::as_proxy).unwrap();
    assert_eq!(restored, &proxy);
    assert_eq!(restored.method_names(), vec!["ping".to_string()]);
  }

  #[test]
  fn test_display_includes_key_method_and_id() {
    let target = ActorKey::from("troupe:Counter:abc");
    let action = Action::new(target, "increment", Some("id-1".to_string()), Invocation::empty());
    assert_eq!(format!("{}", action), "Action(troupe:Counter:abc, increment, id-1)");
  }
}
