pub(crate) mod actor_worker;
pub mod mailbox;
pub mod mailbox_registry;

#[cfg(test)]
mod mailbox_test;

pub use self::{mailbox::*, mailbox_registry::*};
pub(crate) use self::actor_worker::*;
