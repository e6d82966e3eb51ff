pub mod action;
pub mod call_value;
pub mod invocation;
pub mod mailbox_message;

#[cfg(test)]
mod action_test;

pub use self::{action::*, call_value::*, invocation::*, mailbox_message::*};
