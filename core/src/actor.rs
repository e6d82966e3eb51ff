pub mod actor_error;
pub mod actor_key;
pub mod context;
pub mod director;
pub mod dispatch;
pub mod message;
pub mod proxy;
pub mod role;

#[cfg(test)]
mod director_test;

pub use self::{actor_error::*, actor_key::*, context::*, director::*, message::*, proxy::*, role::*};
pub use self::dispatch::{Mailbox, MailboxRegistry};
