use troupe_utils_rs::collections::Element;

use crate::actor::message::action::Action;

/// What travels through an actor's mailbox: either a deferred method call or
/// the stop sentinel.
///
/// The sentinel shares the FIFO with data messages on purpose: an actor that
/// is told to stop first finishes everything the same sender enqueued before
/// the sentinel.
#[derive(Debug, Clone)]
pub enum MailboxMessage {
  Action(Action),
  Stop,
}

impl Element for MailboxMessage {}
