pub mod actor_proxy;
pub mod method_handler;
pub mod weak_ref;


pub use self::{actor_proxy::*, method_handler::*, weak_ref::*};
