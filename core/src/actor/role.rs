pub mod method_signature;
pub mod role_builder;
pub mod role_class;
pub mod role_descriptor;
pub mod role_metadata;


pub use self::{method_signature::*, role_builder::*, role_class::*, role_descriptor::*, role_metadata::*};
