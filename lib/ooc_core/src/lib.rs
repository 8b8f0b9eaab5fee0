pub mod names;
mod obj_ref;
mod selector;
pub use obj_ref::ObjRef;
pub use selector::Selector;
