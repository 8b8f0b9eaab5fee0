use ooc_core::names::ClassName;
use ooc_core::{ObjRef, Selector};

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations detected by the runtime.
/// None of these are expected in a correct program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{obj} is not a class")]
    NotAClass { obj: ObjRef },
    #[error("{obj} is a class, not a plain instance")]
    NotAnInstance { obj: ObjRef },
    #[error("class `{class}' has zero size")]
    ZeroSize { class: ClassName },
    #[error("class `{class}' does not implement `{selector}'")]
    MissingMethod { class: ClassName, selector: Selector },
    #[error("{class} has no superclass")]
    MissingSuperclass { class: ObjRef },
    #[error("class {class} is still under construction")]
    Unfinished { class: ObjRef },
    #[error("size of `{class}' ({size}) is smaller than its superclass ({super_size})")]
    SizeShrinks {
        class: String,
        size: usize,
        super_size: usize,
    },
    #[error("{obj} is already freed")]
    DanglingObject { obj: ObjRef },
    #[error("{obj} has no instance variable at {idx}")]
    NoSuchIvar { obj: ObjRef, idx: usize },
    #[error("class `{class}' cannot be modified after its construction")]
    Sealed { class: ClassName },
    #[error("class `{name}' is already defined")]
    Redefinition { name: ClassName },
    #[error("unknown class `{name}'")]
    UnknownClass { name: String },
    #[error("bad argument: {msg}")]
    BadArgument { msg: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn bad_argument(msg: impl Into<String>) -> Error {
    Error::BadArgument { msg: msg.into() }
}
