//! The class `Object`.
//! The root of all classes. Its instances can only be created, destroyed,
//! compared and described.
use crate::args::Args;
use crate::error::Result;
use crate::Runtime;
use ooc_core::ObjRef;
use std::io::Write;

/// Number of cells taken by the class reference of every object
pub const HEADER_SIZE: usize = 1;
pub const N_IVARS: usize = 0;
pub const SIZE: usize = HEADER_SIZE + N_IVARS;

pub(crate) fn construct(_rt: &mut Runtime, obj: ObjRef, _args: &mut Args) -> Result<ObjRef> {
    Ok(obj)
}

pub(crate) fn destruct(_rt: &mut Runtime, obj: ObjRef) -> Result<Option<ObjRef>> {
    Ok(Some(obj))
}

pub(crate) fn differ(_rt: &Runtime, obj: ObjRef, other: ObjRef) -> Result<bool> {
    Ok(obj != other)
}

pub(crate) fn describe(rt: &Runtime, obj: ObjRef, out: &mut dyn Write) -> Result<usize> {
    let class = rt.class_of(obj)?;
    let s = format!("{} at {}", rt.class_name(class)?, obj);
    out.write_all(s.as_bytes())?;
    Ok(s.len())
}
