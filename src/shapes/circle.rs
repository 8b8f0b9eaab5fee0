//! The class `Circle`: a `Point` with a radius.
use crate::shapes::point::{self, init_point};
use ooc_core::ObjRef;
use ooc_runtime::{object, Args, Override, Result, Runtime};
use std::io::Write;

pub const IVAR_RADIUS_IDX: usize = point::N_IVARS;
pub const N_IVARS: usize = point::N_IVARS + 1;
pub const SIZE: usize = object::HEADER_SIZE + N_IVARS;

/// Define `Circle` (and `Point`) unless already defined.
/// Returns the class `Circle`
pub fn init_circle(rt: &mut Runtime) -> Result<ObjRef> {
    let point = init_point(rt)?;
    if let Some(c) = rt.find("Circle") {
        return Ok(c);
    }
    let point_class = rt.class_of(point)?;
    rt.define_class(
        point_class,
        "Circle",
        point,
        SIZE,
        vec![
            Override::Construct(circle_ctor),
            Override::Describe(circle_describe),
        ],
    )
}

pub fn radius(rt: &Runtime, obj: ObjRef) -> Result<i64> {
    rt.ivar_int(obj, IVAR_RADIUS_IDX)
}

fn circle_ctor(rt: &mut Runtime, obj: ObjRef, args: &mut Args) -> Result<ObjRef> {
    let circle = rt.lookup("Circle")?;
    let obj = rt.super_construct(circle, obj, args)?;
    let radius = args.next_int()?;
    rt.set_ivar(obj, IVAR_RADIUS_IDX, radius)?;
    Ok(obj)
}

fn circle_describe(rt: &Runtime, obj: ObjRef, out: &mut dyn Write) -> Result<usize> {
    let s = format!(
        "Circle at {},{} radius {}",
        point::x(rt, obj)?,
        point::y(rt, obj)?,
        radius(rt, obj)?
    );
    out.write_all(s.as_bytes())?;
    Ok(s.len())
}
