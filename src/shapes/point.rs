//! The class `Point` and its metaclass `PointClass`.
//! `PointClass` adds the method slot `draw` to the classes it creates.
use ooc_core::names::SlotName;
use ooc_core::ObjRef;
use ooc_runtime::{
    bad_argument, class, object, Args, Override, Result, Runtime, Value, CLASS, OBJECT,
};
use std::io::Write;

pub const DRAW: SlotName = SlotName("draw");

pub const IVAR_X_IDX: usize = object::N_IVARS;
pub const IVAR_Y_IDX: usize = object::N_IVARS + 1;
pub const N_IVARS: usize = object::N_IVARS + 2;
pub const SIZE: usize = object::HEADER_SIZE + N_IVARS;

/// `Class` plus the `draw` slot
pub const POINT_CLASS_SIZE: usize = class::SIZE + 1;

/// Define `PointClass` and `Point` unless already defined.
/// Returns the class `Point`
pub fn init_point(rt: &mut Runtime) -> Result<ObjRef> {
    let point_class = match rt.find("PointClass") {
        Some(c) => c,
        None => rt.define_class(
            CLASS,
            "PointClass",
            CLASS,
            POINT_CLASS_SIZE,
            vec![Override::Construct(point_class_ctor)],
        )?,
    };
    if let Some(c) = rt.find("Point") {
        return Ok(c);
    }
    rt.define_class(
        point_class,
        "Point",
        OBJECT,
        SIZE,
        vec![
            Override::Construct(point_ctor),
            Override::Describe(point_describe),
            Override::Custom(DRAW, point_draw),
        ],
    )
}

/// Render `obj` to the output of the runtime
pub fn draw(rt: &mut Runtime, obj: ObjRef) -> Result<()> {
    rt.send(obj, DRAW, &mut Args::empty())?;
    Ok(())
}

/// Call `draw` of the superclass of `class`
pub fn super_draw(rt: &mut Runtime, class: ObjRef, obj: ObjRef) -> Result<()> {
    rt.super_send(class, obj, DRAW, &mut Args::empty())?;
    Ok(())
}

/// Move `obj` by (`dx`, `dy`). Not dynamically dispatched
pub fn move_by(rt: &mut Runtime, obj: ObjRef, dx: i64, dy: i64) -> Result<()> {
    let x = x(rt, obj)?
        .checked_add(dx)
        .ok_or_else(|| bad_argument(format!("moving {} by {} overflows x", obj, dx)))?;
    let y = y(rt, obj)?
        .checked_add(dy)
        .ok_or_else(|| bad_argument(format!("moving {} by {} overflows y", obj, dy)))?;
    rt.set_ivar(obj, IVAR_X_IDX, x)?;
    rt.set_ivar(obj, IVAR_Y_IDX, y)?;
    Ok(())
}

pub fn x(rt: &Runtime, obj: ObjRef) -> Result<i64> {
    rt.ivar_int(obj, IVAR_X_IDX)
}

pub fn y(rt: &Runtime, obj: ObjRef) -> Result<i64> {
    rt.ivar_int(obj, IVAR_Y_IDX)
}

fn point_class_ctor(rt: &mut Runtime, obj: ObjRef, args: &mut Args) -> Result<ObjRef> {
    let point_class = rt.lookup("PointClass")?;
    let obj = rt.super_construct(point_class, obj, args)?;
    for o in args.overrides() {
        if let Override::Custom(slot, f) = *o {
            if slot == DRAW {
                rt.descriptor_mut(obj)?.methods_mut().install(slot, f);
            }
        }
    }
    Ok(obj)
}

fn point_ctor(rt: &mut Runtime, obj: ObjRef, args: &mut Args) -> Result<ObjRef> {
    let point = rt.lookup("Point")?;
    let obj = rt.super_construct(point, obj, args)?;
    let x = args.next_int()?;
    let y = args.next_int()?;
    rt.set_ivar(obj, IVAR_X_IDX, x)?;
    rt.set_ivar(obj, IVAR_Y_IDX, y)?;
    Ok(obj)
}

fn point_describe(rt: &Runtime, obj: ObjRef, out: &mut dyn Write) -> Result<usize> {
    let s = format!("\".\" at {},{}", x(rt, obj)?, y(rt, obj)?);
    out.write_all(s.as_bytes())?;
    Ok(s.len())
}

/// Writes the description of the object on its own line
fn point_draw(rt: &mut Runtime, obj: ObjRef, _args: &mut Args) -> Result<Value> {
    let mut line = vec![];
    rt.describe(obj, &mut line)?;
    line.push(b'\n');
    rt.output().write_all(&line)?;
    Ok(Value::Nil)
}
