use crate::shapes::{draw, init_circle, init_point, move_by};
use anyhow::Result;
use ooc_core::ObjRef;
use ooc_runtime::{args, Runtime};
use std::io::Write;

/// Create the object chosen by the first letter of `selection`
fn create_selected(rt: &mut Runtime, selection: &str) -> Result<Option<ObjRef>> {
    let obj = match selection.chars().next() {
        Some('p') => {
            let point = rt.lookup("Point")?;
            rt.create(point, args![1, 2])?
        }
        Some('c') => {
            let circle = rt.lookup("Circle")?;
            rt.create(circle, args![1, 2, 3])?
        }
        _ => return Ok(None),
    };
    Ok(Some(obj))
}

/// Exercise draw, move, describe and delete on the selected objects.
/// Everything is written to the output of `rt`
pub fn run(rt: &mut Runtime, selections: &[String]) -> Result<()> {
    let point = init_point(rt)?;
    init_circle(rt)?;

    for selection in selections {
        let Some(obj) = create_selected(rt, selection)? else {
            log::debug!("skipped `{}'", selection);
            continue;
        };

        let p = rt.create(point, args![3, 5])?;
        draw(rt, p)?;
        move_by(rt, p, 1, 2)?;
        draw(rt, p)?;
        let mut line = vec![];
        rt.describe(p, &mut line)?;
        line.push(b'\n');
        rt.output().write_all(&line)?;
        rt.destroy(p)?;

        draw(rt, obj)?;
        move_by(rt, obj, 10, 20)?;
        draw(rt, obj)?;
        rt.destroy(obj)?;
    }
    rt.output().flush()?;
    Ok(())
}
