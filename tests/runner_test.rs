use anyhow::Result;
use insta::assert_snapshot;
use ooc_runtime::Runtime;

fn run(selections: &[&str]) -> Result<String> {
    let mut rt = Runtime::capturing();
    let selections = selections.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ooc::runner::run(&mut rt, &selections)?;
    let live = rt.live_objects();
    // Object, Class, PointClass, Point, Circle
    assert_eq!(live, 5);
    Ok(rt.take_output())
}

#[test]
fn test_run_point_and_circle() -> Result<()> {
    let out = run(&["p", "xyz", "circle"])?;
    assert_snapshot!(out.trim_end(), @r#"
"." at 3,5
"." at 4,7
"." at 4,7
"." at 1,2
"." at 11,22
"." at 3,5
"." at 4,7
"." at 4,7
Circle at 1,2 radius 3
Circle at 11,22 radius 3
"#);
    Ok(())
}

#[test]
fn test_run_nothing() -> Result<()> {
    assert_eq!(run(&[])?, "");
    assert_eq!(run(&["", "q"])?, "");
    Ok(())
}
