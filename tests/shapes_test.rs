use anyhow::Result;
use ooc::shapes::{circle, draw, init_circle, init_point, move_by, point, super_draw, DRAW};
use ooc_core::Selector;
use ooc_runtime::{args, Error, Runtime, CLASS, OBJECT};

fn describe_to_string(rt: &Runtime, obj: ooc_core::ObjRef) -> Result<String> {
    let mut out = vec![];
    rt.describe(obj, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_circle_scenario() -> Result<()> {
    let mut rt = Runtime::capturing();
    let circle = init_circle(&mut rt)?;
    let point = rt.lookup("Point")?;

    let c = rt.create(circle, args![1, 2, 3])?;
    assert_eq!(describe_to_string(&rt, c)?, "Circle at 1,2 radius 3");
    assert_eq!(rt.class_of(c)?, circle);
    assert_eq!(rt.superclass(rt.class_of(c)?)?, point);
    assert_eq!(rt.size_of(c)?, circle::SIZE);
    assert!(rt.size_of(c)? > point::SIZE);
    Ok(())
}

#[test]
fn test_point_fields_are_set_before_radius() -> Result<()> {
    let mut rt = Runtime::capturing();
    let circle = init_circle(&mut rt)?;
    let c = rt.create(circle, args![4, 5, 6])?;
    assert_eq!(point::x(&rt, c)?, 4);
    assert_eq!(point::y(&rt, c)?, 5);
    assert_eq!(circle::radius(&rt, c)?, 6);
    Ok(())
}

#[test]
fn test_metaclass_hierarchy() -> Result<()> {
    let mut rt = Runtime::capturing();
    let circle = init_circle(&mut rt)?;
    let point = rt.lookup("Point")?;
    let point_class = rt.lookup("PointClass")?;
    assert_eq!(rt.class_of(point)?, point_class);
    assert_eq!(rt.class_of(circle)?, point_class);
    assert_eq!(rt.class_of(point_class)?, CLASS);
    assert_eq!(rt.superclass(point_class)?, CLASS);
    assert_eq!(rt.superclass(point)?, OBJECT);
    assert!(rt.is_metaclass(point_class)?);
    assert!(!rt.is_metaclass(point)?);
    assert!(rt.methods(point)?.has(Selector::Custom(DRAW)));
    assert!(!rt.methods(point_class)?.has(Selector::Custom(DRAW)));
    Ok(())
}

#[test]
fn test_circle_inherits_draw() -> Result<()> {
    let mut rt = Runtime::capturing();
    let circle = init_circle(&mut rt)?;
    let point = rt.lookup("Point")?;
    let draw_of = |rt: &Runtime, class| {
        rt.methods(class)
            .ok()
            .and_then(|m| m.custom(DRAW))
            .map(|f| f as usize)
    };
    assert!(draw_of(&rt, point).is_some());
    assert_eq!(draw_of(&rt, circle), draw_of(&rt, point));
    assert_ne!(
        rt.methods(circle)?.describe.map(|f| f as usize),
        rt.methods(point)?.describe.map(|f| f as usize)
    );

    let c = rt.create(circle, args![1, 2, 3])?;
    draw(&mut rt, c)?;
    super_draw(&mut rt, circle, c)?;
    assert_eq!(
        rt.take_output(),
        "Circle at 1,2 radius 3\nCircle at 1,2 radius 3\n"
    );
    Ok(())
}

#[test]
fn test_move_and_draw_point() -> Result<()> {
    let mut rt = Runtime::capturing();
    let point = init_point(&mut rt)?;
    let p = rt.create(point, args![3, 5])?;
    draw(&mut rt, p)?;
    move_by(&mut rt, p, 1, 2)?;
    draw(&mut rt, p)?;
    assert_eq!(rt.take_output(), "\".\" at 3,5\n\".\" at 4,7\n");
    assert_eq!(describe_to_string(&rt, p)?, "\".\" at 4,7");
    Ok(())
}

#[test]
fn test_move_past_the_integer_range() -> Result<()> {
    let mut rt = Runtime::capturing();
    let point = init_point(&mut rt)?;
    let p = rt.create(point, args![i64::MAX, 0])?;
    assert!(matches!(
        move_by(&mut rt, p, 1, 0),
        Err(Error::BadArgument { .. })
    ));
    // Neither coordinate changes when one of them overflows
    assert!(matches!(
        move_by(&mut rt, p, -1, i64::MIN),
        Ok(())
    ));
    assert!(matches!(
        move_by(&mut rt, p, -1, -1),
        Err(Error::BadArgument { .. })
    ));
    assert_eq!(point::x(&rt, p)?, i64::MAX - 1);
    assert_eq!(point::y(&rt, p)?, i64::MIN);
    Ok(())
}

#[test]
fn test_compare_points() -> Result<()> {
    let mut rt = Runtime::capturing();
    let point = init_point(&mut rt)?;
    let a = rt.create(point, args![1, 1])?;
    let b = rt.create(point, args![1, 1])?;
    assert!(!rt.differ(a, a)?);
    assert!(rt.differ(a, b)?);
    Ok(())
}

#[test]
fn test_init_is_idempotent() -> Result<()> {
    let mut rt = Runtime::capturing();
    let circle = init_circle(&mut rt)?;
    let point = init_point(&mut rt)?;
    let count = rt.class_count();
    assert_eq!(init_circle(&mut rt)?, circle);
    assert_eq!(init_point(&mut rt)?, point);
    assert_eq!(rt.class_count(), count);
    // Object, Class, PointClass, Point, Circle
    assert_eq!(count, 5);
    Ok(())
}

#[test]
fn test_shape_classes_survive_deletion() -> Result<()> {
    let mut rt = Runtime::capturing();
    let circle = init_circle(&mut rt)?;
    let point_class = rt.lookup("PointClass")?;
    let live = rt.live_objects();
    rt.destroy(point_class)?;
    rt.destroy(circle)?;
    assert_eq!(rt.live_objects(), live);
    assert_eq!(
        rt.diagnostics(),
        &[
            "PointClass: cannot destroy class".to_string(),
            "Circle: cannot destroy class".to_string()
        ]
    );
    let c = rt.create(circle, args![7, 8, 9])?;
    assert_eq!(describe_to_string(&rt, c)?, "Circle at 7,8 radius 9");
    Ok(())
}

#[test]
fn test_destroy_shapes() -> Result<()> {
    let mut rt = Runtime::capturing();
    let circle = init_circle(&mut rt)?;
    let live = rt.live_objects();
    let c = rt.create(circle, args![1, 2, 3])?;
    rt.destroy(c)?;
    assert_eq!(rt.live_objects(), live);
    assert!(draw(&mut rt, c).is_err());
    Ok(())
}
