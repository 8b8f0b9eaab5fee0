//! `Object` and `Class` depend on each other: the class of `Object` is
//! `Class`, while `Class` is a subclass of `Object` and an instance of
//! itself. Neither can be made with `create` because `create` needs a class
//! descriptor to exist, so the two are wired by hand as the first two cells
//! of the heap. This happens in `Runtime::new`, before any class can be
//! defined.
use crate::class::{self, ClassBody};
use crate::heap::{Body, HeapObject};
use crate::method_table::MethodTable;
use crate::object;
use ooc_core::ObjRef;

/// The class `Object`
pub const OBJECT: ObjRef = ObjRef(0);
/// The class `Class`
pub const CLASS: ObjRef = ObjRef(1);

pub(crate) fn root_classes() -> [HeapObject; 2] {
    [
        HeapObject {
            class: CLASS,
            body: Body::Class(Box::new(ClassBody::new(
                "Object",
                // `Object` is its own superclass
                OBJECT,
                object::SIZE,
                MethodTable::new(
                    object::construct,
                    object::destruct,
                    object::differ,
                    object::describe,
                ),
            ))),
        },
        HeapObject {
            class: CLASS,
            body: Body::Class(Box::new(ClassBody::new(
                "Class",
                OBJECT,
                class::SIZE,
                MethodTable::new(
                    class::construct,
                    class::destruct,
                    object::differ,
                    object::describe,
                ),
            ))),
        },
    ]
}
