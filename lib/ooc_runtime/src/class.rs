//! The class `Class`.
//! Instances of this class are class descriptors. `create` on `Class` (or
//! on a subclass of it) defines a new class.
use crate::args::Args;
use crate::bootstrap::CLASS;
use crate::error::{bad_argument, Error, Result};
use crate::method_table::MethodTable;
use crate::{object, Runtime};
use ooc_core::names::{class_name, ClassName};
use ooc_core::ObjRef;

/// name, superclass and size
pub const N_IVARS: usize = 3;
/// construct, destruct, differ and describe
pub const N_SLOTS: usize = 4;
pub const SIZE: usize = object::SIZE + N_IVARS + N_SLOTS;

/// The content of a class descriptor
#[derive(Debug, Clone, Default)]
pub struct ClassBody {
    pub(crate) name: ClassName,
    pub(crate) superclass: Option<ObjRef>,
    pub(crate) size: usize,
    pub(crate) methods: MethodTable,
    /// Set when the construction has finished
    pub(crate) sealed: bool,
}

impl ClassBody {
    pub(crate) fn new(
        name: &str,
        superclass: ObjRef,
        size: usize,
        methods: MethodTable,
    ) -> ClassBody {
        ClassBody {
            name: class_name(name),
            superclass: Some(superclass),
            size,
            methods,
            sealed: true,
        }
    }

    /// Storage allocated for a class under construction
    pub(crate) fn blank() -> ClassBody {
        Default::default()
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn superclass(&self) -> Option<ObjRef> {
        self.superclass
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// Used by constructors of metaclasses to install their own slots
    pub fn methods_mut(&mut self) -> &mut MethodTable {
        &mut self.methods
    }
}

/// Define a class. `args` are the name, the superclass, the instance size
/// and the overrides.
pub(crate) fn construct(rt: &mut Runtime, obj: ObjRef, args: &mut Args) -> Result<ObjRef> {
    let obj = rt.super_construct(CLASS, obj, args)?;
    let name = args.next_str()?;
    let superclass = args.next_ref()?;
    let size = args.next_size()?;
    if name.is_empty() {
        return Err(bad_argument("class name must not be empty"));
    }

    let super_body = rt.descriptor(superclass)?;
    // Only finished classes can be inherited. This also rejects `obj` itself
    if superclass == obj || !super_body.sealed {
        return Err(Error::Unfinished { class: superclass });
    }
    if size < super_body.size {
        return Err(Error::SizeShrinks {
            class: name,
            size,
            super_size: super_body.size,
        });
    }
    // Inherit all the methods, then override.
    // Overrides of unknown slots are for the metaclass constructors.
    let methods = MethodTable::build(&super_body.methods, args.overrides());

    let body = rt.descriptor_mut(obj)?;
    body.name = class_name(name);
    body.superclass = Some(superclass);
    body.size = size;
    body.methods = methods;
    log::debug!("constructed class {} ({} cells)", &body.name, size);
    Ok(obj)
}

/// Classes cannot be destroyed
pub(crate) fn destruct(rt: &mut Runtime, obj: ObjRef) -> Result<Option<ObjRef>> {
    let msg = format!("{}: cannot destroy class", rt.class_name(obj)?);
    rt.report(msg);
    Ok(None)
}
