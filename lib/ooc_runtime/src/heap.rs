use crate::class::ClassBody;
use crate::error::{Error, Result};
use crate::value::Value;
use ooc_core::ObjRef;

/// An object in the heap. Its class is the first thing every object has
#[derive(Debug)]
pub(crate) struct HeapObject {
    pub class: ObjRef,
    pub body: Body,
}

#[derive(Debug)]
pub(crate) enum Body {
    /// Instance variables of a plain object
    Ivars(Vec<Value>),
    /// A class descriptor
    Class(Box<ClassBody>),
}

/// Storage of all objects. Freed cells are reused by later allocations
#[derive(Debug)]
pub(crate) struct Heap {
    cells: Vec<Option<HeapObject>>,
    free: Vec<usize>,
}

impl Heap {
    /// Create a heap whose first cells are `roots`
    pub fn with_roots(roots: impl IntoIterator<Item = HeapObject>) -> Heap {
        Heap {
            cells: roots.into_iter().map(Some).collect(),
            free: vec![],
        }
    }

    pub fn alloc(&mut self, obj: HeapObject) -> ObjRef {
        if let Some(i) = self.free.pop() {
            self.cells[i] = Some(obj);
            ObjRef(i)
        } else {
            self.cells.push(Some(obj));
            ObjRef(self.cells.len() - 1)
        }
    }

    pub fn free(&mut self, obj: ObjRef) -> Result<()> {
        let cell = self
            .cells
            .get_mut(obj.index())
            .filter(|c| c.is_some())
            .ok_or(Error::DanglingObject { obj })?;
        *cell = None;
        self.free.push(obj.index());
        Ok(())
    }

    pub fn get(&self, obj: ObjRef) -> Result<&HeapObject> {
        self.cells
            .get(obj.index())
            .and_then(|x| x.as_ref())
            .ok_or(Error::DanglingObject { obj })
    }

    pub fn get_mut(&mut self, obj: ObjRef) -> Result<&mut HeapObject> {
        self.cells
            .get_mut(obj.index())
            .and_then(|x| x.as_mut())
            .ok_or(Error::DanglingObject { obj })
    }

    /// Number of live objects, class descriptors included
    pub fn live_count(&self) -> usize {
        self.cells.len() - self.free.len()
    }
}
