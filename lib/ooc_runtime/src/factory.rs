use crate::args::Args;
use crate::class::ClassBody;
use crate::error::{Error, Result};
use crate::heap::{Body, HeapObject};
use crate::method_table::Override;
use crate::value::Value;
use crate::{object, Runtime};
use ooc_core::ObjRef;

impl Runtime {
    /// Create an instance of `class`, initialized by its `construct`.
    ///
    /// When `class` is a metaclass, the new object is a class descriptor
    /// and is registered under its name once constructed.
    ///
    /// A constructor may return another object than the one it was given;
    /// it is then responsible for the given one.
    pub fn create(&mut self, class: ObjRef, mut args: Args) -> Result<ObjRef> {
        let descriptor = self.descriptor(class)?;
        if descriptor.size == 0 {
            return Err(Error::ZeroSize {
                class: descriptor.name.clone(),
            });
        }
        let size = descriptor.size;
        let body = if self.is_metaclass(class)? {
            Body::Class(Box::new(ClassBody::blank()))
        } else {
            Body::Ivars(vec![Value::Nil; size - object::HEADER_SIZE])
        };
        let obj = self.heap.alloc(HeapObject { class, body });
        log::debug!("allocated {} ({})", obj, self.class_name(class)?);

        let constructed = match self.construct(obj, &mut args) {
            Ok(x) => x,
            Err(e) => {
                self.abandon(obj, None);
                return Err(e);
            }
        };
        if self.is_class(constructed)? {
            if let Err(e) = self.finish_class(constructed) {
                self.abandon(obj, Some(constructed));
                return Err(e);
            }
        }
        Ok(constructed)
    }

    /// Free the storage of a failed construction: the cell allocated by
    /// `create`, and what the constructor returned unless it is a finished
    /// class
    fn abandon(&mut self, allocated: ObjRef, constructed: Option<ObjRef>) {
        if self.heap.free(allocated).is_err() {
            log::debug!("{} was already freed by its constructor", allocated);
        }
        let Some(other) = constructed.filter(|c| *c != allocated) else {
            return;
        };
        let unfinished = matches!(self.descriptor(other), Ok(body) if !body.sealed);
        if unfinished && self.heap.free(other).is_ok() {
            log::debug!("freed {} returned by a failed constructor", other);
        }
    }

    /// Register a newly constructed class and make it immutable
    fn finish_class(&mut self, class: ObjRef) -> Result<()> {
        let body = self.descriptor(class)?;
        if body.superclass.is_none() {
            return Err(Error::MissingSuperclass { class });
        }
        let name = body.name.clone();
        self.registry.insert(name, class)?;
        if let Body::Class(body) = &mut self.heap.get_mut(class)?.body {
            body.sealed = true;
        }
        Ok(())
    }

    /// Destroy `obj` by its `destruct` and free what it returns.
    /// Does nothing when given `None` or when `destruct` refuses
    pub fn destroy(&mut self, obj: impl Into<Option<ObjRef>>) -> Result<()> {
        let Some(obj) = obj.into() else {
            return Ok(());
        };
        if let Some(reclaimed) = self.destruct(obj)? {
            log::debug!("freeing {}", reclaimed);
            self.heap.free(reclaimed)?;
        }
        Ok(())
    }

    /// Define a class named `name` as an instance of `metaclass`.
    /// Shorthand of `create` with the arguments of class definition
    pub fn define_class(
        &mut self,
        metaclass: ObjRef,
        name: &str,
        superclass: ObjRef,
        size: usize,
        overrides: Vec<Override>,
    ) -> Result<ObjRef> {
        self.create(metaclass, crate::args![name, superclass, size, overrides])
    }
}
