//! A small class-based object runtime: single inheritance, dynamically
//! dispatched methods, and classes that are objects themselves.
//!
//! Every class is an instance of a metaclass. The metaclass `Class` builds
//! a new class by copying the method table of its superclass and then
//! applying the overrides given at the definition. A subclass of `Class`
//! can add method slots of its own in the same way.
mod args;
mod bootstrap;
pub mod class;
mod dispatch;
mod error;
mod factory;
mod heap;
mod method_table;
pub mod object;
mod output;
mod registry;
mod super_call;
mod value;
pub use args::Args;
pub use bootstrap::{CLASS, OBJECT};
pub use class::ClassBody;
pub use error::{bad_argument, Error, Result};
pub use method_table::{
    ConstructFn, CustomFn, DescribeFn, DestructFn, DifferFn, MethodTable, Override,
};
pub use output::Output;
pub use value::Value;

use heap::{Body, Heap};
use ooc_core::names::ClassName;
use ooc_core::{ObjRef, Selector};
use registry::Registry;

/// The heap and the classes defined in it.
///
/// Not thread safe; all operations need exclusive access while they run.
#[derive(Debug)]
pub struct Runtime {
    heap: Heap,
    registry: Registry,
    output: Output,
    diagnostics: Vec<String>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new()
    }
}

impl Runtime {
    /// Create a runtime that renders to stdout
    pub fn new() -> Runtime {
        Runtime::with_output(Output::stdout())
    }

    /// Create a runtime that keeps rendered output in memory
    pub fn capturing() -> Runtime {
        Runtime::with_output(Output::buffer())
    }

    pub fn with_output(output: Output) -> Runtime {
        let roots = bootstrap::root_classes();
        let registry = Registry::with_roots(roots.iter().enumerate().filter_map(|(i, root)| {
            match &root.body {
                Body::Class(body) => Some((body.name.clone(), ObjRef(i))),
                Body::Ivars(_) => None,
            }
        }));
        Runtime {
            heap: Heap::with_roots(roots),
            registry,
            output,
            diagnostics: vec![],
        }
    }

    pub fn output(&mut self) -> &mut Output {
        &mut self.output
    }

    /// Take the output kept by a capturing runtime
    pub fn take_output(&mut self) -> String {
        self.output.take()
    }

    /// Messages of operations that were refused without an error
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Take the messages recorded so far
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }

    pub(crate) fn report(&mut self, msg: String) {
        log::warn!("{}", msg);
        self.diagnostics.push(msg);
    }

    /// Number of live objects, class descriptors included
    pub fn live_objects(&self) -> usize {
        self.heap.live_count()
    }

    /// Number of defined classes, `Object` and `Class` included
    pub fn class_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the class named `name`, if defined
    pub fn find(&self, name: &str) -> Option<ObjRef> {
        self.registry.get(name)
    }

    /// Returns the class named `name`
    pub fn lookup(&self, name: &str) -> Result<ObjRef> {
        self.find(name).ok_or_else(|| Error::UnknownClass {
            name: name.to_string(),
        })
    }

    /// Returns the class of `obj`
    pub fn class_of(&self, obj: ObjRef) -> Result<ObjRef> {
        Ok(self.heap.get(obj)?.class)
    }

    /// Returns the instance size of the class of `obj`
    pub fn size_of(&self, obj: ObjRef) -> Result<usize> {
        let class = self.class_of(obj)?;
        Ok(self.descriptor(class)?.size)
    }

    /// Returns the superclass of `class`. `Object` is its own superclass
    pub fn superclass(&self, class: ObjRef) -> Result<ObjRef> {
        self.descriptor(class)?
            .superclass
            .ok_or(Error::MissingSuperclass { class })
    }

    pub fn class_name(&self, class: ObjRef) -> Result<&ClassName> {
        Ok(&self.descriptor(class)?.name)
    }

    /// Whether instances of `class` are classes, ie. `class` is `Class` or
    /// a subclass of it
    pub fn is_metaclass(&self, class: ObjRef) -> Result<bool> {
        let mut c = class;
        loop {
            if c == CLASS {
                return Ok(true);
            }
            let s = self.superclass(c)?;
            if s == c {
                return Ok(false);
            }
            c = s;
        }
    }

    /// Whether `obj` is a class descriptor
    pub fn is_class(&self, obj: ObjRef) -> Result<bool> {
        Ok(matches!(self.heap.get(obj)?.body, Body::Class(_)))
    }

    /// Returns the content of a class descriptor
    pub fn descriptor(&self, class: ObjRef) -> Result<&ClassBody> {
        match &self.heap.get(class)?.body {
            Body::Class(body) => Ok(&**body),
            Body::Ivars(_) => Err(Error::NotAClass { obj: class }),
        }
    }

    /// Returns the content of a class descriptor under construction.
    /// Fails once the construction has finished
    pub fn descriptor_mut(&mut self, class: ObjRef) -> Result<&mut ClassBody> {
        match &mut self.heap.get_mut(class)?.body {
            Body::Class(body) if body.sealed => Err(Error::Sealed {
                class: body.name.clone(),
            }),
            Body::Class(body) => Ok(&mut **body),
            Body::Ivars(_) => Err(Error::NotAClass { obj: class }),
        }
    }

    /// Returns the method table of `class`
    pub fn methods(&self, class: ObjRef) -> Result<&MethodTable> {
        Ok(&self.descriptor(class)?.methods)
    }

    /// Pick a method of `class`, or fail with `MissingMethod`
    pub(crate) fn method<T>(
        &self,
        class: ObjRef,
        selector: Selector,
        pick: impl FnOnce(&MethodTable) -> Option<T>,
    ) -> Result<T> {
        let body = self.descriptor(class)?;
        pick(&body.methods).ok_or_else(|| Error::MissingMethod {
            class: body.name.clone(),
            selector,
        })
    }

    fn ivars(&self, obj: ObjRef) -> Result<&Vec<Value>> {
        match &self.heap.get(obj)?.body {
            Body::Ivars(ivars) => Ok(ivars),
            Body::Class(_) => Err(Error::NotAnInstance { obj }),
        }
    }

    /// Returns the instance variable at `idx`
    pub fn ivar(&self, obj: ObjRef, idx: usize) -> Result<&Value> {
        self.ivars(obj)?
            .get(idx)
            .ok_or(Error::NoSuchIvar { obj, idx })
    }

    /// Returns the integer instance variable at `idx`
    pub fn ivar_int(&self, obj: ObjRef, idx: usize) -> Result<i64> {
        let v = self.ivar(obj, idx)?;
        v.as_int().ok_or_else(|| {
            bad_argument(format!(
                "instance variable {} of {} is {}, not int",
                idx,
                obj,
                v.kind()
            ))
        })
    }

    pub fn set_ivar(&mut self, obj: ObjRef, idx: usize, value: impl Into<Value>) -> Result<()> {
        let Body::Ivars(ivars) = &mut self.heap.get_mut(obj)?.body else {
            return Err(Error::NotAnInstance { obj });
        };
        let cell = ivars.get_mut(idx).ok_or(Error::NoSuchIvar { obj, idx })?;
        *cell = value.into();
        Ok(())
    }
}
