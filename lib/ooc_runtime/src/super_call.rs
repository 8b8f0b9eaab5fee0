//! Call the superclass's implementation of a method.
//!
//! `class` is the class where the calling method is defined, which is not
//! always the class of `obj`. These must only be called from an override
//! of the same selector installed on `class`.
use crate::args::Args;
use crate::error::Result;
use crate::value::Value;
use crate::Runtime;
use ooc_core::names::SlotName;
use ooc_core::{ObjRef, Selector};
use std::io::Write;

impl Runtime {
    pub fn super_construct(
        &mut self,
        class: ObjRef,
        obj: ObjRef,
        args: &mut Args,
    ) -> Result<ObjRef> {
        self.heap.get(obj)?;
        let superclass = self.superclass(class)?;
        let f = self.method(superclass, Selector::Construct, |m| m.construct)?;
        f(self, obj, args)
    }

    pub fn super_destruct(&mut self, class: ObjRef, obj: ObjRef) -> Result<Option<ObjRef>> {
        self.heap.get(obj)?;
        let superclass = self.superclass(class)?;
        let f = self.method(superclass, Selector::Destruct, |m| m.destruct)?;
        f(self, obj)
    }

    pub fn super_differ(&self, class: ObjRef, obj: ObjRef, other: ObjRef) -> Result<bool> {
        self.heap.get(obj)?;
        let superclass = self.superclass(class)?;
        let f = self.method(superclass, Selector::Differ, |m| m.differ)?;
        f(self, obj, other)
    }

    pub fn super_describe(
        &self,
        class: ObjRef,
        obj: ObjRef,
        out: &mut dyn Write,
    ) -> Result<usize> {
        self.heap.get(obj)?;
        let superclass = self.superclass(class)?;
        let f = self.method(superclass, Selector::Describe, |m| m.describe)?;
        f(self, obj, out)
    }

    pub fn super_send(
        &mut self,
        class: ObjRef,
        obj: ObjRef,
        slot: SlotName,
        args: &mut Args,
    ) -> Result<Value> {
        self.heap.get(obj)?;
        let superclass = self.superclass(class)?;
        let f = self.method(superclass, Selector::Custom(slot), |m| m.custom(slot))?;
        f(self, obj, args)
    }
}
