//! Selectors: find the method in the class of the receiver and call it.
use crate::args::Args;
use crate::error::Result;
use crate::value::Value;
use crate::Runtime;
use ooc_core::names::SlotName;
use ooc_core::{ObjRef, Selector};
use std::io::Write;

impl Runtime {
    pub fn construct(&mut self, obj: ObjRef, args: &mut Args) -> Result<ObjRef> {
        let class = self.class_of(obj)?;
        let f = self.method(class, Selector::Construct, |m| m.construct)?;
        log::trace!("construct {} (class {})", obj, class);
        f(self, obj, args)
    }

    pub fn destruct(&mut self, obj: ObjRef) -> Result<Option<ObjRef>> {
        let class = self.class_of(obj)?;
        let f = self.method(class, Selector::Destruct, |m| m.destruct)?;
        log::trace!("destruct {} (class {})", obj, class);
        f(self, obj)
    }

    /// Returns true if `obj` and `other` are considered different
    pub fn differ(&self, obj: ObjRef, other: ObjRef) -> Result<bool> {
        let class = self.class_of(obj)?;
        let f = self.method(class, Selector::Differ, |m| m.differ)?;
        log::trace!("differ {} {} (class {})", obj, other, class);
        f(self, obj, other)
    }

    /// Write the description of `obj` to `out`.
    /// Returns the number of bytes written
    pub fn describe(&self, obj: ObjRef, out: &mut dyn Write) -> Result<usize> {
        let class = self.class_of(obj)?;
        let f = self.method(class, Selector::Describe, |m| m.describe)?;
        log::trace!("describe {} (class {})", obj, class);
        f(self, obj, out)
    }

    /// Call a method added by a metaclass
    pub fn send(&mut self, obj: ObjRef, slot: SlotName, args: &mut Args) -> Result<Value> {
        let class = self.class_of(obj)?;
        let f = self.method(class, Selector::Custom(slot), |m| m.custom(slot))?;
        log::trace!("{} {} (class {})", slot, obj, class);
        f(self, obj, args)
    }
}
