use crate::args::Args;
use crate::error::Result;
use crate::value::Value;
use crate::Runtime;
use ooc_core::names::SlotName;
use ooc_core::{ObjRef, Selector};
use std::collections::BTreeMap;
use std::io::Write;

/// Initializes `obj` from `args`. Returns the constructed object
pub type ConstructFn = fn(&mut Runtime, ObjRef, &mut Args) -> Result<ObjRef>;
/// Releases resources of `obj`. Returns the object to be freed, or `None`
/// to refuse the deletion
pub type DestructFn = fn(&mut Runtime, ObjRef) -> Result<Option<ObjRef>>;
/// Returns true if the two objects are considered different
pub type DifferFn = fn(&Runtime, ObjRef, ObjRef) -> Result<bool>;
/// Writes a description of `obj`. Returns the number of bytes written
pub type DescribeFn = fn(&Runtime, ObjRef, &mut dyn Write) -> Result<usize>;
/// Implementation of a slot added by a metaclass
pub type CustomFn = fn(&mut Runtime, ObjRef, &mut Args) -> Result<Value>;

/// A replacement of one method slot, given when defining a class
#[derive(Debug, Clone, Copy)]
pub enum Override {
    Construct(ConstructFn),
    Destruct(DestructFn),
    Differ(DifferFn),
    Describe(DescribeFn),
    Custom(SlotName, CustomFn),
}

impl Override {
    pub fn selector(&self) -> Selector {
        match self {
            Override::Construct(_) => Selector::Construct,
            Override::Destruct(_) => Selector::Destruct,
            Override::Differ(_) => Selector::Differ,
            Override::Describe(_) => Selector::Describe,
            Override::Custom(name, _) => Selector::Custom(*name),
        }
    }
}

/// Methods of a class.
///
/// A class starts with a copy of its superclass's table and then applies
/// its overrides, so a table of a fully constructed class has every slot
/// its superclass has.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    pub construct: Option<ConstructFn>,
    pub destruct: Option<DestructFn>,
    pub differ: Option<DifferFn>,
    pub describe: Option<DescribeFn>,
    /// Slots added by metaclasses, keyed by the slot name
    custom: BTreeMap<SlotName, CustomFn>,
}

impl MethodTable {
    /// Create a table with the four builtin slots filled
    pub fn new(
        construct: ConstructFn,
        destruct: DestructFn,
        differ: DifferFn,
        describe: DescribeFn,
    ) -> MethodTable {
        MethodTable {
            construct: Some(construct),
            destruct: Some(destruct),
            differ: Some(differ),
            describe: Some(describe),
            custom: BTreeMap::new(),
        }
    }

    /// Build the table of a class: inherit everything from `super_table`
    /// and then apply the overrides of the builtin slots.
    /// Custom overrides are left to the metaclass which knows the slot.
    pub fn build(super_table: &MethodTable, overrides: &[Override]) -> MethodTable {
        let mut table = super_table.clone();
        for o in overrides {
            table.apply(o);
        }
        table
    }

    /// Replace a builtin slot. Returns false if `o` is a custom override
    pub fn apply(&mut self, o: &Override) -> bool {
        match *o {
            Override::Construct(f) => self.construct = Some(f),
            Override::Destruct(f) => self.destruct = Some(f),
            Override::Differ(f) => self.differ = Some(f),
            Override::Describe(f) => self.describe = Some(f),
            Override::Custom(_, _) => return false,
        }
        true
    }

    /// Install the implementation of a custom slot
    pub fn install(&mut self, slot: SlotName, f: CustomFn) {
        self.custom.insert(slot, f);
    }

    pub fn custom(&self, slot: SlotName) -> Option<CustomFn> {
        self.custom.get(&slot).copied()
    }

    /// Names of the custom slots, sorted
    pub fn custom_slots(&self) -> impl Iterator<Item = SlotName> + '_ {
        self.custom.keys().copied()
    }

    /// Whether the slot for `selector` is filled
    pub fn has(&self, selector: Selector) -> bool {
        match selector {
            Selector::Construct => self.construct.is_some(),
            Selector::Destruct => self.destruct.is_some(),
            Selector::Differ => self.differ.is_some(),
            Selector::Describe => self.describe.is_some(),
            Selector::Custom(name) => self.custom.contains_key(&name),
        }
    }
}
