use crate::error::{Error, Result};
use ooc_core::names::ClassName;
use ooc_core::ObjRef;
use std::collections::HashMap;

/// Mapping from class names to class descriptors
#[derive(Debug)]
pub(crate) struct Registry {
    classes: HashMap<ClassName, ObjRef>,
}

impl Registry {
    /// Create a registry of the root classes
    pub fn with_roots(roots: impl IntoIterator<Item = (ClassName, ObjRef)>) -> Registry {
        Registry {
            classes: roots.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, name: ClassName, class: ObjRef) -> Result<()> {
        if self.classes.contains_key(&name) {
            return Err(Error::Redefinition { name });
        }
        self.classes.insert(name, class);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<ObjRef> {
        self.classes.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
