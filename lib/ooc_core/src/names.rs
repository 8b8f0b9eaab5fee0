#[derive(Debug, PartialEq, Clone, Default, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(pub String);

impl std::borrow::Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn class_name(s: impl Into<String>) -> ClassName {
    let name = s.into();
    debug_assert!(!name.is_empty());
    ClassName(name)
}

/// Name of a method slot added by a metaclass (eg. `draw`).
/// The four slots every class has are named by `Selector` instead.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash, PartialOrd, Ord)]
pub struct SlotName(pub &'static str);

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
