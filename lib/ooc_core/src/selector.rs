use crate::names::SlotName;

/// Identifies a dispatchable method slot
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Selector {
    Construct,
    Destruct,
    Differ,
    Describe,
    /// A slot added by a descendant metaclass
    Custom(SlotName),
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Selector::Construct => write!(f, "construct"),
            Selector::Destruct => write!(f, "destruct"),
            Selector::Differ => write!(f, "differ"),
            Selector::Describe => write!(f, "describe"),
            Selector::Custom(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Selector::Differ.to_string(), "differ");
        assert_eq!(Selector::Custom(SlotName("draw")).to_string(), "draw");
    }
}
