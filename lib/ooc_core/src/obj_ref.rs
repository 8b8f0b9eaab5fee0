/// Handle to an object living in the runtime heap.
///
/// Class descriptors are objects too, so the same handle type designates
/// both plain instances and classes. Two handles are identical iff they
/// denote the same allocation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct ObjRef(pub usize);

impl std::fmt::Display for ObjRef {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl ObjRef {
    pub fn index(&self) -> usize {
        self.0
    }
}
