//! Sequential object table.

use std::fmt;

/// 1-based identifier of an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Raw object number.
    pub fn number(self) -> u32 {
        self.0
    }
}

/// Formats as an indirect reference, e.g. `3 0 R`.
impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0 R", self.0)
    }
}

/// Owned list of serialized object bodies.
///
/// Ids are handed out strictly in insertion order starting at 1, so an id
/// is also the position of its body in the table. Objects cannot be
/// removed or reordered; a body can only be overwritten in place, which is
/// how forward references get resolved.
#[derive(Debug, Default, Clone)]
pub struct ObjectTable {
    objects: Vec<Vec<u8>>,
}

impl ObjectTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object body and return its id.
    pub fn add(&mut self, body: impl Into<Vec<u8>>) -> ObjectId {
        self.objects.push(body.into());
        ObjectId(self.objects.len() as u32)
    }

    /// Overwrite the body of an existing object.
    ///
    /// Ids only come from [`ObjectTable::add`] on this table, so the slot
    /// always exists.
    pub fn replace(&mut self, id: ObjectId, body: impl Into<Vec<u8>>) {
        let slot = &mut self.objects[id.0 as usize - 1];
        *slot = body.into();
    }

    /// Body of an object, if the id is in range.
    pub fn get(&self, id: ObjectId) -> Option<&[u8]> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|idx| self.objects.get(idx))
            .map(Vec::as_slice)
    }

    /// Number of objects (excluding the free entry 0).
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if no object has been added.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over `(id, body)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &[u8])> {
        self.objects
            .iter()
            .enumerate()
            .map(|(idx, body)| (ObjectId(idx as u32 + 1), body.as_slice()))
    }
}
