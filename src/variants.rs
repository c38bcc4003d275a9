//! Variant row bookkeeping for the add-product form.

/// Hands out variant row ids. Ids are never reused within a page session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariantEditor {
    next_id: u32,
}

impl VariantEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next row id.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of rows ever added (what `#variantCount` carries).
    pub fn added(&self) -> u32 {
        self.next_id
    }
}

pub fn row_dom_id(id: u32) -> String {
    format!("variant-{id}")
}
