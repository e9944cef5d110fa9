//! Single-owner accumulator for one conversion run.
//!
//! The reference map, type tally, output document, and event sink all live
//! in one [`DocumentBuilder`] value. The component walk and the dependency
//! pass mutate the builder through `&mut self`; nothing is shared or
//! aliased, and the finished document is moved out by [`finish`].
//!
//! [`finish`]: DocumentBuilder::finish

use crate::convert::events::{ConversionEvent, EventSink};
use crate::model::cyclonedx::Component;
use crate::model::spdx::SpdxDocument;
use indexmap::IndexMap;

/// Accumulator threading the reference map, tally, and document through the
/// conversion passes. Valid for exactly one input document.
pub struct DocumentBuilder<'bom, 'ev> {
    /// BOM reference → component record, insert-once.
    pub(super) reference_map: IndexMap<String, &'bom Component>,
    /// Component type label → occurrence count. Reporting only.
    pub(super) type_tally: IndexMap<String, usize>,
    pub(super) document: SpdxDocument,
    pub(super) events: &'ev mut dyn EventSink,
}

impl<'bom, 'ev> DocumentBuilder<'bom, 'ev> {
    /// Create a builder around an empty SPDX document.
    pub fn new(events: &'ev mut dyn EventSink) -> Self {
        Self {
            reference_map: IndexMap::new(),
            type_tally: IndexMap::new(),
            document: SpdxDocument::new(),
            events,
        }
    }

    /// The document under construction.
    pub fn document(&self) -> &SpdxDocument {
        &self.document
    }

    /// Mutable access for document-level metadata (name, namespace,
    /// creation info). Packages and relationships are appended by the
    /// mapping passes, not through this.
    pub fn document_mut(&mut self) -> &mut SpdxDocument {
        &mut self.document
    }

    /// Whether a BOM reference has been mapped.
    pub fn is_mapped(&self, reference: &str) -> bool {
        self.reference_map.contains_key(reference)
    }

    /// Look up a mapped component by its BOM reference.
    pub fn mapped_component(&self, reference: &str) -> Option<&'bom Component> {
        self.reference_map.get(reference).copied()
    }

    /// Number of components mapped so far.
    pub fn mapped_count(&self) -> usize {
        self.reference_map.len()
    }

    /// Occurrence counts per component type label.
    pub fn type_tally(&self) -> &IndexMap<String, usize> {
        &self.type_tally
    }

    /// Report walk statistics and move the finished document out.
    pub fn finish(self) -> SpdxDocument {
        self.events.record_info(ConversionEvent::ComponentsMapped {
            count: self.reference_map.len(),
        });
        self.events.record_info(ConversionEvent::TypeTally {
            counts: self
                .type_tally
                .iter()
                .map(|(label, count)| (label.clone(), *count))
                .collect(),
        });
        self.document
    }
}
