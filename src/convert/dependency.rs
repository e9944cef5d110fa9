//! Dependency resolution pass.
//!
//! Runs after the component walk: every reference in the flat dependency
//! list must already be present in the reference map. Emits one DEPENDS_ON
//! relationship per (source, target) pair, preserving target order.

use crate::convert::builder::DocumentBuilder;
use crate::error::{ConvertError, Result};
use crate::model::cyclonedx::Dependency;
use crate::model::spdx::{spdx_ref, Relationship, RelationshipType};

impl DocumentBuilder<'_, '_> {
    /// Resolve one entry of the flat dependency list.
    ///
    /// A source or target reference that was never mapped is fatal; callers
    /// needing lenient behavior should pre-filter the input. Duplicate
    /// entries produce duplicate relationships; no deduplication happens
    /// here.
    pub fn add_dependency(&mut self, dependency: &Dependency) -> Result<()> {
        let source = dependency.dependency_ref.as_str();
        if !self.is_mapped(source) {
            return Err(ConvertError::dangling_source(source));
        }

        for target in dependency.depends_on.iter().flatten() {
            if !self.is_mapped(target) {
                return Err(ConvertError::dangling_target(target.clone()));
            }
            self.document.relationships.push(Relationship::new(
                spdx_ref(source),
                spdx_ref(target),
                RelationshipType::DependsOn,
            ));
        }

        Ok(())
    }
}
