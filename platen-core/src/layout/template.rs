use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::error::{PlatenError, PlatenResult},
    layout::model::{LayoutSpec, Placeholder},
    raster::surface::Surface,
};

/// Overlay-application state machine for one template image.
///
/// A `TemplateLayout` owns a validated [`LayoutSpec`], tracks which
/// placeholders have already received an overlay, and pastes component
/// images onto the template. The template is borrowed mutably for the
/// tracker's lifetime, so callers cannot mutate it out from under the
/// tracker.
///
/// Application is apply-once: a placeholder name is recorded at most once
/// and re-applying it fails, regardless of whether the overlay is identical.
#[derive(Debug)]
pub struct TemplateLayout<'a, S: Surface> {
    spec: LayoutSpec,
    applied: BTreeSet<String>,
    base: &'a mut S,
}

impl<'a, S: Surface> TemplateLayout<'a, S> {
    /// Parse and validate `config` and bind the tracker to `base`.
    ///
    /// See [`LayoutSpec::from_value`] for the accepted document shape and
    /// the geometry rules enforced at construction time.
    pub fn new(base: &'a mut S, config: &serde_json::Value) -> PlatenResult<Self> {
        let spec = LayoutSpec::from_value(config)?;
        Ok(Self {
            spec,
            applied: BTreeSet::new(),
            base,
        })
    }

    /// Look up a placeholder by name.
    pub fn placeholder(&self, name: &str) -> PlatenResult<&Placeholder> {
        self.spec.placeholder(name)
    }

    /// Check whether `overlay`'s dimensions exactly match the named
    /// placeholder, returning the placeholder on success.
    pub fn validate_image_for_placeholder(
        &self,
        name: &str,
        overlay: &S,
    ) -> PlatenResult<&Placeholder> {
        let ph = self.spec.placeholder(name)?;
        if ph.width != overlay.width() || ph.height != overlay.height() {
            return Err(PlatenError::IncompatibleImage {
                name: ph.name.clone(),
                actual_width: overlay.width(),
                actual_height: overlay.height(),
                expected_width: ph.width,
                expected_height: ph.height,
            });
        }
        Ok(ph)
    }

    /// Paste `overlay` into the named placeholder's region and record the
    /// application.
    ///
    /// Fails without touching the template or the tracking set when the
    /// name is unknown, the overlay's size does not match, or the
    /// placeholder was already applied.
    #[tracing::instrument(skip(self, overlay))]
    pub fn apply_component(&mut self, name: &str, overlay: &S) -> PlatenResult<()> {
        if self.applied.contains(name) {
            return Err(PlatenError::DuplicateApplication(name.to_string()));
        }

        let (left, top) = {
            let ph = self.validate_image_for_placeholder(name, overlay)?;
            (ph.left, ph.top)
        };

        tracing::debug!(left, top, "pasting component overlay");
        self.base.paste(overlay, left, top);
        self.applied.insert(name.to_string());
        Ok(())
    }

    /// Apply multiple overlays, in map key order.
    ///
    /// Stops at and propagates the first error. Overlays already pasted by
    /// the failing batch stay on the template; there is no rollback.
    pub fn apply_components(&mut self, components: &BTreeMap<String, S>) -> PlatenResult<()> {
        for (name, overlay) in components {
            self.apply_component(name, overlay)?;
        }
        Ok(())
    }

    /// Names of all configured placeholders.
    pub fn supported_placeholder_names(&self) -> Vec<&str> {
        self.spec.names().collect()
    }

    /// Names of placeholders that have received an overlay.
    pub fn applied_placeholder_names(&self) -> Vec<&str> {
        self.applied.iter().map(String::as_str).collect()
    }

    /// Names of placeholders still waiting for an overlay.
    pub fn unapplied_placeholder_names(&self) -> Vec<&str> {
        self.spec
            .names()
            .filter(|name| !self.applied.contains(*name))
            .collect()
    }

    /// Whether every configured placeholder has received an overlay.
    ///
    /// Completeness is advisory: nothing forces a caller to fill every
    /// placeholder before reading the template back.
    pub fn is_completely_applied(&self) -> bool {
        self.unapplied_placeholder_names().is_empty()
    }

    /// Coverage pair `(covered, total)` in pixels.
    ///
    /// `total` is the template area; `covered` is the area of the bounding
    /// box enclosing all placeholders (see [`LayoutSpec::bounding_box_area`]),
    /// not the exact union of the individual regions.
    pub fn placeholder_total_coverage(&self) -> PlatenResult<(u64, u64)> {
        let covered = self.spec.bounding_box_area()?;
        let total = u64::from(self.base.width()) * u64::from(self.base.height());
        Ok((covered, total))
    }

    /// Whether the placeholder bounding box spans the whole template.
    ///
    /// Placeholders leaving gaps inside their collective bounding box still
    /// report `true`; this mirrors [`TemplateLayout::placeholder_total_coverage`].
    pub fn is_covered(&self) -> PlatenResult<bool> {
        let (covered, total) = self.placeholder_total_coverage()?;
        Ok(covered == total)
    }

    /// Read access to the template being composed.
    pub fn base(&self) -> &S {
        self.base
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/template.rs"]
mod tests;
