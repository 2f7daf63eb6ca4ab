use std::collections::BTreeMap;

use crate::foundation::error::{PlatenError, PlatenResult};

/// A named rectangular region destined to receive one component overlay.
///
/// Coordinates are image pixels with the origin at the template's top-left
/// corner. The rectangle spans the half-open intervals `[left, right)`
/// horizontally and `[top, bottom)` vertically.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placeholder {
    /// Placeholder name (unique within a layout).
    pub name: String,
    /// Top edge in pixels.
    pub top: u32,
    /// Left edge in pixels.
    pub left: u32,
    /// Region width in pixels.
    pub width: u32,
    /// Region height in pixels.
    pub height: u32,
}

impl Placeholder {
    /// Exclusive right edge (`left + width`).
    pub fn right(&self) -> u64 {
        u64::from(self.left) + u64::from(self.width)
    }

    /// Exclusive bottom edge (`top + height`).
    pub fn bottom(&self) -> u64 {
        u64::from(self.top) + u64::from(self.height)
    }
}

/// A validated layout: uniquely named, pairwise non-intersecting placeholders.
///
/// A `LayoutSpec` can only be obtained through [`LayoutSpec::from_value`], so
/// holding one implies the geometry already passed validation.
#[derive(Clone, Debug)]
pub struct LayoutSpec {
    placeholders: BTreeMap<String, Placeholder>,
}

impl LayoutSpec {
    /// Parse and validate a layout document.
    ///
    /// `doc` must be an object with a non-empty `placeholders` mapping from
    /// name to `{top, left, width, height}`. Each placeholder is checked
    /// against every previously parsed one for rectangle intersection; the
    /// first intersecting pair fails the whole document.
    #[tracing::instrument(skip(doc))]
    pub fn from_value(doc: &serde_json::Value) -> PlatenResult<Self> {
        let placeholders = doc
            .get("placeholders")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| {
                PlatenError::config("layout config must have a 'placeholders' mapping")
            })?;
        if placeholders.is_empty() {
            return Err(PlatenError::config(
                "at least one placeholder must be configured",
            ));
        }

        let mut parsed = BTreeMap::new();
        for (name, params) in placeholders {
            let ph = parse_placeholder(name, params)?;
            for existing in parsed.values() {
                if overlaps(&ph, existing) {
                    return Err(PlatenError::Overlap {
                        incoming: ph.name,
                        existing: existing.name.clone(),
                    });
                }
            }
            parsed.insert(name.clone(), ph);
        }

        tracing::debug!(placeholders = parsed.len(), "validated layout config");
        Ok(Self {
            placeholders: parsed,
        })
    }

    /// Look up a placeholder by name.
    pub fn placeholder(&self, name: &str) -> PlatenResult<&Placeholder> {
        self.placeholders
            .get(name)
            .ok_or_else(|| PlatenError::UnknownPlaceholder(name.to_string()))
    }

    /// All configured placeholder names, in key order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.placeholders.keys().map(String::as_str)
    }

    /// All configured placeholders, in key order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.placeholders.values()
    }

    /// Number of configured placeholders.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// Area of the axis-aligned bounding box enclosing all placeholders.
    ///
    /// This is a coarse coverage measure: gaps between placeholders inside
    /// the box are counted as covered. Errs on an empty layout, which
    /// [`LayoutSpec::from_value`] makes unreachable.
    pub fn bounding_box_area(&self) -> PlatenResult<u64> {
        let mut values = self.placeholders.values();
        let first = values
            .next()
            .ok_or_else(|| PlatenError::config("layout has no placeholders"))?;

        let mut left = u64::from(first.left);
        let mut top = u64::from(first.top);
        let mut right = first.right();
        let mut bottom = first.bottom();
        for ph in values {
            left = left.min(u64::from(ph.left));
            top = top.min(u64::from(ph.top));
            right = right.max(ph.right());
            bottom = bottom.max(ph.bottom());
        }

        Ok((right - left) * (bottom - top))
    }
}

fn parse_placeholder(name: &str, params: &serde_json::Value) -> PlatenResult<Placeholder> {
    if !params.is_object() {
        return Err(PlatenError::config(format!(
            "placeholder [{name}] parameters must be an object"
        )));
    }

    let field = |key: &str| -> PlatenResult<u32> {
        let raw = params.get(key).ok_or_else(|| {
            PlatenError::config(format!(
                "placeholder [{name}] is missing required field '{key}'"
            ))
        })?;
        raw.as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                PlatenError::config(format!(
                    "placeholder [{name}] field '{key}' must be a non-negative integer"
                ))
            })
    };

    Ok(Placeholder {
        name: name.to_string(),
        top: field("top")?,
        left: field("left")?,
        width: field("width")?,
        height: field("height")?,
    })
}

/// Interval test run while placeholders are parsed: `incoming`'s edges are
/// checked against `existing`'s span on each axis, and the regions intersect
/// only if both axes do. Regions that merely touch at an edge (one's
/// exclusive right edge equal to the other's left edge, and likewise
/// vertically) do not count as intersecting.
fn overlaps(incoming: &Placeholder, existing: &Placeholder) -> bool {
    let horizontal = (incoming.left >= existing.left
        && u64::from(incoming.left) < existing.right())
        || (incoming.right() > u64::from(existing.left) && incoming.right() < existing.right());

    let vertical = (incoming.top >= existing.top && u64::from(incoming.top) < existing.bottom())
        || (incoming.bottom() > u64::from(existing.top) && incoming.bottom() < existing.bottom());

    horizontal && vertical
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
