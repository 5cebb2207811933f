//! Read-only view projections over aggregation output.
//!
//! Everything here is derived on demand for the rendering layer; there
//! is no state and no mutation path back into the engine.

use crate::models::cell::CellId;
use crate::services::aggregation::{aggregate, cell_fill};
use crate::services::availability::AvailabilityStore;

/// Name lists backing a cell's hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TooltipDetail {
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
}

impl TooltipDetail {
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn unavailable_count(&self) -> usize {
        self.unavailable.len()
    }
}

/// Tooltip content for `cell`, or `None` when nobody is available there
/// (the tooltip is suppressed entirely for empty cells).
pub fn tooltip_detail(cell: CellId, store: &AvailabilityStore) -> Option<TooltipDetail> {
    let breakdown = aggregate(cell, store);
    if breakdown.available.is_empty() {
        return None;
    }

    Some(TooltipDetail {
        available: breakdown
            .available
            .iter()
            .map(|participant| participant.name.clone())
            .collect(),
        unavailable: breakdown
            .unavailable
            .iter()
            .map(|participant| participant.name.clone())
            .collect(),
    })
}

/// CSS-style fill for one cell: an `hsl()` background plus an alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub background: String,
    pub opacity: f32,
}

/// Fill style for `cell`, or `None` for a fully transparent cell.
pub fn fill_style(cell: CellId, store: &AvailabilityStore) -> Option<FillStyle> {
    let fill = cell_fill(cell, store)?;
    Some(FillStyle {
        background: format!(
            "hsl({}, {}%, {}%)",
            fill.hue, fill.saturation, fill.lightness
        ),
        opacity: fill.opacity,
    })
}
