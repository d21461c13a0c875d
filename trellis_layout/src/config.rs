// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy selection, grid metrics, and configuration errors.

use kurbo::{Insets, Size};

/// Identifies one of the four built-in layout strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Items flow left-to-right, wrapping into rows; content grows downward.
    #[default]
    Vertical,
    /// Items flow top-to-bottom, wrapping into columns; content grows
    /// rightward.
    Horizontal,
    /// Items are partitioned into viewport-sized pages laid out side by
    /// side; within a page items flow left-to-right, then top-to-bottom.
    PagedLtr,
    /// Paged like [`StrategyKind::PagedLtr`], but within a page items flow
    /// top-to-bottom, then left-to-right.
    PagedTtb,
}

impl StrategyKind {
    /// Returns `true` if this kind lays items out in side-by-side pages.
    ///
    /// Hosts must enable paged/snap scrolling for these kinds; the layout
    /// engine declares the requirement but does not enforce it.
    #[must_use]
    pub const fn is_paged(self) -> bool {
        matches!(self, Self::PagedLtr | Self::PagedTtb)
    }
}

/// Grid metrics shared by every strategy.
///
/// `min_edge_insets` are a *minimum*: when `center_grid` is set and the grid
/// is narrower than its bounds on the cross axis, the slack is distributed
/// as symmetric padding. Centering never shrinks padding below the insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Size of every item cell. Must be strictly positive on both axes.
    pub item_size: Size,
    /// Gap between adjacent cells, on both axes.
    pub item_spacing: f64,
    /// Minimum padding between the grid and the bounds edges.
    pub min_edge_insets: Insets,
    /// Center the grid on the cross axis when it does not fill the bounds.
    pub center_grid: bool,
}

impl GridConfig {
    /// Creates a config with the given item size and the default spacing
    /// (10), edge insets (5 on every edge), and centering (enabled).
    #[must_use]
    pub const fn new(item_size: Size) -> Self {
        Self {
            item_size,
            item_spacing: 10.0,
            min_edge_insets: Insets::uniform(5.0),
            center_grid: true,
        }
    }

    /// Checks that the config describes a usable grid.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.item_size.width > 0.0 && self.item_size.height > 0.0) {
            return Err(LayoutError::InvalidConfiguration {
                item_size: self.item_size,
            });
        }
        Ok(())
    }
}

/// Errors produced when configuring a layout strategy.
///
/// Range and geometry misses are *not* errors: out-of-range indices and
/// points between cells are reported as `None` sentinels by the query
/// methods. Configuration problems are programming errors and fail fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// The item size is not strictly positive on both axes.
    InvalidConfiguration {
        /// The offending item size.
        item_size: Size,
    },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfiguration { item_size } => write!(
                f,
                "invalid grid configuration: item size {item_size:?} must be positive on both axes"
            ),
        }
    }
}

impl core::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::{GridConfig, LayoutError};
    use kurbo::Size;

    #[test]
    fn default_knobs_match_documented_values() {
        let config = GridConfig::new(Size::new(100.0, 100.0));
        assert_eq!(config.item_spacing, 10.0);
        assert_eq!(config.min_edge_insets.x0, 5.0);
        assert_eq!(config.min_edge_insets.y1, 5.0);
        assert!(config.center_grid);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_positive_item_size_is_rejected() {
        for size in [
            Size::new(0.0, 100.0),
            Size::new(100.0, 0.0),
            Size::new(-1.0, 100.0),
            Size::ZERO,
        ] {
            let config = GridConfig::new(size);
            assert!(
                matches!(
                    config.validate(),
                    Err(LayoutError::InvalidConfiguration { .. })
                ),
                "expected {size:?} to be rejected"
            );
        }
    }
}
