//! Board configuration types.
//!
//! The host configures the engine at startup by providing a `BoardConfig`:
//! - Cell size in pixels (the board is always a whole number of cells)
//! - Gravity interval
//! - Minimum and initial board dimensions
//! - Vertical space reserved for controls when sizing from a pixel budget
//!
//! The engine never reads the window or canvas itself - the host reports
//! its pixel budget through `Action::Resize`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default cell edge length in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 30;

/// Default gravity interval in milliseconds.
pub const DEFAULT_DROP_INTERVAL_MS: u64 = 1000;

/// Default cap on each board axis, in cells.
pub const DEFAULT_MAX_DIMENSION: usize = 200;

/// Board size measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardDimensions {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl BoardDimensions {
    /// Create a new dimension pair.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells, saturating at `usize::MAX`.
    #[must_use]
    pub const fn area(self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Canvas size in pixels for the given cell size, saturating at `u32::MAX`.
    #[must_use]
    pub fn canvas_px(self, cell_size: u32) -> (u32, u32) {
        let px = |cells: usize| u32::try_from(cells).unwrap_or(u32::MAX).saturating_mul(cell_size);
        (px(self.width), px(self.height))
    }
}

impl std::fmt::Display for BoardDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Complete board configuration.
///
/// ## Example
///
/// ```
/// use skill_blocks::core::{BoardConfig, BoardDimensions};
///
/// let config = BoardConfig::new()
///     .with_cell_size(20)
///     .with_min_dimensions(4, 4)
///     .with_initial_dimensions(10, 8);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.initial, BoardDimensions::new(10, 8));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Cell edge length in pixels.
    pub cell_size: u32,

    /// Gravity interval in milliseconds.
    pub drop_interval_ms: u64,

    /// Smallest board width accepted from a resize.
    pub min_width: usize,

    /// Smallest board height accepted from a resize.
    pub min_height: usize,

    /// Largest board width accepted from a resize.
    pub max_width: usize,

    /// Largest board height accepted from a resize.
    pub max_height: usize,

    /// Dimensions used before the first resize notification.
    pub initial: BoardDimensions,

    /// Pixels subtracted from the height budget for buttons and labels.
    pub reserved_height_px: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            min_width: 20,
            min_height: 18,
            max_width: DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION,
            initial: BoardDimensions::new(30, 18),
            reserved_height_px: 200.0,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with the portfolio defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell size in pixels.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the gravity interval.
    #[must_use]
    pub fn with_drop_interval_ms(mut self, interval: u64) -> Self {
        self.drop_interval_ms = interval;
        self
    }

    /// Set the minimum board dimensions for resizes.
    #[must_use]
    pub fn with_min_dimensions(mut self, width: usize, height: usize) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Set the maximum board dimensions for resizes.
    #[must_use]
    pub fn with_max_dimensions(mut self, width: usize, height: usize) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Set the board dimensions used before any resize.
    #[must_use]
    pub fn with_initial_dimensions(mut self, width: usize, height: usize) -> Self {
        self.initial = BoardDimensions::new(width, height);
        self
    }

    /// Set the vertical space reserved for controls.
    #[must_use]
    pub fn with_reserved_height_px(mut self, px: f64) -> Self {
        self.reserved_height_px = px;
        self
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.min_width == 0 || self.min_height == 0 {
            return Err(ConfigError::ZeroMinimumDimension {
                width: self.min_width,
                height: self.min_height,
            });
        }
        if self.max_width < self.min_width || self.max_height < self.min_height {
            return Err(ConfigError::MaximumBelowMinimum {
                min: BoardDimensions::new(self.min_width, self.min_height),
                max: BoardDimensions::new(self.max_width, self.max_height),
            });
        }
        if self.initial.width == 0 || self.initial.height == 0 {
            return Err(ConfigError::EmptyInitialBoard {
                width: self.initial.width,
                height: self.initial.height,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }

    /// Board dimensions that fit a pixel budget.
    ///
    /// Each axis is `floor(px / cell_size)`, clamped to the configured
    /// minimum and maximum. The height budget has `reserved_height_px`
    /// removed first. Non-finite or negative budgets fall back to the minimum.
    #[must_use]
    pub fn dimensions_for(&self, width_px: f64, height_px: f64) -> BoardDimensions {
        let cell = f64::from(self.cell_size.max(1));
        let cells = |px: f64, min: usize, max: usize| -> usize {
            let n = (px / cell).floor();
            if n.is_finite() && n > 0.0 {
                (n as usize).min(max).max(min)
            } else {
                min
            }
        };

        BoardDimensions::new(
            cells(width_px, self.min_width, self.max_width),
            cells(height_px - self.reserved_height_px, self.min_height, self.max_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.cell_size, 30);
        assert_eq!(config.drop_interval_ms, 1000);
        assert_eq!(config.initial, BoardDimensions::new(30, 18));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new()
            .with_cell_size(10)
            .with_drop_interval_ms(250)
            .with_min_dimensions(4, 4)
            .with_initial_dimensions(4, 6)
            .with_reserved_height_px(0.0);

        assert_eq!(config.cell_size, 10);
        assert_eq!(config.drop_interval_ms, 250);
        assert_eq!((config.min_width, config.min_height), (4, 4));
        assert_eq!(config.initial, BoardDimensions::new(4, 6));
        assert_eq!(config.reserved_height_px, 0.0);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert_eq!(
            BoardConfig::new().with_cell_size(0).validate(),
            Err(ConfigError::ZeroCellSize)
        );
        assert_eq!(
            BoardConfig::new().with_min_dimensions(0, 3).validate(),
            Err(ConfigError::ZeroMinimumDimension { width: 0, height: 3 })
        );
        assert_eq!(
            BoardConfig::new().with_initial_dimensions(5, 0).validate(),
            Err(ConfigError::EmptyInitialBoard { width: 5, height: 0 })
        );
        assert_eq!(
            BoardConfig::new().with_drop_interval_ms(0).validate(),
            Err(ConfigError::ZeroDropInterval)
        );
    }

    #[test]
    fn test_dimensions_for_pixel_budget() {
        let config = BoardConfig::default();

        // 1000 / 30 = 33.3 -> 33; (900 - 200) / 30 = 23.3 -> 23
        assert_eq!(config.dimensions_for(1000.0, 900.0), BoardDimensions::new(33, 23));

        // Small budgets clamp to the minimum
        assert_eq!(config.dimensions_for(100.0, 100.0), BoardDimensions::new(20, 18));
    }

    #[test]
    fn test_dimensions_for_degenerate_budget() {
        let config = BoardConfig::default();
        assert_eq!(config.dimensions_for(f64::NAN, -50.0), BoardDimensions::new(20, 18));
        assert_eq!(
            config.dimensions_for(f64::INFINITY, 0.0),
            BoardDimensions::new(20, 18)
        );
    }

    #[test]
    fn test_dimensions_for_huge_budget_is_capped() {
        let config = BoardConfig::default();
        assert_eq!(
            config.dimensions_for(1.0e30, 1.0e30),
            BoardDimensions::new(DEFAULT_MAX_DIMENSION, DEFAULT_MAX_DIMENSION)
        );

        let config = config.with_max_dimensions(40, 25);
        assert_eq!(config.dimensions_for(1.0e9, 1000.0), BoardDimensions::new(40, 25));
    }

    #[test]
    fn test_validate_rejects_max_below_min() {
        assert_eq!(
            BoardConfig::new().with_max_dimensions(10, 30).validate(),
            Err(ConfigError::MaximumBelowMinimum {
                min: BoardDimensions::new(20, 18),
                max: BoardDimensions::new(10, 30),
            })
        );
    }

    #[test]
    fn test_area_and_canvas_saturate() {
        let dims = BoardDimensions::new(usize::MAX, 2);
        assert_eq!(dims.area(), usize::MAX);
        assert_eq!(dims.canvas_px(30), (u32::MAX, 60));
    }

    #[test]
    fn test_canvas_px() {
        let dims = BoardDimensions::new(20, 18);
        assert_eq!(dims.canvas_px(30), (600, 540));
        assert_eq!(dims.area(), 360);
        assert_eq!(format!("{}", dims), "20x18");
    }
}
