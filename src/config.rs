use serde::{Deserialize, Serialize};

use crate::axes::{CustomLabels, LabelOrientation};
use crate::core::{DEFAULT_NON_ZERO_DECIMALS, RowRange, ScaleMode};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DEFAULT_SCROLL_STEP_PERCENT;

/// Largest number of significant fractional digits a label may carry.
pub const MAX_NON_ZERO_DECIMALS: usize = 8;

/// Configuration of both axes and the zoom tracker.
///
/// Serializable so host applications can persist a chart setup. Every field
/// has a default, so a partial JSON document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    /// Share of the base column span one wheel notch zooms by, in percent.
    #[serde(default = "default_scroll_step_percent")]
    pub scroll_step_percent: u8,
    #[serde(default)]
    pub label_orientation: LabelOrientation,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default = "default_non_zero_decimals")]
    pub non_zero_decimals: usize,
    /// Column label text keyed by series position.
    #[serde(default)]
    pub custom_labels: CustomLabels,
    /// Row axis range to show even when the data is narrower.
    #[serde(default)]
    pub row_range: Option<RowRange>,
    /// Slide the column axis instead of compressing a series wider than the graph.
    #[serde(default)]
    pub rolling_columns: bool,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            scroll_step_percent: default_scroll_step_percent(),
            label_orientation: LabelOrientation::default(),
            scale_mode: ScaleMode::default(),
            non_zero_decimals: default_non_zero_decimals(),
            custom_labels: CustomLabels::new(),
            row_range: None,
            rolling_columns: false,
        }
    }
}

impl AxesConfig {
    #[must_use]
    pub fn with_scroll_step_percent(mut self, percent: u8) -> Self {
        self.scroll_step_percent = percent;
        self
    }

    #[must_use]
    pub fn with_label_orientation(mut self, orientation: LabelOrientation) -> Self {
        self.label_orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    #[must_use]
    pub fn with_non_zero_decimals(mut self, decimals: usize) -> Self {
        self.non_zero_decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_custom_label(mut self, position: i64, text: impl Into<String>) -> Self {
        self.custom_labels.insert(position, text.into());
        self
    }

    #[must_use]
    pub fn with_row_range(mut self, range: Option<RowRange>) -> Self {
        self.row_range = range;
        self
    }

    #[must_use]
    pub fn with_rolling_columns(mut self, rolling: bool) -> Self {
        self.rolling_columns = rolling;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !(1..=100).contains(&self.scroll_step_percent) {
            return Err(ChartError::InvalidConfig(format!(
                "scroll step must be within 1..=100 percent, got {}",
                self.scroll_step_percent
            )));
        }
        if !(1..=MAX_NON_ZERO_DECIMALS).contains(&self.non_zero_decimals) {
            return Err(ChartError::InvalidConfig(format!(
                "non-zero decimals must be within 1..={MAX_NON_ZERO_DECIMALS}, got {}",
                self.non_zero_decimals
            )));
        }
        if let Some((position, _)) = self.custom_labels.iter().find(|(p, _)| **p < 0) {
            return Err(ChartError::InvalidConfig(format!(
                "custom label position must be non-negative, got {position}"
            )));
        }
        if let Some(range) = self.row_range {
            range
                .validate()
                .map_err(|e| ChartError::InvalidConfig(format!("row range: {e}")))?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a configuration document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_scroll_step_percent() -> u8 {
    DEFAULT_SCROLL_STEP_PERCENT
}

fn default_non_zero_decimals() -> usize {
    DEFAULT_NON_ZERO_DECIMALS
}
