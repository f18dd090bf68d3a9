use serde::Deserialize;

use crate::error::{Result, WatermarkError};

/// Watermark appearance and tiling parameters.
///
/// Every field has a default, and deserialization falls back per field, so a
/// partial JSON document merges its overrides onto the defaults. The config
/// is immutable during a layout pass; callers replace it wholesale through
/// the engine when the watermark should change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    /// Label drawn on every tile.
    pub text: String,
    /// Anchor offset of the first tile from the page's top-left.
    pub x: f64,
    pub y: f64,
    /// Grid count hints; zero means auto-compute from the page extent.
    pub rows: usize,
    pub cols: usize,
    /// Gap between adjacent tile bounding boxes. The camelCase aliases
    /// accept option documents shaped like the classic overlay's.
    #[serde(alias = "xSpace")]
    pub x_space: f64,
    #[serde(alias = "ySpace")]
    pub y_space: f64,
    pub color: String,
    /// Opacity in `[0, 1]`, carried through to the rendered tiles unchanged.
    pub alpha: f64,
    pub fontsize: String,
    pub font: String,
    /// Size of one tile's bounding box.
    pub width: f64,
    pub height: f64,
    /// Rotation applied to each tile's text, in degrees.
    pub angle: f64,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: "text".to_string(),
            x: 20.0,
            y: 20.0,
            rows: 0,
            cols: 0,
            x_space: 100.0,
            y_space: 50.0,
            color: "#aaa".to_string(),
            alpha: 0.4,
            fontsize: "15px".to_string(),
            font: "微软雅黑".to_string(),
            width: 210.0,
            height: 80.0,
            angle: 15.0,
        }
    }
}

impl WatermarkConfig {
    /// Repeat distance between adjacent tile origins along the x axis.
    pub fn x_stride(&self) -> f64 {
        self.width + self.x_space
    }

    /// Repeat distance between adjacent tile origins along the y axis.
    pub fn y_stride(&self) -> f64 {
        self.height + self.y_space
    }

    /// Reject configurations whose stride cannot advance the grid. A stride
    /// of zero or less would divide by zero (or walk backwards) in the
    /// column/row computation.
    pub fn validate(&self) -> Result<()> {
        if self.x_stride() <= 0.0 {
            return Err(WatermarkError::InvalidConfig {
                axis: "horizontal",
                stride: self.x_stride(),
            });
        }
        if self.y_stride() <= 0.0 {
            return Err(WatermarkError::InvalidConfig {
                axis: "vertical",
                stride: self.y_stride(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_overlay() {
        let cfg = WatermarkConfig::default();
        assert_eq!(cfg.text, "text");
        assert_eq!(cfg.x, 20.0);
        assert_eq!(cfg.y, 20.0);
        assert_eq!(cfg.cols, 0);
        assert_eq!(cfg.rows, 0);
        assert_eq!(cfg.x_space, 100.0);
        assert_eq!(cfg.y_space, 50.0);
        assert_eq!(cfg.width, 210.0);
        assert_eq!(cfg.height, 80.0);
        assert_eq!(cfg.angle, 15.0);
        assert_eq!(cfg.alpha, 0.4);
        assert_eq!(cfg.color, "#aaa");
        assert_eq!(cfg.fontsize, "15px");
    }

    #[test]
    fn partial_json_merges_onto_defaults() {
        let cfg: WatermarkConfig =
            serde_json::from_str(r#"{"text": "internal use only", "alpha": 0.2}"#).unwrap();
        assert_eq!(cfg.text, "internal use only");
        assert_eq!(cfg.alpha, 0.2);
        assert_eq!(cfg.width, 210.0);
        assert_eq!(cfg.font, "微软雅黑");
    }

    #[test]
    fn classic_spacing_keys_are_accepted() {
        let cfg: WatermarkConfig =
            serde_json::from_str(r#"{"xSpace": 30.0, "ySpace": 10.0}"#).unwrap();
        assert_eq!(cfg.x_space, 30.0);
        assert_eq!(cfg.y_space, 10.0);
    }

    #[test]
    fn strides_sum_size_and_spacing() {
        let cfg = WatermarkConfig::default();
        assert_eq!(cfg.x_stride(), 310.0);
        assert_eq!(cfg.y_stride(), 130.0);
    }

    #[test]
    fn zero_stride_is_rejected() {
        let cfg = WatermarkConfig {
            width: 0.0,
            x_space: 0.0,
            ..WatermarkConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("horizontal"));
    }

    #[test]
    fn negative_vertical_stride_is_rejected() {
        let cfg = WatermarkConfig {
            height: 10.0,
            y_space: -20.0,
            ..WatermarkConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("vertical"));
    }

    #[test]
    fn valid_default_config_passes() {
        WatermarkConfig::default().validate().unwrap();
    }
}
