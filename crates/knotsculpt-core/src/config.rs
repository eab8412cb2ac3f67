//! 编辑器配置
//!
//! 所有距离阈值都以米为单位。

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 网格生成参数，原样传给网格生成器
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// 管状网格的经线数（平滑度）
    pub meridian: u32,
    /// 管状网格的半径
    pub radius: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            meridian: 100,
            radius: 0.01,
        }
    }
}

/// 编辑器阈值配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// 绘制时相邻采样点的最小间距
    pub segment_length: f64,
    /// 命中测试半径
    pub collision_radius: f64,
    /// 网格参数
    pub mesh: MeshConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            segment_length: 0.02,
            collision_radius: 0.05,
            mesh: MeshConfig::default(),
        }
    }
}

impl EditorConfig {
    /// 从JSON字符串解析，缺省字段取默认值
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从JSON文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// 校验阈值
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("segment_length", self.segment_length)?;
        positive("collision_radius", self.collision_radius)?;
        positive("mesh.radius", self.mesh.radius)?;

        if self.mesh.meridian < 3 {
            return Err(ConfigError::InvalidValue {
                field: "mesh.meridian",
                reason: format!("must be at least 3, got {}", self.mesh.meridian),
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be a positive finite number, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.segment_length, 0.02);
        assert_eq!(config.collision_radius, 0.05);
        assert_eq!(config.mesh.meridian, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "collision_radius": 0.1, "mesh": { "radius": 0.02 } }"#;
        let config = EditorConfig::from_json_str(json).unwrap();

        assert_eq!(config.collision_radius, 0.1);
        assert_eq!(config.segment_length, 0.02);
        assert_eq!(config.mesh.radius, 0.02);
        assert_eq!(config.mesh.meridian, 100);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = EditorConfig::from_json_str(r#"{ "segment_length": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "segment_length", .. }));

        let err = EditorConfig::from_json_str(r#"{ "mesh": { "meridian": 2 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "mesh.meridian", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = EditorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
