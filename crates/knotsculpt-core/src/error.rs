//! 错误定义

use thiserror::Error;

/// 曲线查询与拓扑操作错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    #[error("Combine requires exactly two selected curves, found {selected}")]
    AssumptionViolated { selected: usize },
}

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
