//! 最近点查询
//!
//! 所有命中测试（移动、选择、剪切）都依赖对曲线采样点的线性扫描。

use crate::error::CurveError;
use crate::math::Point3;

/// 最近点查询结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// 最近采样点的索引
    pub index: usize,
    /// 到该采样点的欧氏距离
    pub distance: f64,
}

/// 在点序列中查找距目标最近的采样点
///
/// 距离相同时返回序列中最先出现的点。空序列返回 [`CurveError::InvalidInput`]。
pub fn nearest(points: &[Point3], target: &Point3) -> Result<NearestPoint, CurveError> {
    let (first, rest) = points
        .split_first()
        .ok_or(CurveError::InvalidInput("nearest-point query on an empty point sequence"))?;

    let mut best = NearestPoint {
        index: 0,
        distance: nalgebra::distance(first, target),
    };

    for (i, p) in rest.iter().enumerate() {
        let d = nalgebra::distance(p, target);
        if d < best.distance {
            best = NearestPoint {
                index: i + 1,
                distance: d,
            };
        }
    }

    Ok(best)
}
