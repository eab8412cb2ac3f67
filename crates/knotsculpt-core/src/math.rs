//! 数学基础类型
//!
//! 基于 nalgebra 提供的点、向量和旋转类型的别名。

use nalgebra as na;
use serde::{Deserialize, Serialize};

/// 3D点类型
pub type Point3 = na::Point3<f64>;

/// 3D向量类型
pub type Vector3 = na::Vector3<f64>;

/// 3D旋转（单位四元数）
pub type Rotation = na::UnitQuaternion<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 判断两点距离是否严格小于给定半径
#[inline]
pub fn within(a: &Point3, b: &Point3, radius: f64) -> bool {
    na::distance(a, b) < radius
}

/// 3D包围盒
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox3 {
    pub min: Point3,
    pub max: Point3,
}

impl BoundingBox3 {
    /// 创建空的包围盒（无效状态）
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// 从点集创建包围盒
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.expand_to_include(p);
        }
        bbox
    }

    /// 是否为空（未包含任何点）
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// 扩展包围盒以包含指定点
    pub fn expand_to_include(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// 获取中心点
    pub fn center(&self) -> Point3 {
        na::center(&self.min, &self.max)
    }
}
