//! 刚体变换
//!
//! 手柄位姿与曲线移动期间的局部坐标系都用 [`Pose`] 表示：先旋转、后平移。

use crate::math::{Point3, Rotation, Vector3};
use serde::{Deserialize, Serialize};

/// 刚体位姿（平移 + 旋转）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// 坐标系原点（世界坐标）
    pub position: Vector3,
    /// 坐标系朝向
    pub rotation: Rotation,
}

impl Pose {
    /// 创建单位位姿
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Rotation::identity(),
        }
    }

    pub fn new(position: Vector3, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    /// 仅平移的位姿
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new(Vector3::new(x, y, z), Rotation::identity())
    }

    /// 原点所在的点
    pub fn origin(&self) -> Point3 {
        Point3::from(self.position)
    }

    /// 把世界坐标点表达到本坐标系中：先减去原点，再施加逆旋转
    pub fn to_local(&self, point: &Point3) -> Point3 {
        self.rotation.inverse_transform_point(&(*point - self.position))
    }

    /// 把本坐标系中的点还原为世界坐标：先旋转，再加上原点
    pub fn to_world(&self, point: &Point3) -> Point3 {
        self.rotation.transform_point(point) + self.position
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
