//! 网格生成接口
//!
//! 管状网格的细分由宿主实现，引擎只在曲线的点或拓扑发生变化时发出请求。

use crate::config::MeshConfig;
use crate::curve::{Curve, CurveId};
use crate::math::Point3;

/// 重新生成网格的请求
#[derive(Debug, Clone, Copy)]
pub struct MeshRequest<'a> {
    pub curve_id: CurveId,
    /// 曲线存储的点；移动期间位于手柄局部坐标系
    pub points: &'a [Point3],
    /// 经线数（平滑度）
    pub meridian: u32,
    /// 管半径
    pub radius: f64,
    pub closed: bool,
}

impl<'a> MeshRequest<'a> {
    pub fn for_curve(curve: &'a Curve, mesh: &MeshConfig) -> Self {
        Self {
            curve_id: curve.id,
            points: &curve.points,
            meridian: mesh.meridian,
            radius: mesh.radius,
            closed: curve.closed,
        }
    }
}

/// 网格生成器
pub trait MeshGenerator {
    /// 根据曲线当前的点序列重新生成网格
    fn regenerate(&mut self, request: MeshRequest<'_>);

    /// 曲线已从集合中移除，可释放对应网格
    fn discard(&mut self, _curve_id: CurveId) {}
}

/// 不生成任何网格
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMesh;

impl MeshGenerator for NoMesh {
    fn regenerate(&mut self, _request: MeshRequest<'_>) {}
}
