//! 曲线实体
//!
//! 一条曲线是有序的3D采样点序列，加上开闭标志和交互状态。

use crate::math::{BoundingBox3, Point3};
use crate::transform::Pose;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// 全局曲线ID生成器
static CURVE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 曲线唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurveId(pub u64);

impl CurveId {
    /// 分配新的曲线ID
    pub fn new() -> Self {
        Self(CURVE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for CurveId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CurveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 交互状态
///
/// 绘制与移动互斥。`Moving` 携带当前的刚体偏移：此时 `points` 存储在该位姿的
/// 局部坐标系中，松开扳机时再烘焙回世界坐标。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    Drawing,
    Moving(Pose),
}

/// 空间曲线
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    /// 唯一标识符
    pub id: CurveId,

    /// 有序采样点
    pub points: Vec<Point3>,

    /// 是否闭合（末点隐式连接首点）
    pub closed: bool,

    /// 是否被选中
    pub selected: bool,

    /// 交互状态
    pub state: InteractionState,
}

impl Curve {
    /// 由点序列创建静止的曲线
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self {
            id: CurveId::new(),
            points,
            closed,
            selected: false,
            state: InteractionState::Idle,
        }
    }

    /// 创建一条正在绘制的空曲线
    pub fn drawing() -> Self {
        Self {
            state: InteractionState::Drawing,
            ..Self::new(Vec::new(), false)
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point3> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point3> {
        self.points.last()
    }

    pub fn is_drawing(&self) -> bool {
        self.state == InteractionState::Drawing
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, InteractionState::Moving(_))
    }

    /// 当前生效的刚体偏移；静止或绘制时为 `None`
    pub fn active_pose(&self) -> Option<&Pose> {
        match &self.state {
            InteractionState::Moving(pose) => Some(pose),
            _ => None,
        }
    }

    /// 世界坐标下的采样点
    pub fn world_points(&self) -> Vec<Point3> {
        match self.active_pose() {
            Some(pose) => self.points.iter().map(|p| pose.to_world(p)).collect(),
            None => self.points.clone(),
        }
    }

    /// 世界坐标下的包围盒
    pub fn bounding_box(&self) -> BoundingBox3 {
        BoundingBox3::from_points(&self.world_points())
    }

    /// 折线总长度（闭合曲线包含首尾连接段）
    pub fn length(&self) -> f64 {
        let open: f64 = self
            .points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum();

        match (self.closed, self.first(), self.last()) {
            (true, Some(first), Some(last)) => open + nalgebra::distance(last, first),
            _ => open,
        }
    }

    /// 使用指定的选中状态
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}
