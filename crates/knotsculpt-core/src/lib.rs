//! Knotsculpt 核心编辑引擎
//!
//! 在三维空间中交互式地雕刻开放或闭合的曲线：逐点绘制、刚体移动、
//! 在某点剪开、把两条曲线拼接为一条。
//!
//! # 架构设计
//!
//! - `Curve`: 有序采样点序列 + 开闭标志 + 交互状态
//! - `nearest`: 命中测试所用的最近点查询
//! - `CurveEditor`: 独占曲线集合，逐帧消费输入并向网格生成器发出请求
//!
//! 控制器轮询、管状网格细分与渲染都由宿主负责。
//!
//! # 示例
//!
//! ```rust
//! use knotsculpt_core::prelude::*;
//!
//! let mut editor = CurveEditor::headless(EditorConfig::default());
//! editor.draw(TriggerState::PRESS, &Point3::new(0.0, 0.0, 0.0));
//! editor.draw(TriggerState::HOLD, &Point3::new(0.05, 0.0, 0.0));
//! editor.draw(TriggerState::RELEASE, &Point3::new(0.05, 0.0, 0.0));
//!
//! assert_eq!(editor.curves()[0].len(), 2);
//! ```

pub mod config;
pub mod curve;
pub mod editor;
pub mod error;
pub mod input;
pub mod math;
pub mod mesh;
pub mod nearest;
pub mod topology;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::config::{EditorConfig, MeshConfig};
    pub use crate::curve::{Curve, CurveId, InteractionState};
    pub use crate::editor::CurveEditor;
    pub use crate::error::{ConfigError, CurveError};
    pub use crate::input::{EditCommand, InputFrame, TriggerState};
    pub use crate::math::{Point3, Rotation, Vector3};
    pub use crate::mesh::{MeshGenerator, MeshRequest, NoMesh};
    pub use crate::nearest::{nearest, NearestPoint};
    pub use crate::transform::Pose;
}
