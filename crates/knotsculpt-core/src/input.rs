//! 每帧输入
//!
//! 控制器轮询与按键边沿检测由宿主完成，引擎只消费已经判定好的边沿和电平。

use crate::math::{Point3, Rotation};
use crate::transform::Pose;
use serde::{Deserialize, Serialize};

/// 扳机状态：按下边沿、保持电平、松开边沿
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerState {
    pub pressed: bool,
    pub held: bool,
    pub released: bool,
}

impl TriggerState {
    /// 本帧刚按下（按下边沿同时也处于保持电平）
    pub const PRESS: Self = Self {
        pressed: true,
        held: true,
        released: false,
    };

    pub const HOLD: Self = Self {
        pressed: false,
        held: true,
        released: false,
    };

    pub const RELEASE: Self = Self {
        pressed: false,
        held: false,
        released: true,
    };

    pub const IDLE: Self = Self {
        pressed: false,
        held: false,
        released: false,
    };
}

/// 离散编辑命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCommand {
    Select,
    Close,
    Cut,
    Combine,
    Remove,
}

/// 一帧的全部输入
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    /// 手柄位姿
    pub hand: Pose,
    /// 绘制扳机
    pub draw: TriggerState,
    /// 抓取扳机
    pub grab: TriggerState,
    /// 本帧触发的命令，按顺序执行
    pub commands: Vec<EditCommand>,
}

impl InputFrame {
    /// 手柄位于给定位置、朝向不变的空闲帧
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            hand: Pose::translation(x, y, z),
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.hand.rotation = rotation;
        self
    }

    pub fn with_draw(mut self, draw: TriggerState) -> Self {
        self.draw = draw;
        self
    }

    pub fn with_grab(mut self, grab: TriggerState) -> Self {
        self.grab = grab;
        self
    }

    pub fn with_command(mut self, command: EditCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// 手柄位置
    pub fn hand_position(&self) -> Point3 {
        self.hand.origin()
    }
}
