//! 曲线编辑引擎
//!
//! [`CurveEditor`] 独占曲线集合，每帧根据输入执行绘制、移动、选择、闭合、
//! 剪切、拼接与删除。会替换曲线的操作先把删除与新增记录到 `PendingEdits`，
//! 整轮扫描结束后再统一应用，保证同一轮内的命中测试看到的是稳定的集合。

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::curve::{Curve, CurveId, InteractionState};
use crate::error::CurveError;
use crate::input::{EditCommand, InputFrame, TriggerState};
use crate::math::Point3;
use crate::mesh::{MeshGenerator, MeshRequest, NoMesh};
use crate::nearest::{nearest, NearestPoint};
use crate::topology;
use crate::transform::Pose;

/// 一轮扫描中累积的集合修改
#[derive(Debug, Default)]
struct PendingEdits {
    remove: HashSet<CurveId>,
    add: Vec<Curve>,
}

impl PendingEdits {
    /// 用新曲线替换原曲线
    fn replace(&mut self, original: CurveId, with: impl IntoIterator<Item = Curve>) {
        self.remove.insert(original);
        self.add.extend(with);
    }

    fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_empty()
    }

    /// 被替换的原曲线数量
    fn replaced(&self) -> usize {
        self.remove.len()
    }
}

/// 曲线编辑引擎
pub struct CurveEditor<M: MeshGenerator = NoMesh> {
    config: EditorConfig,
    curves: Vec<Curve>,
    mesher: M,
}

impl CurveEditor<NoMesh> {
    /// 创建不生成网格的编辑器
    pub fn headless(config: EditorConfig) -> Self {
        Self::new(config, NoMesh)
    }
}

impl<M: MeshGenerator> CurveEditor<M> {
    pub fn new(config: EditorConfig, mesher: M) -> Self {
        Self {
            config,
            curves: Vec::new(),
            mesher,
        }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curve(&self, id: CurveId) -> Option<&Curve> {
        self.curves.iter().find(|c| c.id == id)
    }

    pub fn mesher(&self) -> &M {
        &self.mesher
    }

    /// 当前被选中的曲线ID（按集合顺序）
    pub fn selected_ids(&self) -> Vec<CurveId> {
        self.curves.iter().filter(|c| c.selected).map(|c| c.id).collect()
    }

    /// 直接加入一条已有曲线；集合中的曲线至少有一个点
    pub fn insert(&mut self, curve: Curve) -> Result<CurveId, CurveError> {
        if curve.is_empty() {
            return Err(CurveError::InvalidInput("curve has no points"));
        }

        let id = curve.id;
        self.mesher.regenerate(MeshRequest::for_curve(&curve, &self.config.mesh));
        self.curves.push(curve);
        Ok(id)
    }

    /// 处理一帧输入：先绘制、再移动，然后按顺序执行命令
    pub fn process_frame(&mut self, frame: &InputFrame) {
        let hand = frame.hand_position();

        self.draw(frame.draw, &hand);
        self.move_curves(frame.grab, &frame.hand);

        for command in &frame.commands {
            match command {
                EditCommand::Select => {
                    self.select(&hand);
                }
                EditCommand::Close => {
                    self.close();
                }
                EditCommand::Cut => {
                    self.cut(&hand);
                }
                EditCommand::Combine => {
                    if let Err(e) = self.combine() {
                        warn!("Combine skipped: {}", e);
                    }
                }
                EditCommand::Remove => {
                    self.remove();
                }
            }
        }
    }

    /// 绘制
    pub fn draw(&mut self, trigger: TriggerState, hand: &Point3) {
        if trigger.pressed {
            let curve = Curve::drawing();
            debug!("Started drawing curve {}", curve.id);
            self.curves.push(curve);
        }

        if trigger.held {
            let segment = self.config.segment_length;
            for curve in self.curves.iter_mut().filter(|c| c.is_drawing()) {
                let Some(last) = curve.last().copied() else {
                    curve.points.push(*hand);
                    continue;
                };
                if nalgebra::distance(hand, &last) >= segment {
                    curve.points.push(*hand);
                    debug!("Curve {} accepted point {}", curve.id, curve.len());
                    self.mesher.regenerate(MeshRequest::for_curve(curve, &self.config.mesh));
                }
            }
        } else if trigger.released {
            for curve in self.curves.iter_mut().filter(|c| c.is_drawing()) {
                curve.state = InteractionState::Idle;
                info!("Finished curve {} with {} points", curve.id, curve.len());
            }
            // 同一帧内按下又松开，曲线没有任何采样点
            self.curves.retain(|c| !c.is_empty());
        }
    }

    /// 抓取移动
    ///
    /// 抓取时把点重新表达到手柄坐标系，拖动期间只更新位姿，松开时烘焙回世界坐标。
    pub fn move_curves(&mut self, trigger: TriggerState, hand: &Pose) {
        if trigger.pressed {
            let radius = self.config.collision_radius;
            for curve in self.curves.iter_mut() {
                if curve.state != InteractionState::Idle {
                    continue;
                }
                let Some(hit) = hit_test(curve, &hand.origin()) else {
                    continue;
                };
                if hit.distance < radius {
                    for p in curve.points.iter_mut() {
                        *p = hand.to_local(p);
                    }
                    curve.state = InteractionState::Moving(*hand);
                    info!("Grabbed curve {}", curve.id);
                    self.mesher.regenerate(MeshRequest::for_curve(curve, &self.config.mesh));
                }
            }
        }

        if trigger.held {
            for curve in self.curves.iter_mut().filter(|c| c.is_moving()) {
                curve.state = InteractionState::Moving(*hand);
            }
        } else if trigger.released {
            for curve in self.curves.iter_mut() {
                let InteractionState::Moving(pose) = curve.state else {
                    continue;
                };
                for p in curve.points.iter_mut() {
                    *p = pose.to_world(p);
                }
                curve.state = InteractionState::Idle;
                info!("Released curve {}", curve.id);
                self.mesher.regenerate(MeshRequest::for_curve(curve, &self.config.mesh));
            }
        }
    }

    /// 切换命中曲线的选中状态，返回被切换的曲线数
    pub fn select(&mut self, hand: &Point3) -> usize {
        let radius = self.config.collision_radius;
        let mut toggled = 0;

        for curve in self.curves.iter_mut() {
            if hit_test(curve, hand).is_some_and(|hit| hit.distance < radius) {
                curve.selected = !curve.selected;
                toggled += 1;
                debug!("Curve {} selected: {}", curve.id, curve.selected);
            }
        }

        toggled
    }

    /// 对首尾足够接近的选中曲线切换开闭，返回被切换的曲线数
    pub fn close(&mut self) -> usize {
        let radius = self.config.collision_radius;
        let mut toggled = 0;

        for curve in self.curves.iter_mut().filter(|c| c.selected) {
            let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
                continue;
            };
            if nalgebra::distance(first, last) < radius {
                curve.closed = !curve.closed;
                toggled += 1;
                info!("Curve {} closed: {}", curve.id, curve.closed);
                self.mesher.regenerate(MeshRequest::for_curve(curve, &self.config.mesh));
            }
        }

        toggled
    }

    /// 在手柄位置剪开命中的选中曲线，返回被剪开的曲线数
    ///
    /// 闭合曲线被剪成一条开放曲线；开放曲线被剪成两段，切点两侧不足两个点时跳过。
    pub fn cut(&mut self, hand: &Point3) -> usize {
        let radius = self.config.collision_radius;
        let mut edits = PendingEdits::default();

        for curve in self.curves.iter().filter(|c| c.selected) {
            let Some(hit) = hit_test(curve, hand) else {
                continue;
            };
            if hit.distance >= radius {
                continue;
            }

            let points = curve.world_points();
            let pieces = if curve.closed {
                topology::split_knot(&points, hit.index).map(|c| vec![c])
            } else {
                topology::split_open(&points, hit.index).map(|(a, b)| vec![a, b])
            };

            match pieces {
                Ok(pieces) => {
                    info!(
                        "Cut curve {} at point {} into {} piece(s)",
                        curve.id,
                        hit.index,
                        pieces.len()
                    );
                    edits.replace(curve.id, pieces);
                }
                Err(e) => debug!("Curve {} not cut: {}", curve.id, e),
            }
        }

        let cut = edits.replaced();
        self.apply(edits);
        cut
    }

    /// 拼接恰好两条选中曲线
    ///
    /// 选中数不为二时返回 [`CurveError::AssumptionViolated`] 且不做任何修改；
    /// 端点无法相接时返回 `Ok(None)`。
    pub fn combine(&mut self) -> Result<Option<CurveId>, CurveError> {
        let (a, b, joined) = {
            let selected: Vec<&Curve> = self.curves.iter().filter(|c| c.selected).collect();
            let [a, b] = selected.as_slice() else {
                return Err(CurveError::AssumptionViolated {
                    selected: selected.len(),
                });
            };

            let joined = topology::join(
                &a.world_points(),
                &b.world_points(),
                self.config.collision_radius,
            );
            (a.id, b.id, joined)
        };

        let Some(joined) = joined else {
            debug!("Curves {} and {} do not meet", a, b);
            return Ok(None);
        };

        let id = joined.id;
        info!(
            "Combined curves {} and {} into {} ({} points, closed: {})",
            a,
            b,
            id,
            joined.len(),
            joined.closed
        );

        let mut edits = PendingEdits::default();
        edits.replace(a, [joined]);
        edits.replace(b, []);
        self.apply(edits);

        Ok(Some(id))
    }

    /// 删除所有选中曲线，返回删除数量
    pub fn remove(&mut self) -> usize {
        let removed: Vec<CurveId> = self.selected_ids();
        self.curves.retain(|c| !c.selected);

        for id in &removed {
            self.mesher.discard(*id);
        }
        if !removed.is_empty() {
            info!("Removed {} curve(s)", removed.len());
        }

        removed.len()
    }

    /// 应用一轮扫描累积的修改：先删除，再按顺序追加
    fn apply(&mut self, edits: PendingEdits) {
        if edits.is_empty() {
            return;
        }

        let PendingEdits { remove, add } = edits;
        self.curves.retain(|c| !remove.contains(&c.id));
        for id in remove {
            self.mesher.discard(id);
        }

        for curve in add {
            self.mesher.regenerate(MeshRequest::for_curve(&curve, &self.config.mesh));
            self.curves.push(curve);
        }
    }
}

/// 曲线对世界坐标点的命中测试；空曲线不参与
///
/// 刚体变换保持距离，因此移动中的曲线把目标点变换到其局部坐标系再比较。
fn hit_test(curve: &Curve, target: &Point3) -> Option<NearestPoint> {
    let local = match curve.active_pose() {
        Some(pose) => pose.to_local(target),
        None => *target,
    };
    nearest(&curve.points, &local).ok()
}
