//! 内置演示会话
//!
//! 画一个圆环并闭合，在对侧剪开，再从剪开后的末端向外画一笔并与之拼接，
//! 最后把结果整体抓起上移。

use knotsculpt_core::prelude::*;
use std::f64::consts::PI;

const CENTER: [f64; 3] = [0.0, 1.2, -0.3];
const RADIUS: f64 = 0.1;
const LOOP_SAMPLES: usize = 20;

fn on_loop(radius: f64, angle: f64) -> Point3 {
    Point3::new(
        CENTER[0] + radius * angle.cos(),
        CENTER[1] + radius * angle.sin(),
        CENTER[2],
    )
}

fn hand(p: &Point3) -> InputFrame {
    InputFrame::at(p.x, p.y, p.z)
}

/// 一次完整的绘制手势
fn stroke(points: &[Point3]) -> Vec<InputFrame> {
    let mut frames = Vec::with_capacity(points.len() + 1);
    for (i, p) in points.iter().enumerate() {
        let trigger = if i == 0 {
            TriggerState::PRESS
        } else {
            TriggerState::HOLD
        };
        frames.push(hand(p).with_draw(trigger));
    }
    if let Some(last) = points.last() {
        frames.push(hand(last).with_draw(TriggerState::RELEASE));
    }
    frames
}

/// 生成演示用的输入帧序列
pub fn session() -> Vec<InputFrame> {
    let step = 2.0 * PI / LOOP_SAMPLES as f64;
    let ring: Vec<Point3> = (0..LOOP_SAMPLES)
        .map(|i| on_loop(RADIUS, i as f64 * step))
        .collect();

    let mut frames = stroke(&ring);

    // 闭合圆环，然后在对侧剪开
    frames.push(
        hand(&ring[0])
            .with_command(EditCommand::Select)
            .with_command(EditCommand::Close),
    );
    frames.push(hand(&ring[LOOP_SAMPLES / 2]).with_command(EditCommand::Cut));

    // 剪开后曲线的末点是 ring[9]，从它附近沿径向向外画一笔
    let tail_angle = (LOOP_SAMPLES / 2 - 1) as f64 * step;
    let spoke: Vec<Point3> = (0..5)
        .map(|j| on_loop(RADIUS + 0.01 + 0.03 * j as f64, tail_angle))
        .collect();
    frames.extend(stroke(&spoke));

    frames.push(
        hand(&spoke[0])
            .with_command(EditCommand::Select)
            .with_command(EditCommand::Combine),
    );

    // 抓住外端整体上移并略微转动
    let grab_at = spoke[spoke.len() - 1];
    frames.push(hand(&grab_at).with_grab(TriggerState::PRESS));
    for k in 1..=5 {
        let lift = 0.1 * k as f64;
        let twist = Rotation::from_axis_angle(&Vector3::y_axis(), 0.05 * k as f64);
        frames.push(
            InputFrame::at(grab_at.x, grab_at.y + lift, grab_at.z)
                .with_rotation(twist)
                .with_grab(TriggerState::HOLD),
        );
    }
    let last = frames[frames.len() - 1].clone();
    frames.push(InputFrame {
        grab: TriggerState::RELEASE,
        ..last
    });

    frames
}
