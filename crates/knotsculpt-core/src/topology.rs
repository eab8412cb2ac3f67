//! 拓扑操作
//!
//! 剪切与拼接都不修改原曲线，而是构造全新的静止曲线。输入点均为世界坐标。

use crate::curve::Curve;
use crate::error::CurveError;
use crate::math::{within, Point3};

/// 在索引 `k` 处剪开闭合曲线
///
/// 结果是一条开放曲线：`points[k+1..]` 接 `points[..k]`，剪切点本身被丢弃。
pub fn split_knot(points: &[Point3], k: usize) -> Result<Curve, CurveError> {
    if points.len() < 2 {
        return Err(CurveError::PreconditionNotMet(format!(
            "closed curve with {} point(s) cannot be opened",
            points.len()
        )));
    }
    if k >= points.len() {
        return Err(CurveError::PreconditionNotMet(format!(
            "split index {k} out of range for {} points",
            points.len()
        )));
    }

    let rotated = points[k + 1..].iter().chain(&points[..k]).copied().collect();
    Ok(Curve::new(rotated, false))
}

/// 在索引 `k` 处把开放曲线剪成两段，剪切点本身被丢弃
///
/// 两侧各需保留至少两个点，即 `2 <= k <= len - 3`。
pub fn split_open(points: &[Point3], k: usize) -> Result<(Curve, Curve), CurveError> {
    if k < 2 || k + 3 > points.len() {
        return Err(CurveError::PreconditionNotMet(format!(
            "split index {k} leaves fewer than two points on one side of {} points",
            points.len()
        )));
    }

    Ok((
        Curve::new(points[..k].to_vec(), false),
        Curve::new(points[k + 1..].to_vec(), false),
    ))
}

/// 调整两条点序列的方向，使 `a` 的末点能与 `b` 的首点相接
fn orient(a: &mut [Point3], b: &mut [Point3], radius: f64) {
    let (Some(&a_first), Some(&a_last)) = (a.first(), a.last()) else {
        return;
    };
    let (Some(&b_first), Some(&b_last)) = (b.first(), b.last()) else {
        return;
    };

    if within(&a_last, &b_last, radius) {
        b.reverse();
    } else if within(&a_first, &b_first, radius) {
        a.reverse();
    } else if within(&a_first, &b_last, radius) {
        a.reverse();
        b.reverse();
    }
}

/// 把两条曲线首尾拼接成一条
///
/// 端点无法在 `radius` 内相接时返回 `None`。若拼接后的首尾也在 `radius` 内，
/// 结果为闭合曲线。
pub fn join(a: &[Point3], b: &[Point3], radius: f64) -> Option<Curve> {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    orient(&mut a, &mut b, radius);

    if !within(a.last()?, b.first()?, radius) {
        return None;
    }

    let closed = within(a.first()?, b.last()?, radius);
    a.extend(b);
    Some(Curve::new(a, closed))
}
