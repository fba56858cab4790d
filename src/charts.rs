// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Chart-ready geometry computed from aggregate outputs. The server (or a
//! client embedding the library) generates these; the frontend just renders
//! them.

use crate::stats::{GoalProgress, PieDatum, share};
use serde::Serialize;

pub const PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#9c755f",
];

/// Stroke-dasharray parameters for an SVG progress ring.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub dash_filled: f64,
    pub dash_gap: f64,
}

pub fn ring(progress: &GoalProgress, radius: f64) -> RingGeometry {
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let fraction = if progress.ratio.is_finite() {
        progress.ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let dash_filled = circumference * fraction;
    RingGeometry {
        radius,
        circumference,
        dash_filled,
        dash_gap: circumference - dash_filled,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

/// Cumulative arc segments over 0-360 degrees, one per group, in the
/// group order handed in. Negative values render as empty slices.
pub fn pie(data: &[PieDatum]) -> Vec<PieSlice> {
    let total: i64 = data.iter().map(|d| d.value.max(0)).sum();
    let mut angle = 0.0f64;
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let s = share(d.value, total);
            let sweep = s * 360.0;
            let slice = PieSlice {
                label: d.label.clone(),
                value: d.value,
                share: s,
                start_angle: angle,
                end_angle: angle + sweep,
                color: PALETTE[i % PALETTE.len()],
            };
            angle += sweep;
            slice
        })
        .collect()
}
