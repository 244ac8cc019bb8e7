//! Snap-to-guide computation for move gestures.
//!
//! The moving box has three vertical reference lines (left, center, right)
//! and three horizontal ones (top, middle, bottom). Each is compared with the
//! same lines of every sibling and with the canvas center lines. The closest
//! match inside the threshold wins per axis; the two axes snap independently.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Near-equal distances prefer the earlier reference line (left/top first),
/// which keeps an edge-to-edge snap exact instead of going through a center
/// computation.
const TIE_EPSILON: f64 = 1e-9;

/// Canvas center line, in percent.
const CANVAS_CENTER: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideOrientation {
    /// Constant x, spanning y
    Vertical,
    /// Constant y, spanning x
    Horizontal,
}

/// A transient alignment line shown while dragging, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub orientation: GuideOrientation,
    /// x for vertical guides, y for horizontal guides.
    pub position: f64,
    pub start: f64,
    pub end: f64,
}

pub type Guides = SmallVec<[Guide; 2]>;

/// Snap outcome for one move frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub guides: Guides,
}

/// What a reference line matched against.
#[derive(Debug, Clone, Copy)]
enum Target {
    Sibling(Rect),
    Canvas,
}

#[derive(Debug, Clone, Copy)]
struct AxisMatch {
    /// Snapped origin on this axis.
    origin: f64,
    line: f64,
    distance: f64,
    target: Target,
}

fn lines(start: f64, size: f64) -> [f64; 3] {
    [start, start + size / 2.0, start + size]
}

fn best_on_axis(
    origin: f64,
    size: f64,
    siblings: &[Rect],
    sibling_lines: impl Fn(&Rect) -> [f64; 3],
    threshold: f64,
) -> Option<AxisMatch> {
    let offsets = [0.0, size / 2.0, size];
    let refs = lines(origin, size);
    let mut best: Option<AxisMatch> = None;

    let mut consider = |line: f64, target: Target| {
        for (reference, offset) in refs.iter().zip(offsets) {
            let distance = (line - reference).abs();
            if distance > threshold {
                continue;
            }
            let better = best.is_none_or(|b| distance < b.distance - TIE_EPSILON);
            if better {
                best = Some(AxisMatch {
                    origin: line - offset,
                    line,
                    distance,
                    target,
                });
            }
        }
    };

    for sibling in siblings {
        for line in sibling_lines(sibling) {
            consider(line, Target::Sibling(*sibling));
        }
    }
    consider(CANVAS_CENTER, Target::Canvas);

    best
}

/// Snap a candidate box against siblings and the canvas center.
///
/// `threshold_x`/`threshold_y` are the snap distances in percent of canvas
/// width and height. With both thresholds at zero only exact alignments
/// produce guides.
pub fn snap_move(candidate: Rect, siblings: &[Rect], threshold_x: f64, threshold_y: f64) -> SnapResult {
    let mx = best_on_axis(
        candidate.x,
        candidate.width,
        siblings,
        |r| lines(r.x, r.width),
        threshold_x,
    );
    let my = best_on_axis(
        candidate.y,
        candidate.height,
        siblings,
        |r| lines(r.y, r.height),
        threshold_y,
    );

    let x = mx.map_or(candidate.x, |m| m.origin);
    let y = my.map_or(candidate.y, |m| m.origin);
    let snapped = Rect::new(x, y, candidate.width, candidate.height);

    let mut guides = Guides::new();
    if let Some(m) = mx {
        let (start, end) = match m.target {
            Target::Sibling(r) => (snapped.top().min(r.top()), snapped.bottom().max(r.bottom())),
            Target::Canvas => (0.0, 100.0),
        };
        guides.push(Guide {
            orientation: GuideOrientation::Vertical,
            position: m.line,
            start,
            end,
        });
    }
    if let Some(m) = my {
        let (start, end) = match m.target {
            Target::Sibling(r) => (snapped.left().min(r.left()), snapped.right().max(r.right())),
            Target::Canvas => (0.0, 100.0),
        };
        guides.push(Guide {
            orientation: GuideOrientation::Horizontal,
            position: m.line,
            start,
            end,
        });
    }

    SnapResult { x, y, guides }
}
