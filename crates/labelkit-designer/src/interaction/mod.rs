//! Pointer gesture state machine: idle, move, resize-corner, rotate.
//!
//! The controller owns only gesture parameters captured at pointer-down.
//! Every pointer-move produces a [`GestureFrame`] describing the element's
//! new geometry; the caller applies it with a history-replacing dispatch and
//! commits once on pointer-up.

pub mod snapping;

use crate::geometry::{rotation_from_pointer, Corner, Point, Rect};
use crate::hit_test::HitTarget;
use crate::model::{ElementId, LabelTemplate};
use crate::viewport::Viewport;
use snapping::{snap_move, Guides};

/// Settings that shape gesture math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    pub snap_enabled: bool,
    /// Snap distance in screen pixels; converted through the zoom.
    pub snap_threshold_px: f64,
    /// Floor for width and height during a resize, in percent.
    pub min_size_pct: f64,
}

/// An active gesture and the parameters fixed at its start.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Drag the element; `grab` is pointer minus element origin, in percent.
    Move { id: ElementId, grab: Point },
    /// Drag a corner; `start` is the element box when the gesture began.
    Resize {
        id: ElementId,
        corner: Corner,
        start: Rect,
    },
    /// Spin the element around `center` (percent), fixed for the gesture.
    Rotate { id: ElementId, center: Point },
}

impl Gesture {
    pub fn element_id(&self) -> &ElementId {
        match self {
            Self::Move { id, .. } | Self::Resize { id, .. } | Self::Rotate { id, .. } => id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Resize { .. } => "resize",
            Self::Rotate { .. } => "rotate",
        }
    }
}

/// Geometry proposed by one pointer-move.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureFrame {
    pub id: ElementId,
    pub rect: Rect,
    pub rotation: f64,
    pub guides: Guides,
}

impl GestureFrame {
    /// Write this frame's geometry into a template. Unknown ids are ignored.
    pub fn apply_to(&self, template: &mut LabelTemplate) {
        if let Some(element) = template.element_mut(&self.id) {
            element.set_rect(self.rect);
            element.rotation = self.rotation;
        }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    active: Option<Gesture>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    /// Start a gesture for a hit target. Returns the started gesture, or
    /// `None` for the canvas background or an unknown element.
    pub fn begin(
        &mut self,
        target: &HitTarget,
        template: &LabelTemplate,
        pointer_px: Point,
        viewport: &Viewport,
    ) -> Option<&Gesture> {
        let element = template.element(target.element_id()?)?;
        let pointer = viewport.pixel_to_percent(pointer_px);
        let id = element.id.clone();

        let gesture = match target {
            HitTarget::Body(_) => Gesture::Move {
                id,
                grab: Point::new(pointer.x - element.x, pointer.y - element.y),
            },
            HitTarget::ResizeHandle(_, corner) => Gesture::Resize {
                id,
                corner: *corner,
                start: element.rect(),
            },
            HitTarget::RotateHandle(_) => Gesture::Rotate {
                id,
                center: element.rect().center(),
            },
            HitTarget::Canvas => return None,
        };

        tracing::debug!(gesture = gesture.name(), element = %gesture.element_id(), "gesture start");
        self.active = Some(gesture);
        self.active.as_ref()
    }

    /// Compute the frame for a pointer position. Idle controllers and
    /// vanished elements produce no frame.
    pub fn update(
        &self,
        template: &LabelTemplate,
        pointer_px: Point,
        viewport: &Viewport,
        settings: &GestureSettings,
    ) -> Option<GestureFrame> {
        let gesture = self.active.as_ref()?;
        let element = template.element(gesture.element_id())?;
        let pointer = viewport.pixel_to_percent(pointer_px);

        let mut frame = GestureFrame {
            id: element.id.clone(),
            rect: element.rect(),
            rotation: element.rotation,
            guides: Guides::new(),
        };

        match gesture {
            Gesture::Move { grab, .. } => {
                let candidate = Rect::new(
                    pointer.x - grab.x,
                    pointer.y - grab.y,
                    element.width,
                    element.height,
                );
                frame.rect = candidate;
                if settings.snap_enabled {
                    let siblings: Vec<Rect> = template
                        .elements()
                        .iter()
                        .filter(|e| e.id != element.id)
                        .map(|e| e.rect())
                        .collect();
                    let (tx, ty) = viewport.pixels_as_percent(settings.snap_threshold_px);
                    let snapped = snap_move(candidate, &siblings, tx, ty);
                    frame.rect.x = snapped.x;
                    frame.rect.y = snapped.y;
                    frame.guides = snapped.guides;
                }
            }
            Gesture::Resize { corner, start, .. } => {
                frame.rect = resize_rect(*start, *corner, pointer, settings.min_size_pct);
            }
            Gesture::Rotate { center, .. } => {
                let center_px = viewport.percent_to_pixel(*center);
                frame.rotation = rotation_from_pointer(center_px, pointer_px);
            }
        }

        Some(frame)
    }

    /// Leave the active gesture and return it.
    pub fn end(&mut self) -> Option<Gesture> {
        let gesture = self.active.take();
        if let Some(g) = &gesture {
            tracing::debug!(gesture = g.name(), element = %g.element_id(), "gesture end");
        }
        gesture
    }
}

/// New box when dragging `corner` of `start` to `pointer`.
///
/// The opposite corner stays fixed. Width and height never drop below
/// `min_size`; a corner dragged past its opposite edge stops there.
pub fn resize_rect(start: Rect, corner: Corner, pointer: Point, min_size: f64) -> Rect {
    let min_size = min_size.max(0.0);

    let (x, width) = if corner.moves_left() {
        let right = start.right();
        let width = (right - pointer.x).max(min_size);
        (right - width, width)
    } else {
        (start.x, (pointer.x - start.x).max(min_size))
    };

    let (y, height) = if corner.moves_top() {
        let bottom = start.bottom();
        let height = (bottom - pointer.y).max(min_size);
        (bottom - height, height)
    } else {
        (start.y, (pointer.y - start.y).max(min_size))
    };

    Rect::new(x, y, width, height)
}
