//! Pointer hit testing against elements and the selection's handles.
//!
//! All tests run in screen pixel space so that handle sizes stay constant
//! under zoom and rotation matches what the renderer draws (rotation about
//! the element's center in pixel space).

use crate::geometry::{rotate_point, Corner, Point};
use crate::model::{ElementId, LabelTemplate, LayoutElement};
use crate::viewport::Viewport;
use labelkit_core::constants::{HANDLE_RADIUS_PX, ROTATION_HANDLE_OFFSET_PX};

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The rotation handle of the selected element
    RotateHandle(ElementId),
    /// A corner resize handle of the selected element
    ResizeHandle(ElementId, Corner),
    /// An element's body
    Body(ElementId),
    /// Empty canvas
    Canvas,
}

impl HitTarget {
    pub fn element_id(&self) -> Option<&ElementId> {
        match self {
            Self::RotateHandle(id) | Self::ResizeHandle(id, _) | Self::Body(id) => Some(id),
            Self::Canvas => None,
        }
    }
}

/// Element box in screen pixels plus its rotation.
#[derive(Debug, Clone, Copy)]
pub struct ScreenBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl ScreenBox {
    pub fn of(element: &LayoutElement, viewport: &Viewport) -> Self {
        let origin = viewport.percent_to_pixel(Point::new(element.x, element.y));
        let size = viewport.percent_to_pixel(Point::new(element.width, element.height));
        Self {
            left: origin.x,
            top: origin.y,
            width: size.x,
            height: size.y,
            rotation: element.rotation,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Screen position of a corner, rotation applied.
    pub fn corner(&self, corner: Corner) -> Point {
        let x = if corner.moves_left() {
            self.left
        } else {
            self.left + self.width
        };
        let y = if corner.moves_top() {
            self.top
        } else {
            self.top + self.height
        };
        rotate_point(Point::new(x, y), self.center(), self.rotation)
    }

    /// Screen position of the rotation handle, rotation applied.
    pub fn rotation_handle(&self) -> Point {
        let rest = Point::new(
            self.left + self.width / 2.0,
            self.top - ROTATION_HANDLE_OFFSET_PX,
        );
        rotate_point(rest, self.center(), self.rotation)
    }

    /// Whether `p` lies inside the (rotated) box.
    pub fn contains(&self, p: Point) -> bool {
        let local = rotate_point(p, self.center(), -self.rotation);
        let (x0, x1) = ordered(self.left, self.left + self.width);
        let (y0, y1) = ordered(self.top, self.top + self.height);
        local.x >= x0 && local.x <= x1 && local.y >= y0 && local.y <= y1
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Resolve a pointer position to a target.
///
/// The selected element's handles are tested first (rotation handle, then
/// corners), then element bodies from the top of the paint order down.
pub fn hit_test(
    template: &LabelTemplate,
    selected: Option<&ElementId>,
    pointer_px: Point,
    viewport: &Viewport,
) -> HitTarget {
    if let Some(element) = selected.and_then(|id| template.element(id)) {
        let bx = ScreenBox::of(element, viewport);
        if bx.rotation_handle().distance_to(&pointer_px) <= HANDLE_RADIUS_PX {
            return HitTarget::RotateHandle(element.id.clone());
        }
        for corner in Corner::ALL {
            if bx.corner(corner).distance_to(&pointer_px) <= HANDLE_RADIUS_PX {
                return HitTarget::ResizeHandle(element.id.clone(), corner);
            }
        }
    }

    template
        .elements_top_down()
        .find(|e| ScreenBox::of(e, viewport).contains(pointer_px))
        .map_or(HitTarget::Canvas, |e| HitTarget::Body(e.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    fn setup() -> (LabelTemplate, ElementId, ElementId, Viewport) {
        let mut t = LabelTemplate::default();
        let bottom = t.add_element(ElementKind::Logo);
        let top = t.add_element(ElementKind::Logo);
        t.update_element(&bottom, |e| {
            *e = e.clone().at(10.0, 10.0, 50.0, 50.0);
        });
        t.update_element(&top, |e| {
            *e = e.clone().at(30.0, 30.0, 20.0, 20.0);
        });
        (t, bottom, top, Viewport::new(100.0, 50.0))
    }

    #[test]
    fn test_topmost_body_wins() {
        let (t, bottom, top, vp) = setup();
        // 400x200 px canvas; (35%, 35%) = (140, 70)
        assert_eq!(hit_test(&t, None, Point::new(140.0, 70.0), &vp), HitTarget::Body(top));
        // (15%, 15%) only inside the bottom element
        assert_eq!(hit_test(&t, None, Point::new(60.0, 30.0), &vp), HitTarget::Body(bottom));
        assert_eq!(hit_test(&t, None, Point::new(390.0, 190.0), &vp), HitTarget::Canvas);
    }

    #[test]
    fn test_selected_handles_before_bodies() {
        let (t, bottom, _top, vp) = setup();
        // bottom element box: (40, 20) to (240, 120); its BR corner lies under nothing else
        let hit = hit_test(&t, Some(&bottom), Point::new(241.0, 121.0), &vp);
        assert_eq!(hit, HitTarget::ResizeHandle(bottom.clone(), Corner::BottomRight));

        // rotation handle sits 20px above top-center (140, 20)
        let hit = hit_test(&t, Some(&bottom), Point::new(140.0, 0.0), &vp);
        assert_eq!(hit, HitTarget::RotateHandle(bottom));
    }

    #[test]
    fn test_rotation_is_respected() {
        let mut t = LabelTemplate::default();
        let id = t.add_element(ElementKind::Line);
        t.update_element(&id, |e| {
            *e = e.clone().at(40.0, 45.0, 20.0, 10.0);
            e.rotation = 90.0;
        });
        let vp = Viewport::new(100.0, 50.0);
        // unrotated box is 80x20 px around (200, 100); rotated it is 20x80
        assert_eq!(hit_test(&t, None, Point::new(200.0, 135.0), &vp), HitTarget::Body(id));
        assert_eq!(hit_test(&t, None, Point::new(235.0, 100.0), &vp), HitTarget::Canvas);
    }
}
