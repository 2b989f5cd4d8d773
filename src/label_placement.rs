// src/label_placement.rs

//! Places a text label relative to a rectangle using compass names
//! ("upper left", "center right", ...).
//!
//! Coordinates are y-up: `top` is the larger y value. The text alignment is
//! chosen so the label grows away from the box in the named direction, which
//! keeps it just outside the bar for every position except "center".

use std::fmt;
use std::str::FromStr;

use crate::error::TimelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPosition {
    Upper,
    Center,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
}

/// One of the nine compass positions around a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLocation {
    pub vertical: VerticalPosition,
    pub horizontal: HorizontalPosition,
}

impl LabelLocation {
    pub const CENTER: LabelLocation = LabelLocation::new(VerticalPosition::Center, HorizontalPosition::Center);
    pub const UPPER_CENTER: LabelLocation = LabelLocation::new(VerticalPosition::Upper, HorizontalPosition::Center);
    pub const CENTER_RIGHT: LabelLocation = LabelLocation::new(VerticalPosition::Center, HorizontalPosition::Right);

    pub const fn new(vertical: VerticalPosition, horizontal: HorizontalPosition) -> Self {
        Self { vertical, horizontal }
    }

    pub fn name(&self) -> &'static str {
        use HorizontalPosition as H;
        use VerticalPosition as V;
        match (self.vertical, self.horizontal) {
            (V::Upper, H::Left) => "upper left",
            (V::Upper, H::Center) => "upper center",
            (V::Upper, H::Right) => "upper right",
            (V::Center, H::Left) => "center left",
            (V::Center, H::Center) => "center",
            (V::Center, H::Right) => "center right",
            (V::Lower, H::Left) => "lower left",
            (V::Lower, H::Center) => "lower center",
            (V::Lower, H::Right) => "lower right",
        }
    }
}

impl FromStr for LabelLocation {
    type Err = TimelineError;

    /// Accepts the nine compass names plus "right" as an alias of "center right".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use HorizontalPosition as H;
        use VerticalPosition as V;
        let (vertical, horizontal) = match s.trim() {
            "upper left" => (V::Upper, H::Left),
            "upper center" => (V::Upper, H::Center),
            "upper right" => (V::Upper, H::Right),
            "center left" => (V::Center, H::Left),
            "center" => (V::Center, H::Center),
            "center right" | "right" => (V::Center, H::Right),
            "lower left" => (V::Lower, H::Left),
            "lower center" => (V::Lower, H::Center),
            "lower right" => (V::Lower, H::Right),
            other => return Err(TimelineError::InvalidLabelLocation(other.to_string())),
        };
        Ok(Self::new(vertical, horizontal))
    }
}

impl fmt::Display for LabelLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis-aligned rectangle in y-up coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl BoundingBox {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            bottom: bottom.min(top),
            top: bottom.max(top),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.left + self.right) / 2.0, (self.bottom + self.top) / 2.0)
    }
}

/// Which side of the text sits on the anchor, vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Which side of the text sits on the anchor, horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub anchor: (f64, f64),
    pub vertical_align: VerticalAlign,
    pub horizontal_align: HorizontalAlign,
}

/// Anchor point and text alignment for a label at `location` around `bbox`.
pub fn place_label(bbox: &BoundingBox, location: LabelLocation) -> LabelPlacement {
    let (cx, cy) = bbox.center();

    let (x, horizontal_align) = match location.horizontal {
        HorizontalPosition::Left => (bbox.left, HorizontalAlign::Right),
        HorizontalPosition::Center => (cx, HorizontalAlign::Center),
        HorizontalPosition::Right => (bbox.right, HorizontalAlign::Left),
    };
    let (y, vertical_align) = match location.vertical {
        VerticalPosition::Upper => (bbox.top, VerticalAlign::Bottom),
        VerticalPosition::Center => (cy, VerticalAlign::Center),
        VerticalPosition::Lower => (bbox.bottom, VerticalAlign::Top),
    };

    LabelPlacement {
        anchor: (x, y),
        vertical_align,
        horizontal_align,
    }
}

/// Parses `name` and places the label in one step.
pub fn place_label_named(bbox: &BoundingBox, name: &str) -> Result<LabelPlacement, TimelineError> {
    Ok(place_label(bbox, name.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(0.0, 4.0, 0.0, 2.0)
    }

    #[test]
    fn test_center_is_centroid() {
        let p = place_label(&unit_box(), LabelLocation::CENTER);
        assert_eq!(p.anchor, (2.0, 1.0));
        assert_eq!(p.vertical_align, VerticalAlign::Center);
        assert_eq!(p.horizontal_align, HorizontalAlign::Center);
    }

    #[test]
    fn test_corners() {
        let b = unit_box();
        assert_eq!(place_label_named(&b, "upper left").unwrap().anchor, (0.0, 2.0));
        assert_eq!(place_label_named(&b, "upper right").unwrap().anchor, (4.0, 2.0));
        assert_eq!(place_label_named(&b, "lower left").unwrap().anchor, (0.0, 0.0));
        assert_eq!(place_label_named(&b, "lower right").unwrap().anchor, (4.0, 0.0));
    }

    #[test]
    fn test_edge_midpoints_and_alignment() {
        let b = unit_box();

        let upper = place_label_named(&b, "upper center").unwrap();
        assert_eq!(upper.anchor, (2.0, 2.0));
        assert_eq!(upper.vertical_align, VerticalAlign::Bottom);
        assert_eq!(upper.horizontal_align, HorizontalAlign::Center);

        let lower = place_label_named(&b, "lower center").unwrap();
        assert_eq!(lower.anchor, (2.0, 0.0));
        assert_eq!(lower.vertical_align, VerticalAlign::Top);

        let left = place_label_named(&b, "center left").unwrap();
        assert_eq!(left.anchor, (0.0, 1.0));
        assert_eq!(left.horizontal_align, HorizontalAlign::Right);

        let right = place_label_named(&b, "center right").unwrap();
        assert_eq!(right.anchor, (4.0, 1.0));
        assert_eq!(right.horizontal_align, HorizontalAlign::Left);
        assert_eq!(right.vertical_align, VerticalAlign::Center);
    }

    #[test]
    fn test_right_alias() {
        let b = unit_box();
        assert_eq!(
            place_label_named(&b, "right").unwrap(),
            place_label_named(&b, "center right").unwrap()
        );
    }

    #[test]
    fn test_invalid_name() {
        let err = place_label_named(&unit_box(), "top left").unwrap_err();
        assert!(matches!(err, TimelineError::InvalidLabelLocation(ref n) if n == "top left"));
    }

    #[test]
    fn test_names_round_trip() {
        for name in [
            "upper left", "upper center", "upper right",
            "center left", "center", "center right",
            "lower left", "lower center", "lower right",
        ] {
            let loc: LabelLocation = name.parse().unwrap();
            assert_eq!(loc.name(), name);
        }
    }
}
