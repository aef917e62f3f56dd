//! Drawable primitive types returned to the host renderer
//!
//! All geometry is centered on the ring center at (0, 0) with y growing
//! downward (screen coordinates); the host translates to the widget center
//! before drawing. Text anchors are already compensated for an assumed
//! glyph width and baseline so the host can draw the text verbatim at the
//! anchor position.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::angle::{draw_angle_rad, wrap_degrees};

/// Inset in pixels between the viewport edge and the range circle.
pub const COMPASS_PADDING: f64 = 15.0;

/// Tick length for multiples of 10 degrees.
pub const TICK_LONG: f64 = 12.0;
/// Tick length for multiples of 5 degrees that are not multiples of 10.
pub const TICK_MEDIUM: f64 = 8.0;
/// Tick length for all other degrees.
pub const TICK_SHORT: f64 = 5.0;

/// Smallest accepted viewport diameter: 2 * (COMPASS_PADDING + TICK_LONG).
/// Below this the long ticks would cross the ring center.
pub const MIN_DIAMETER: u32 = 54;

/// Inner radius of the heading indicator line.
pub const HEADING_INNER_OFFSET: f64 = 20.0;
/// Inset from the circle to the cardinal label anchors.
pub const CARDINAL_LABEL_INSET: f64 = 25.0;
/// Inset from the circle to the heading value label anchor.
pub const HEADING_LABEL_INSET: f64 = 60.0;
/// Length of a traffic marker line outside the circle.
pub const TRAFFIC_MARK_LEN: f64 = 5.0;

/// Assumed glyph advance used to center label text on its anchor.
pub const CHAR_WIDTH: f64 = 8.0;
/// Baseline drop applied to label anchors.
pub const BASELINE_DROP: f64 = 6.0;

/// Orientation of the map display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// "Up" on the display is always true north
    NorthUp,
    /// "Up" on the display is the current heading; the display rotates
    /// as the aircraft turns
    TrackUp,
}

impl Orientation {
    pub fn is_north_up(&self) -> bool {
        matches!(self, Orientation::NorthUp)
    }

    /// Rotation in degrees applied to the centered ownship icon.
    ///
    /// In north-up mode the icon turns with the aircraft; in track-up mode
    /// it stays pointing up.
    pub fn ownship_rotation_deg(&self, heading: f64) -> f64 {
        match self {
            Orientation::NorthUp => heading,
            Orientation::TrackUp => 0.0,
        }
    }
}

/// A line along one bearing direction between two radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Endpoint on the outer radius
    pub outer: Point2<f64>,
    /// Endpoint on the inner radius
    pub inner: Point2<f64>,
}

impl LineSegment {
    /// Line along `bearing_deg` between radii `from` (inner) and `to`
    /// (outer), centered on the ring center.
    pub fn radial(bearing_deg: f64, from: f64, to: f64) -> Self {
        let rad = draw_angle_rad(wrap_degrees(bearing_deg));
        LineSegment {
            outer: Point2::new(to * rad.cos(), to * rad.sin()),
            inner: Point2::new(from * rad.cos(), from * rad.sin()),
        }
    }
}

/// Tick length class, decided by degree modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickWeight {
    Long,
    Medium,
    Short,
}

impl TickWeight {
    /// Multiples of 10 degrees are long, other multiples of 5 are medium,
    /// the rest are short.
    pub fn for_bearing(deg: u16) -> Self {
        if deg % 10 == 0 {
            TickWeight::Long
        } else if deg % 5 == 0 {
            TickWeight::Medium
        } else {
            TickWeight::Short
        }
    }

    /// Tick length in pixels.
    pub fn length(&self) -> f64 {
        match self {
            TickWeight::Long => TICK_LONG,
            TickWeight::Medium => TICK_MEDIUM,
            TickWeight::Short => TICK_SHORT,
        }
    }
}

/// One compass tick in the canonical north-up frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Bearing this tick marks, in whole degrees
    pub bearing: u16,
    pub weight: TickWeight,
    pub line: LineSegment,
}

impl TickMark {
    /// Interval label shown next to this tick, present on multiples of
    /// 30 degrees.
    pub fn label(&self) -> Option<String> {
        (self.bearing % 30 == 0).then(|| self.bearing.to_string())
    }
}

/// A text label anchored at a point.
///
/// The position is pre-shifted left by half the text width and down to the
/// assumed baseline, so the host draws the text at the anchor as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnchor {
    pub text: String,
    pub position: Point2<f64>,
}

impl TextAnchor {
    /// Anchor `text` at `radius` along `bearing_deg`.
    pub fn at_radius(text: String, bearing_deg: f64, radius: f64) -> Self {
        let rad = draw_angle_rad(wrap_degrees(bearing_deg));
        let width = CHAR_WIDTH * text.len() as f64;
        let position = Point2::new(
            radius * rad.cos() - width / 2.0,
            radius * rad.sin() + BASELINE_DROP,
        );
        TextAnchor { text, position }
    }
}

/// Marker for one nearby aircraft: a short radial line just outside the
/// range circle and a label anchor further out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficMarker {
    /// Roster index of the aircraft
    pub id: u32,
    /// Raw bearing to the aircraft in degrees
    pub bearing: f64,
    pub line: LineSegment,
    pub label: TextAnchor,
}

/// Aggregate drawable geometry for one overlay frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRingLayout {
    /// Range circle radius in pixels
    pub radius: f64,
    /// Rotation in degrees the host applies once to the tick set — and only
    /// the tick set — before drawing. Zero in north-up mode, the negative
    /// heading in track-up mode.
    pub tick_rotation_deg: f64,
    /// Ticks in the canonical north-up frame, one per integer degree
    pub ticks: Vec<TickMark>,
    /// Heading indicator line, in screen frame
    pub heading_line: LineSegment,
    /// Numeric heading readout, in screen frame
    pub heading_label: TextAnchor,
    /// Interval labels every 30 degrees, in screen frame
    pub cardinal_labels: Vec<TextAnchor>,
    /// Traffic markers in roster order, in screen frame
    pub traffic: Vec<TrafficMarker>,
}

impl RangeRingLayout {
    /// JSON value for hosts that consume geometry across a serialization
    /// boundary.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
