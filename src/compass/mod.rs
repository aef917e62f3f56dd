//! Range-ring and compass overlay geometry
//!
//! This module turns a viewport diameter and per-frame aircraft state into
//! drawable primitives: range-ring ticks, the heading indicator, cardinal
//! labels, and traffic markers.
//!
//! # Features
//!
//! - 360 per-degree ticks, cached per diameter and only regenerated on
//!   resize
//! - North-up and track-up orientation with a single host-side rotation
//!   for the tick set
//! - Traffic markers just outside the ring, in roster order
//!
//! # Example
//!
//! ```rust,ignore
//! use hddmap_core::compass::{CompassGeometry, Orientation};
//! use hddmap_core::traffic::TrafficSnapshot;
//!
//! let mut compass = CompassGeometry::new();
//! compass.resize(400)?;
//!
//! let traffic: TrafficSnapshot = [(1, 90.0)].into_iter().collect();
//! let layout = compass.compute_layout(45.0, Orientation::NorthUp, &traffic)?;
//! ```

mod geometry;
mod layout;

pub use geometry::CompassGeometry;
pub use layout::{
    LineSegment, Orientation, RangeRingLayout, TextAnchor, TickMark, TickWeight, TrafficMarker,
    BASELINE_DROP, CARDINAL_LABEL_INSET, CHAR_WIDTH, COMPASS_PADDING, HEADING_INNER_OFFSET,
    HEADING_LABEL_INSET, MIN_DIAMETER, TICK_LONG, TICK_MEDIUM, TICK_SHORT, TRAFFIC_MARK_LEN,
};
