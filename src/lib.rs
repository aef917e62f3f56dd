//! Platform-independent map overlay geometry for HDD simulation displays
//!
//! This crate computes the drawable geometry of a heads-down display (HDD)
//! map/compass overlay — range-ring ticks, the heading indicator, cardinal
//! labels, and nearby-traffic markers — and mediates the zoom, pan, and
//! orientation controls around it. It is designed to be platform
//! independent and free of I/O: a host rendering layer supplies the
//! viewport size and per-frame aircraft state and paints the returned
//! primitives with its own backend.
//!
//! # Architecture
//!
//! - **angle**: compass-bearing to draw-angle conversion
//! - **compass**: cached range-ring ticks and per-frame overlay layout
//! - **traffic**: ordered, read-only snapshots of the aircraft roster
//! - **sprites**: ownship sprite selection by aircraft-type bitmask
//! - **controller**: zoom/pan/orientation mediation with polled events
//! - **error**: precondition errors shared by the geometry operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use hddmap_core::{CompassGeometry, Orientation, TrafficSnapshot};
//!
//! let mut compass = CompassGeometry::new();
//! compass.resize(400)?;
//!
//! let traffic: TrafficSnapshot = [(1, 90.0), (2, 270.0)].into_iter().collect();
//! let layout = compass.compute_layout(45.0, Orientation::TrackUp, &traffic)?;
//!
//! // Host: translate to the widget center, rotate the tick set once by
//! // layout.tick_rotation_deg, then draw the returned primitives.
//! ```
//!
//! # Coordinate conventions
//!
//! All geometry is centered on the ring center at (0, 0) with y growing
//! downward (screen coordinates); the host translates to the widget
//! center. In track-up mode the host applies the single
//! [`RangeRingLayout::tick_rotation_deg`] rotation to the tick set; labels
//! and traffic markers are already in screen frame.

pub mod angle;
pub mod compass;
pub mod controller;
pub mod error;
pub mod sprites;
pub mod traffic;

pub use angle::{draw_angle_rad, wrap_degrees};
pub use compass::{
    CompassGeometry, LineSegment, Orientation, RangeRingLayout, TextAnchor, TickMark, TickWeight,
    TrafficMarker, COMPASS_PADDING, MIN_DIAMETER,
};
pub use controller::{
    MapController, MapEvent, OverlayColor, DEFAULT_ZOOM, ZOOM_MAX, ZOOM_MIN,
};
pub use error::OverlayError;
pub use sprites::{ownship_sprite, AircraftType, SpriteSpec};
pub use traffic::{TrafficEntry, TrafficSnapshot, OWNSHIP_ID};
