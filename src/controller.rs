//! Map control mediation
//!
//! `MapController` sits between the application settings layer and the map
//! view: zoom requests are bounds-checked here, orientation and traffic
//! display changes pass through here, and pan requests are forwarded to the
//! view. State changes are queued as [`MapEvent`]s which the host drains
//! with [`poll_events`](MapController::poll_events) and applies to the
//! widgets and settings store it owns.

use serde::{Deserialize, Serialize};

use crate::compass::Orientation;

/// Smallest zoom level; requests at or below it are rejected.
pub const ZOOM_MIN: i32 = 0;
/// Largest zoom level; requests at or beyond it are rejected.
pub const ZOOM_MAX: i32 = 21;
/// Zoom level used before the settings layer provides one.
pub const DEFAULT_ZOOM: i32 = 10;

/// Overlay drawing color.
///
/// The overlay switches color with the satellite base layer so it stays
/// readable against either background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayColor {
    Yellow,
    DarkMagenta,
}

impl OverlayColor {
    /// RGB triple for the host painting backend.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            OverlayColor::Yellow => [0xff, 0xff, 0x00],
            OverlayColor::DarkMagenta => [0x80, 0x00, 0x80],
        }
    }
}

/// State change notification for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MapEvent {
    /// Zoom changed to the contained level
    ZoomChanged(i32),
    /// A zoom request hit the lower bound and was rejected
    ZoomMinReached,
    /// A zoom request hit the upper bound and was rejected
    ZoomMaxReached,
    OrientationChanged(Orientation),
    /// The view should pan to this location
    PanRequested { lat: f64, lon: f64 },
    TrafficDisplayChanged(bool),
    OverlayColorChanged(OverlayColor),
}

/// Mediates zoom, pan, and orientation changes between the settings layer
/// and the map view.
///
/// Mutating calls queue [`MapEvent`]s, oldest first; the host polls and
/// forwards them. One instance is owned by one UI thread.
#[derive(Debug, Clone)]
pub struct MapController {
    zoom: i32,
    orientation: Orientation,
    sat_map_active: bool,
    events: Vec<MapEvent>,
}

impl Default for MapController {
    fn default() -> Self {
        MapController::new()
    }
}

impl MapController {
    pub fn new() -> Self {
        MapController {
            zoom: DEFAULT_ZOOM,
            orientation: Orientation::TrackUp,
            sat_map_active: false,
            events: Vec::new(),
        }
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn sat_map_active(&self) -> bool {
        self.sat_map_active
    }

    /// Current overlay color: yellow over the satellite layer, dark
    /// magenta over the plain map.
    pub fn overlay_color(&self) -> OverlayColor {
        if self.sat_map_active {
            OverlayColor::Yellow
        } else {
            OverlayColor::DarkMagenta
        }
    }

    /// Request an absolute zoom level.
    ///
    /// Levels at or beyond a bound are rejected and leave the zoom
    /// unchanged; the queued limit event tells the host which button to
    /// disable.
    pub fn set_zoom(&mut self, level: i32) {
        if level >= ZOOM_MAX {
            log::debug!("zoom {level} rejected, at maximum");
            self.events.push(MapEvent::ZoomMaxReached);
            return;
        }
        if level <= ZOOM_MIN {
            log::debug!("zoom {level} rejected, at minimum");
            self.events.push(MapEvent::ZoomMinReached);
            return;
        }
        self.zoom = level;
        self.events.push(MapEvent::ZoomChanged(level));
    }

    pub fn increase_zoom(&mut self) {
        self.set_zoom(self.zoom + 1);
    }

    pub fn decrease_zoom(&mut self) {
        self.set_zoom(self.zoom - 1);
    }

    /// Ask the view to pan to a location.
    pub fn pan_to_location(&mut self, lat: f64, lon: f64) {
        self.events.push(MapEvent::PanRequested { lat, lon });
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.events.push(MapEvent::OrientationChanged(orientation));
    }

    /// Ask the view to show or hide traffic markers.
    pub fn display_traffic(&mut self, show: bool) {
        self.events.push(MapEvent::TrafficDisplayChanged(show));
    }

    /// Toggle the satellite base layer, switching the overlay color with
    /// it.
    pub fn set_sat_map_active(&mut self, active: bool) {
        self.sat_map_active = active;
        self.events
            .push(MapEvent::OverlayColorChanged(self.overlay_color()));
    }

    /// Drain all queued events, oldest first.
    pub fn poll_events(&mut self) -> Vec<MapEvent> {
        std::mem::take(&mut self.events)
    }
}
