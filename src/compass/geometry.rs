//! Tick cache and per-frame layout computation

use crate::angle::wrap_degrees;
use crate::error::OverlayError;
use crate::traffic::TrafficSnapshot;

use super::layout::{
    LineSegment, Orientation, RangeRingLayout, TextAnchor, TickMark, TickWeight, TrafficMarker,
    CARDINAL_LABEL_INSET, COMPASS_PADDING, HEADING_INNER_OFFSET, HEADING_LABEL_INSET,
    MIN_DIAMETER, TRAFFIC_MARK_LEN,
};

/// Computes all drawable geometry for the compass overlay.
///
/// Ticks are generated once per viewport diameter and cached in the
/// canonical north-up frame; everything else is recomputed per frame by
/// [`compute_layout`](Self::compute_layout). One instance is owned by
/// exactly one rendering thread — there is no internal synchronization.
#[derive(Debug, Clone)]
pub struct CompassGeometry {
    /// Diameter of the last successful resize
    diameter: Option<u32>,
    /// Range circle radius derived from the diameter
    radius: f64,
    /// Canonical north-up ticks, regenerated on resize
    ticks: Vec<TickMark>,
    /// Whether traffic markers are included in computed layouts
    show_traffic: bool,
}

impl Default for CompassGeometry {
    fn default() -> Self {
        CompassGeometry {
            diameter: None,
            radius: 0.0,
            ticks: Vec::new(),
            show_traffic: true,
        }
    }
}

impl CompassGeometry {
    pub fn new() -> Self {
        CompassGeometry::default()
    }

    /// Range circle radius from the last resize, if any.
    pub fn radius(&self) -> Option<f64> {
        self.diameter.map(|_| self.radius)
    }

    /// Include or exclude traffic markers in subsequent layouts.
    pub fn display_traffic(&mut self, show: bool) {
        self.show_traffic = show;
    }

    pub fn traffic_visible(&self) -> bool {
        self.show_traffic
    }

    /// Set the viewport diameter and regenerate the tick cache.
    ///
    /// Calling again with the unchanged diameter keeps the existing cache
    /// untouched. Diameters below [`MIN_DIAMETER`] are rejected without
    /// mutating any state.
    pub fn resize(&mut self, diameter: u32) -> Result<(), OverlayError> {
        if diameter < MIN_DIAMETER {
            return Err(OverlayError::InvalidDiameter(diameter));
        }
        if self.diameter == Some(diameter) {
            return Ok(());
        }

        let radius = f64::from(diameter) / 2.0 - COMPASS_PADDING;
        log::trace!("regenerating compass ticks for diameter {diameter}");
        self.ticks = generate_ticks(radius);
        self.radius = radius;
        self.diameter = Some(diameter);
        Ok(())
    }

    /// Resize for a viewport of `width` x `height` pixels.
    ///
    /// The overlay is always a square; the smaller side wins.
    pub fn resize_to_fit(&mut self, width: u32, height: u32) -> Result<(), OverlayError> {
        self.resize(width.min(height))
    }

    /// Compute the full overlay geometry for one frame.
    ///
    /// Ticks come back in the canonical north-up frame together with the
    /// single rotation the host applies to them; the heading line, heading
    /// label, cardinal labels, and traffic markers are emitted directly in
    /// screen frame with their bearings already adjusted for the
    /// orientation mode. Ownship roster entries (id 0) are skipped.
    ///
    /// Deterministic for identical state and arguments; the tick cache is
    /// never mutated here.
    pub fn compute_layout(
        &self,
        heading: f64,
        orientation: Orientation,
        traffic: &TrafficSnapshot,
    ) -> Result<RangeRingLayout, OverlayError> {
        if self.diameter.is_none() {
            return Err(OverlayError::NotInitialized);
        }
        if !heading.is_finite() {
            return Err(OverlayError::InvalidHeading(heading));
        }

        let radius = self.radius;
        let north_up = orientation.is_north_up();

        // In track-up mode everything textual counter-rotates by the
        // heading so it stays earth-referenced and upright.
        let adjust = |deg: f64| {
            if north_up {
                wrap_degrees(deg)
            } else {
                wrap_degrees(deg - heading)
            }
        };

        // The heading is "up" by definition in track-up mode
        let heading_bearing = if north_up { heading } else { 0.0 };

        let heading_line =
            LineSegment::radial(heading_bearing, HEADING_INNER_OFFSET, radius);
        let heading_label = TextAnchor::at_radius(
            format!("{heading:.1}"),
            heading_bearing,
            radius - HEADING_LABEL_INSET,
        );

        let cardinal_labels = (0..360)
            .step_by(30)
            .map(|i| {
                TextAnchor::at_radius(
                    i.to_string(),
                    adjust(f64::from(i)),
                    radius - CARDINAL_LABEL_INSET,
                )
            })
            .collect();

        let traffic_markers = if self.show_traffic {
            traffic
                .entries()
                .iter()
                .filter(|entry| !entry.is_ownship())
                .map(|entry| {
                    let screen_bearing = adjust(entry.bearing);
                    TrafficMarker {
                        id: entry.id,
                        bearing: entry.bearing,
                        line: LineSegment::radial(
                            screen_bearing,
                            radius,
                            radius + TRAFFIC_MARK_LEN,
                        ),
                        label: TextAnchor::at_radius(
                            entry.id.to_string(),
                            screen_bearing,
                            radius + 3.0 * TRAFFIC_MARK_LEN,
                        ),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(RangeRingLayout {
            radius,
            tick_rotation_deg: if north_up { 0.0 } else { -heading },
            ticks: self.ticks.clone(),
            heading_line,
            heading_label,
            cardinal_labels,
            traffic: traffic_markers,
        })
    }
}

/// One tick per integer degree, endpoints at [radius - length, radius].
fn generate_ticks(radius: f64) -> Vec<TickMark> {
    (0u16..360)
        .map(|deg| {
            let weight = TickWeight::for_bearing(deg);
            let length = weight.length();
            TickMark {
                bearing: deg,
                weight,
                line: LineSegment::radial(f64::from(deg), radius - length, radius),
            }
        })
        .collect()
}
