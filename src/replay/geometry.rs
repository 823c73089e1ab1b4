// Geometry normalization: fits arbitrary-scale track data onto a fixed-size
// drawing surface and maps data-space points into surface space

use serde::{Deserialize, Serialize};

use crate::errors::ReplayError;
use crate::session::TrackPoint;

/// Configuration of the drawing surface geometry is fitted into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface dimensions (width, height) in pixels
    pub surface_size: (u32, u32),
    /// Stroke width for the track line
    pub stroke_width: f32,
    /// Fixed margin, in surface units, kept clear around the fitted geometry
    pub padding: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            surface_size: (800, 600),
            stroke_width: 3.0,
            padding: 100.0,
        }
    }
}

/// A point in surface coordinates, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of the track polyline. Derived data, recomputed
/// whenever the track changes.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub fn new() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    pub fn update(&mut self, point: TrackPoint) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

/// Projection mode applied when mapping data space to surface space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Both scale factors applied; for fixed-size raster surfaces
    Scaled,
    /// Translation only, scale 1:1; for surfaces that scale themselves,
    /// e.g. a vector document whose viewBox matches the padded data extent
    TranslateOnly,
}

/// The affine data-space to surface-space transform shared by track and
/// driver rendering, so both use one consistent mapping
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    bounds: BoundingBox,
    scale_x: f32,
    scale_y: f32,
    padding: f32,
    projection: Projection,
}

impl ViewTransform {
    /// Compute the transform that fits `track` into the configured surface
    /// with the configured padding on every side.
    ///
    /// An empty track, a zero-extent bounding box, or non-finite input
    /// coordinates yield `DegenerateGeometry`: there is nothing to draw yet,
    /// not a fatal condition.
    pub fn fit(
        track: &[TrackPoint],
        config: &SurfaceConfig,
        projection: Projection,
    ) -> Result<Self, ReplayError> {
        if track.is_empty() {
            return Err(ReplayError::DegenerateGeometry);
        }

        let mut bounds = BoundingBox::new();
        for point in track {
            bounds.update(*point);
        }

        if !bounds.is_finite() || bounds.width() <= 0. || bounds.height() <= 0. {
            return Err(ReplayError::DegenerateGeometry);
        }

        let (scale_x, scale_y) = match projection {
            Projection::Scaled => {
                let (width, height) = config.surface_size;
                (
                    (width as f32 - 2. * config.padding) / bounds.width(),
                    (height as f32 - 2. * config.padding) / bounds.height(),
                )
            }
            Projection::TranslateOnly => (1., 1.),
        };

        Ok(Self {
            bounds,
            scale_x,
            scale_y,
            padding: config.padding,
            projection,
        })
    }

    /// Map one data-space point into surface space
    pub fn map_point(&self, point: TrackPoint) -> ScreenPoint {
        ScreenPoint::new(
            (point.x - self.bounds.min_x) * self.scale_x + self.padding,
            (point.y - self.bounds.min_y) * self.scale_y + self.padding,
        )
    }

    /// The projection mode this transform was fitted with. Backends check
    /// this instead of assuming a convention.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn scale(&self) -> (f32, f32) {
        (self.scale_x, self.scale_y)
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Extent of the padded output area: the surface the translate-only
    /// projection fills, used by vector backends to size their viewBox
    pub fn viewbox_size(&self) -> (f32, f32) {
        (
            self.bounds.width() * self.scale_x + 2. * self.padding,
            self.bounds.height() * self.scale_y + 2. * self.padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn l_track() -> Vec<TrackPoint> {
        vec![
            TrackPoint::new(0., 0.),
            TrackPoint::new(10., 0.),
            TrackPoint::new(10., 10.),
        ]
    }

    #[test]
    fn test_fit_computes_bounding_box_and_scales() {
        let transform =
            ViewTransform::fit(&l_track(), &SurfaceConfig::default(), Projection::Scaled).unwrap();

        let bounds = transform.bounds();
        assert_eq!(bounds.min_x, 0.);
        assert_eq!(bounds.max_x, 10.);
        assert_eq!(bounds.min_y, 0.);
        assert_eq!(bounds.max_y, 10.);
        assert_eq!(transform.scale(), (60., 40.));
    }

    #[test]
    fn test_map_point_scaled() {
        let transform =
            ViewTransform::fit(&l_track(), &SurfaceConfig::default(), Projection::Scaled).unwrap();

        assert_eq!(
            transform.map_point(TrackPoint::new(10., 10.)),
            ScreenPoint::new(700., 500.)
        );
        assert_eq!(
            transform.map_point(TrackPoint::new(0., 0.)),
            ScreenPoint::new(100., 100.)
        );
    }

    #[test]
    fn test_map_point_translate_only() {
        let transform = ViewTransform::fit(
            &l_track(),
            &SurfaceConfig::default(),
            Projection::TranslateOnly,
        )
        .unwrap();

        assert_eq!(transform.projection(), Projection::TranslateOnly);
        assert_eq!(
            transform.map_point(TrackPoint::new(10., 10.)),
            ScreenPoint::new(110., 110.)
        );
        assert_eq!(transform.viewbox_size(), (210., 210.));
    }

    #[test]
    fn test_empty_track_is_degenerate() {
        let result = ViewTransform::fit(&[], &SurfaceConfig::default(), Projection::Scaled);
        assert!(matches!(result, Err(ReplayError::DegenerateGeometry)));
    }

    #[test]
    fn test_zero_extent_track_is_degenerate() {
        // a single point and a horizontal line both have a collapsed axis
        let single = vec![TrackPoint::new(5., 5.)];
        let flat = vec![TrackPoint::new(0., 5.), TrackPoint::new(10., 5.)];

        for track in [single, flat] {
            let result = ViewTransform::fit(&track, &SurfaceConfig::default(), Projection::Scaled);
            assert!(matches!(result, Err(ReplayError::DegenerateGeometry)));
        }
    }

    #[test]
    fn test_non_finite_track_is_degenerate() {
        let track = vec![
            TrackPoint::new(0., 0.),
            TrackPoint::new(f32::NAN, 10.),
            TrackPoint::new(10., 10.),
        ];
        let result = ViewTransform::fit(&track, &SurfaceConfig::default(), Projection::Scaled);
        assert!(matches!(result, Err(ReplayError::DegenerateGeometry)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_mapped_corners_stay_inside_padding(
            min_x in -50_000.0f32..50_000.0,
            min_y in -50_000.0f32..50_000.0,
            width in 0.5f32..100_000.0,
            height in 0.5f32..100_000.0,
        ) {
            let track = vec![
                TrackPoint::new(min_x, min_y),
                TrackPoint::new(min_x + width, min_y + height),
            ];
            let config = SurfaceConfig::default();
            let transform = ViewTransform::fit(&track, &config, Projection::Scaled).unwrap();

            let (surface_w, surface_h) = config.surface_size;
            // rounding tolerance: one part in 10^3 of the surface
            let tolerance = 1e-3 * surface_w.max(surface_h) as f32;

            for corner in [
                TrackPoint::new(min_x, min_y),
                TrackPoint::new(min_x + width, min_y),
                TrackPoint::new(min_x, min_y + height),
                TrackPoint::new(min_x + width, min_y + height),
            ] {
                let mapped = transform.map_point(corner);
                prop_assert!(mapped.x >= config.padding - tolerance);
                prop_assert!(mapped.x <= surface_w as f32 - config.padding + tolerance);
                prop_assert!(mapped.y >= config.padding - tolerance);
                prop_assert!(mapped.y <= surface_h as f32 - config.padding + tolerance);
            }
        }
    }
}
