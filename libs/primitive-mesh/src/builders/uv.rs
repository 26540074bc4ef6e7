//! # Texture Coordinates
//!
//! Every shape shares one [`UvSettings`]. Builders never see the settings
//! directly; the shape generator turns them into a [`UvRect`] (parametric
//! surfaces), a [`PlanarUv`] (flat faces) or a [`UvRun`] that hands out
//! consecutive rectangles along one axis for multi-piece surfaces.

use config::constants::EPSILON;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Shape-wide texture settings.
///
/// In normalized mode each region spans `tiling` in UV space. In real-world
/// mode UVs are physical lengths multiplied by `tiling`, so textures keep a
/// constant texel density across differently sized pieces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UvSettings {
    /// When false every vertex receives `(0, 0)`
    pub generate: bool,
    pub real_world: bool,
    pub offset: DVec2,
    pub tiling: DVec2,
}

impl Default for UvSettings {
    fn default() -> Self {
        Self {
            generate: true,
            real_world: false,
            offset: DVec2::ZERO,
            tiling: DVec2::ONE,
        }
    }
}

impl UvSettings {
    /// Rectangle for a single region of physical size `extent`
    /// (`x` along the builder's `s` direction, `y` along `t`).
    pub fn rect(&self, extent: DVec2) -> UvRect {
        let span = if self.real_world {
            extent * self.tiling
        } else {
            self.tiling
        };
        UvRect {
            origin: self.offset,
            span,
            enabled: self.generate,
        }
    }

    /// Planar projection of a flat region whose local bounds start at `min`
    /// and measure `size`.
    pub fn planar(&self, min: DVec2, size: DVec2) -> PlanarUv {
        let scale = if self.real_world {
            self.tiling
        } else {
            self.tiling / size.max(DVec2::splat(EPSILON))
        };
        PlanarUv {
            offset: self.offset,
            min,
            scale,
            enabled: self.generate,
        }
    }

    /// Starts a run of regions laid end to end along `axis`, covering a
    /// total physical length of `total`.
    pub fn run(&self, axis: UvAxis, total: f64) -> UvRun {
        UvRun {
            settings: *self,
            axis,
            total: total.max(EPSILON),
            cursor: 0.0,
        }
    }
}

/// Affine map from a builder's `(s, t) ∈ [0, 1]²` to UV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub origin: DVec2,
    pub span: DVec2,
    pub enabled: bool,
}

impl UvRect {
    #[inline]
    pub fn at(&self, s: f64, t: f64) -> DVec2 {
        if self.enabled {
            self.origin + self.span * DVec2::new(s, t)
        } else {
            DVec2::ZERO
        }
    }
}

/// Planar projection of local 2D coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarUv {
    offset: DVec2,
    min: DVec2,
    scale: DVec2,
    enabled: bool,
}

impl PlanarUv {
    #[inline]
    pub fn at(&self, local: DVec2) -> DVec2 {
        if self.enabled {
            self.offset + (local - self.min) * self.scale
        } else {
            DVec2::ZERO
        }
    }
}

/// Axis along which a [`UvRun`] advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvAxis {
    U,
    V,
}

/// Running UV offset for surfaces assembled from several builder calls.
///
/// Each call to [`UvRun::next`] returns the rectangle for the next piece and
/// advances the cursor by its length, so texture coordinates continue across
/// the seam instead of restarting at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRun {
    settings: UvSettings,
    axis: UvAxis,
    total: f64,
    cursor: f64,
}

impl UvRun {
    /// Rectangle for a piece `along` long in the run direction and `across`
    /// wide in the other.
    pub fn next(&mut self, along: f64, across: f64) -> UvRect {
        let s = &self.settings;
        let (run_tiling, cross_tiling) = match self.axis {
            UvAxis::U => (s.tiling.x, s.tiling.y),
            UvAxis::V => (s.tiling.y, s.tiling.x),
        };

        let (start, length, width) = if s.real_world {
            (
                self.cursor * run_tiling,
                along * run_tiling,
                across * cross_tiling,
            )
        } else {
            (
                run_tiling * self.cursor / self.total,
                run_tiling * along / self.total,
                cross_tiling,
            )
        };
        self.cursor += along;

        let (origin, span) = match self.axis {
            UvAxis::U => (
                s.offset + DVec2::new(start, 0.0),
                DVec2::new(length, width),
            ),
            UvAxis::V => (
                s.offset + DVec2::new(0.0, start),
                DVec2::new(width, length),
            ),
        };
        UvRect {
            origin,
            span,
            enabled: s.generate,
        }
    }

    /// Physical length consumed so far.
    pub fn position(&self) -> f64 {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_normalized_ignores_extent() {
        let uv = UvSettings::default().rect(DVec2::new(5.0, 2.0));
        assert_eq!(uv.at(1.0, 1.0), DVec2::ONE);
        assert_eq!(uv.at(0.0, 0.0), DVec2::ZERO);
    }

    #[test]
    fn test_rect_real_world_scales_by_extent() {
        let settings = UvSettings {
            real_world: true,
            tiling: DVec2::new(2.0, 1.0),
            ..Default::default()
        };
        let uv = settings.rect(DVec2::new(5.0, 2.0));
        assert_eq!(uv.at(1.0, 1.0), DVec2::new(10.0, 2.0));
    }

    #[test]
    fn test_disabled_yields_zero() {
        let settings = UvSettings {
            generate: false,
            offset: DVec2::ONE,
            ..Default::default()
        };
        assert_eq!(settings.rect(DVec2::ONE).at(0.5, 0.5), DVec2::ZERO);
        assert_eq!(
            settings.planar(DVec2::ZERO, DVec2::ONE).at(DVec2::ONE),
            DVec2::ZERO
        );
    }

    #[test]
    fn test_planar_normalized_spans_bounds() {
        let planar = UvSettings::default().planar(DVec2::new(-2.0, -1.0), DVec2::new(4.0, 2.0));
        assert_eq!(planar.at(DVec2::new(-2.0, -1.0)), DVec2::ZERO);
        assert_eq!(planar.at(DVec2::new(2.0, 1.0)), DVec2::ONE);
    }

    #[test]
    fn test_run_continues_across_pieces() {
        let mut run = UvSettings::default().run(UvAxis::U, 4.0);
        let first = run.next(1.0, 2.0);
        let second = run.next(3.0, 2.0);
        assert_relative_eq!(first.at(1.0, 0.0).x, second.at(0.0, 0.0).x);
        assert_relative_eq!(second.at(1.0, 1.0).x, 1.0);
        assert_eq!(run.position(), 4.0);
    }

    #[test]
    fn test_run_along_v_real_world() {
        let settings = UvSettings {
            real_world: true,
            ..Default::default()
        };
        let mut run = settings.run(UvAxis::V, 3.0);
        run.next(1.0, 6.0);
        let second = run.next(2.0, 6.0);
        assert_eq!(second.at(0.0, 0.0), DVec2::new(0.0, 1.0));
        assert_eq!(second.at(1.0, 1.0), DVec2::new(6.0, 3.0));
    }
}
