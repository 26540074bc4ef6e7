//! # Boxes
//!
//! Axis-aligned boxes in frame space with per-face culling, used directly
//! by the box shape and as the building block of stair steps.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::plane::build_quad;
use super::uv::UvSettings;
use crate::math::Frame;
use crate::mesh::Mesh;

/// Which of the six faces to emit.
///
/// Local directions: `left`/`right` along the frame's right axis,
/// `front`/`back` along forward (front faces backwards), `bottom`/`top`
/// along up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxFaces {
    pub left: bool,
    pub right: bool,
    pub front: bool,
    pub back: bool,
    pub bottom: bool,
    pub top: bool,
}

impl BoxFaces {
    pub const ALL: Self = Self {
        left: true,
        right: true,
        front: true,
        back: true,
        bottom: true,
        top: true,
    };

    pub fn count(&self) -> usize {
        [self.left, self.right, self.front, self.back, self.bottom, self.top]
            .iter()
            .filter(|f| **f)
            .count()
    }
}

impl Default for BoxFaces {
    fn default() -> Self {
        Self::ALL
    }
}

/// Subdivision along each local axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSegments {
    pub width: u32,
    pub length: u32,
    pub height: u32,
}

impl BoxSegments {
    pub const ONE: Self = Self {
        width: 1,
        length: 1,
        height: 1,
    };

    /// Segments along local axis `axis` (0 = right, 1 = forward, 2 = up).
    pub fn along(&self, axis: usize) -> u32 {
        match axis {
            0 => self.width,
            1 => self.length,
            _ => self.height,
        }
    }
}

impl Default for BoxSegments {
    fn default() -> Self {
        Self::ONE
    }
}

/// Builds the selected faces of the box spanning local `min..max`.
/// Faces point outward unless flipped.
#[allow(clippy::too_many_arguments)]
pub fn build_box(
    mesh: &mut Mesh,
    frame: &Frame,
    min: DVec3,
    max: DVec3,
    segments: BoxSegments,
    faces: BoxFaces,
    uv: &UvSettings,
    flip: bool,
) {
    let corner = |x: bool, y: bool, z: bool| {
        frame.point(
            if x { max.x } else { min.x },
            if y { max.y } else { min.y },
            if z { max.z } else { min.z },
        )
    };
    let size = max - min;
    let sign = if flip { -1.0 } else { 1.0 };
    let BoxSegments {
        width: sw,
        length: sl,
        height: sh,
    } = segments;

    // Corners listed as [p00, p10, p11, p01] with u across, v up the face
    if faces.front {
        let quad = [
            corner(false, false, false),
            corner(true, false, false),
            corner(true, false, true),
            corner(false, false, true),
        ];
        let rect = uv.rect(DVec2::new(size.x, size.z));
        build_quad(mesh, quad, sw, sh, -frame.forward * sign, &rect);
    }
    if faces.back {
        let quad = [
            corner(true, true, false),
            corner(false, true, false),
            corner(false, true, true),
            corner(true, true, true),
        ];
        let rect = uv.rect(DVec2::new(size.x, size.z));
        build_quad(mesh, quad, sw, sh, frame.forward * sign, &rect);
    }
    if faces.left {
        let quad = [
            corner(false, true, false),
            corner(false, false, false),
            corner(false, false, true),
            corner(false, true, true),
        ];
        let rect = uv.rect(DVec2::new(size.y, size.z));
        build_quad(mesh, quad, sl, sh, -frame.right * sign, &rect);
    }
    if faces.right {
        let quad = [
            corner(true, false, false),
            corner(true, true, false),
            corner(true, true, true),
            corner(true, false, true),
        ];
        let rect = uv.rect(DVec2::new(size.y, size.z));
        build_quad(mesh, quad, sl, sh, frame.right * sign, &rect);
    }
    if faces.bottom {
        let quad = [
            corner(false, true, false),
            corner(true, true, false),
            corner(true, false, false),
            corner(false, false, false),
        ];
        let rect = uv.rect(DVec2::new(size.x, size.y));
        build_quad(mesh, quad, sw, sl, -frame.up * sign, &rect);
    }
    if faces.top {
        let quad = [
            corner(false, false, true),
            corner(true, false, true),
            corner(true, true, true),
            corner(false, true, true),
        ];
        let rect = uv.rect(DVec2::new(size.x, size.y));
        build_quad(mesh, quad, sw, sl, frame.up * sign, &rect);
    }
}
