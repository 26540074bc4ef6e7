use super::*;
use crate::builders::box_faces::BoxFaces;
use crate::builders::rect_ring::RoundedRect;
use approx::assert_relative_eq;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

fn build(shape: &Shape, flip: bool) -> Mesh {
    let mut mesh = Mesh::new();
    shape
        .clamped()
        .build(&mut mesh, &Frame::default(), &UvSettings::default(), flip);
    mesh
}

/// Volume enclosed by a closed mesh; positive when faces point outward.
fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.triangles()
        .iter()
        .map(|tri| {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            a.dot(b.cross(c)) / 6.0
        })
        .sum()
}

/// Every directed edge is matched by exactly one opposite edge elsewhere.
fn assert_closed(mesh: &Mesh) {
    let edges: Vec<(DVec3, DVec3)> = mesh
        .triangles()
        .iter()
        .flat_map(|tri| {
            let [a, b, c] = tri.map(|i| mesh.vertex(i));
            [(a, b), (b, c), (c, a)]
        })
        .collect();
    let close = |p: DVec3, q: DVec3| p.distance(q) < 1e-9;
    for (p, q) in &edges {
        let twins = edges.iter().filter(|(s, t)| close(*s, *q) && close(*t, *p)).count();
        assert_eq!(twins, 1, "edge {p} -> {q} has {twins} twins");
    }
}

/// Area of a regular `n`-gon inscribed in a circle of radius `r`.
fn ngon_area(n: u32, r: f64) -> f64 {
    0.5 * n as f64 * r * r * (2.0 * PI / n as f64).sin()
}

// =============================================================================
// CATALOGUE
// =============================================================================

#[test]
fn test_every_default_kind_builds() {
    for kind in ShapeKind::ALL {
        let shape = kind.default_shape();
        assert_eq!(shape.kind(), kind);
        let mesh = build(&shape, false);
        assert!(!mesh.is_empty(), "{kind} produced nothing");
        assert!(mesh.validate(), "{kind} produced an invalid mesh");
        assert!(mesh.vertices().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_defaults_are_already_clamped() {
    for kind in ShapeKind::ALL {
        let shape = kind.default_shape();
        assert_eq!(shape.clamped(), shape, "{kind}");
    }
}

#[test]
fn test_generation_is_deterministic() {
    for kind in ShapeKind::ALL {
        let shape = kind.default_shape();
        let (a, b) = (build(&shape, false), build(&shape, false));
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.uvs(), b.uvs());
        assert_eq!(a.triangles(), b.triangles());
    }
}

fn out_of_range_shapes() -> Vec<Shape> {
    vec![
        Shape::Plane(PlaneParams {
            width: -1.0,
            length: 1e9,
            width_segments: 0,
            length_segments: 1000,
        }),
        Shape::Ring(RingParams {
            inner_radius: 3.0,
            outer_radius: 1.0,
            sides: 1,
            ..Default::default()
        }),
        Shape::Triangle(TriangleParams {
            apex: f64::NAN,
            ..Default::default()
        }),
        Shape::ChamferBox(ChamferBoxParams {
            fillet: 10.0,
            height: 0.0,
            ..Default::default()
        }),
        Shape::Tube(TubeParams {
            inner_radius: f64::NAN,
            bottom_thickness: 100.0,
            top_thickness: -3.0,
            ..Default::default()
        }),
        Shape::Torus(TorusParams {
            minor_radius: 5.0,
            major_slice: Slice::new(400.0, -5.0),
            ..Default::default()
        }),
        Shape::ChamferCylinder(ChamferCylinderParams {
            fillet: 2.0,
            fillet_segments: 500,
            ..Default::default()
        }),
        Shape::Tray(TrayParams {
            wall_thickness: 5.0,
            bottom_thickness: 5.0,
            corner_radius: -1.0,
            ..Default::default()
        }),
        Shape::Arrow(ArrowParams {
            head_length: 10.0,
            shaft_width: 10.0,
            ..Default::default()
        }),
        Shape::SpiralStair(SpiralStairParams {
            steps: 1000,
            inner_radius: 5.0,
            step_angle: -10.0,
            ..Default::default()
        }),
        Shape::Polygon(PolygonParams {
            points: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(f64::NAN, 1.0),
                DVec2::new(1.0, 0.0),
                DVec2::new(1e6, 1e6),
            ],
            thickness: -1.0,
        }),
    ]
}

#[test]
fn test_clamping_is_idempotent() {
    for shape in out_of_range_shapes() {
        let once = shape.clamped();
        assert_eq!(once.clamped(), once, "{}", shape.kind());
    }
}

#[test]
fn test_out_of_range_parameters_still_build() {
    for shape in out_of_range_shapes() {
        let mesh = build(&shape, false);
        assert!(mesh.validate(), "{}", shape.kind());
        assert!(mesh.vertices().iter().all(|v| v.is_finite()));
        // Repeated generation from the same raw input is byte-identical
        assert_eq!(build(&shape, false).vertices(), mesh.vertices());
    }
}

#[test]
fn test_dependent_clamps() {
    let ring = RingParams {
        inner_radius: 3.0,
        outer_radius: 1.0,
        ..Default::default()
    }
    .clamped();
    assert!(ring.inner_radius < ring.outer_radius);

    let tube = TubeParams {
        bottom_thickness: 100.0,
        top_thickness: 100.0,
        ..Default::default()
    }
    .clamped();
    assert!(tube.bottom_thickness + tube.top_thickness < tube.height);

    let slice = Slice::new(400.0, -5.0).clamped();
    assert_eq!((slice.from, slice.to), (360.0, 360.0));
}

// =============================================================================
// CLOSED SOLIDS
// =============================================================================

#[test]
fn test_box_volume_and_closure() {
    let shape = Shape::Box(BoxParams {
        width: 2.0,
        length: 3.0,
        height: 4.0,
        ..Default::default()
    });
    let mesh = build(&shape, false);
    assert_closed(&mesh);
    assert_relative_eq!(signed_volume(&mesh), 24.0, epsilon = 1e-9);
}

#[test]
fn test_solids_are_closed_and_face_outward() {
    let solids = [
        ShapeKind::Box,
        ShapeKind::ChamferBox,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Tube,
        ShapeKind::Torus,
        ShapeKind::ChamferCylinder,
        ShapeKind::Plate,
        ShapeKind::Tray,
        ShapeKind::RectTube,
        ShapeKind::RectTubeR,
        ShapeKind::Arrow,
    ];
    for kind in solids {
        let mesh = build(&kind.default_shape(), false);
        assert_closed(&mesh);
        assert!(signed_volume(&mesh) > 0.0, "{kind} faces inward");
    }
}

#[test]
fn test_flip_reverses_orientation() {
    for kind in [ShapeKind::ChamferBox, ShapeKind::Tube, ShapeKind::Tray, ShapeKind::Torus] {
        let shape = kind.default_shape();
        let (outward, inward) = (build(&shape, false), build(&shape, true));
        assert_relative_eq!(signed_volume(&inward), -signed_volume(&outward), epsilon = 1e-9);
        assert_relative_eq!(inward.surface_area(), outward.surface_area(), epsilon = 1e-9);
    }

    let mut plane = build(&ShapeKind::Plane.default_shape(), true);
    plane.finalize();
    assert!(plane.normals().unwrap().iter().all(|n| n.z < -0.99));
}

#[test]
fn test_cylinder_volume() {
    let mesh = build(&ShapeKind::Cylinder.default_shape(), false);
    assert_relative_eq!(signed_volume(&mesh), ngon_area(24, 0.5), epsilon = 1e-9);
}

#[test]
fn test_tube_volume_with_closed_ends() {
    let shape = Shape::Tube(TubeParams {
        bottom_thickness: 0.1,
        top_thickness: 0.2,
        ..Default::default()
    });
    let mesh = build(&shape, false);
    assert_closed(&mesh);
    let ring = ngon_area(24, 0.5) - ngon_area(24, 0.25);
    let slabs = ngon_area(24, 0.25) * 0.3;
    assert_relative_eq!(signed_volume(&mesh), ring + slabs, epsilon = 1e-9);
}

#[test]
fn test_sliced_solids_are_closed() {
    let quarter = Slice::new(0.0, 90.0);
    let shapes = [
        Shape::Cylinder(CylinderParams {
            slice: quarter,
            ..Default::default()
        }),
        Shape::Tube(TubeParams {
            slice: quarter,
            ..Default::default()
        }),
        Shape::ChamferCylinder(ChamferCylinderParams {
            slice: quarter,
            ..Default::default()
        }),
        Shape::Torus(TorusParams {
            major_slice: Slice::new(30.0, 200.0),
            ..Default::default()
        }),
    ];
    for shape in &shapes {
        let mesh = build(shape, false);
        assert_closed(&mesh);
        assert!(signed_volume(&mesh) > 0.0, "{}", shape.kind());
    }

    let quarter_cylinder = build(&shapes[0], false);
    // arc_steps(24, 0, 90°) = 6 wedges of 15°
    let expected = 3.0 * 0.25 * (PI / 12.0).sin();
    assert_relative_eq!(signed_volume(&quarter_cylinder), expected, epsilon = 1e-9);
}

#[test]
fn test_near_full_slice_closes_like_full_turn() {
    let shape = Shape::Cylinder(CylinderParams {
        slice: Slice::new(0.0, 359.9999),
        ..Default::default()
    });
    let Shape::Cylinder(clamped) = shape.clamped() else {
        panic!("clamping changed the shape kind");
    };
    assert_eq!(clamped.slice, Slice::default());

    let mesh = build(&shape, false);
    assert_closed(&mesh);
    let full = build(&ShapeKind::Cylinder.default_shape(), false);
    assert_relative_eq!(signed_volume(&mesh), signed_volume(&full), epsilon = 1e-12);
}

#[test]
fn test_empty_slice_is_noop() {
    let shape = Shape::Cylinder(CylinderParams {
        slice: Slice::new(90.0, 90.0),
        ..Default::default()
    });
    assert!(build(&shape, false).is_empty());
}

// =============================================================================
// CHAMFERED SHAPES
// =============================================================================

#[test]
fn test_chamfer_box_lies_on_rounded_surface() {
    let p = ChamferBoxParams {
        width: 2.0,
        length: 1.0,
        height: 1.5,
        fillet: 0.2,
        ..Default::default()
    };
    let mesh = build(&Shape::ChamferBox(p), false);
    let half = DVec3::new(1.0, 0.5, 0.75);
    let inner = half - DVec3::splat(0.2);
    let centre = DVec3::new(0.0, 0.0, 0.75);
    for v in mesh.vertices() {
        let local = *v - centre;
        let nearest = local.clamp(-inner, inner);
        assert_relative_eq!(local.distance(nearest), 0.2, epsilon = 1e-9);
    }
}

#[test]
fn test_chamfer_box_area_approaches_rounded_box() {
    let p = ChamferBoxParams {
        fillet: 0.25,
        fillet_segments: 48,
        ..Default::default()
    };
    let mesh = build(&Shape::ChamferBox(p), false);
    // Flat faces, twelve quarter cylinders and one full sphere
    let (a, f) = (0.5, 0.25);
    let expected = 6.0 * a * a + 12.0 * FRAC_PI_2 * f * a + 4.0 * PI * f * f;
    assert_relative_eq!(mesh.surface_area(), expected, max_relative = 1e-2);
}

#[test]
fn test_flat_chamfer_box_is_closed() {
    let p = ChamferBoxParams {
        flat_chamfer: true,
        ..Default::default()
    };
    let mesh = build(&Shape::ChamferBox(p), false);
    assert_closed(&mesh);
    // 6 faces + 12 single bevels + 8 corner triangles
    assert_eq!(mesh.triangle_count(), 6 * 2 + 12 * 2 + 8);
}

#[test]
fn test_chamfer_cylinder_bounds() {
    let mesh = build(&ShapeKind::ChamferCylinder.default_shape(), false);
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(max.z, 1.0, epsilon = 1e-12);
    assert_relative_eq!(max.x, 0.5, epsilon = 1e-12);
}

#[test]
fn test_chamfer_cylinder_fillet_arc_length() {
    // Full-height fillet leaves no straight band
    let p = ChamferCylinderParams {
        radius: 1.0,
        height: 1.0,
        fillet: 0.5,
        fillet_segments: 64,
        sides: 64,
        ..Default::default()
    };
    let mesh = build(&Shape::ChamferCylinder(p), false);
    assert_closed(&mesh);
    // Pappus: profile arc of length π·f swept around its centroid radius
    let f = 0.5;
    let centroid = 0.5 + 2.0 * f / PI;
    let lateral = PI * f * 2.0 * PI * centroid;
    let caps = 2.0 * PI * 0.25;
    assert_relative_eq!(mesh.surface_area(), lateral + caps, max_relative = 1e-2);
}

// =============================================================================
// RECTANGULAR SHAPES
// =============================================================================

#[test]
fn test_sharp_plate_volume() {
    let p = PlateParams {
        width: 2.0,
        length: 1.0,
        thickness: 0.5,
        corner_radius: 0.0,
        ..Default::default()
    };
    let mesh = build(&Shape::Plate(p), false);
    assert_closed(&mesh);
    assert_relative_eq!(signed_volume(&mesh), 1.0, epsilon = 1e-9);
}

#[test]
fn test_tray_volume() {
    let p = TrayParams {
        width: 2.0,
        length: 2.0,
        height: 1.0,
        wall_thickness: 0.1,
        bottom_thickness: 0.2,
        corner_radius: 0.0,
        ..Default::default()
    };
    let mesh = build(&Shape::Tray(p), false);
    assert_closed(&mesh);
    let cavity = 1.8 * 1.8 * 0.8;
    assert_relative_eq!(signed_volume(&mesh), 4.0 - cavity, epsilon = 1e-9);
}

#[test]
fn test_rect_tube_volume() {
    let p = RectTubeParams {
        width: 1.0,
        length: 1.0,
        height: 2.0,
        wall_thickness: 0.25,
        ..Default::default()
    };
    let mesh = build(&Shape::RectTube(p), false);
    assert_relative_eq!(signed_volume(&mesh), 2.0 * (1.0 - 0.25), epsilon = 1e-9);
}

// =============================================================================
// OUTLINES AND STAIRS
// =============================================================================

#[test]
fn test_flat_polygon_is_single_face() {
    let mesh = build(&ShapeKind::Polygon.default_shape(), false);
    assert_eq!(mesh.triangle_count(), 4);
    assert_relative_eq!(mesh.surface_area(), 0.75, epsilon = 1e-12);
}

#[test]
fn test_polygon_with_too_few_points_is_noop() {
    let shape = Shape::Polygon(PolygonParams {
        points: vec![DVec2::ZERO, DVec2::X],
        thickness: 1.0,
    });
    assert!(build(&shape, false).is_empty());
}

#[test]
fn test_clockwise_polygon_prism_faces_outward() {
    let mut points = PolygonParams::default().points;
    points.reverse();
    let shape = Shape::Polygon(PolygonParams { points, thickness: 2.0 });
    let mesh = build(&shape, false);
    assert_closed(&mesh);
    assert_relative_eq!(signed_volume(&mesh), 1.5, epsilon = 1e-9);
}

#[test]
fn test_flat_arrow_area() {
    let shape = Shape::Arrow(ArrowParams {
        thickness: 0.0,
        ..Default::default()
    });
    let mesh = build(&shape, false);
    // Shaft 0.2 × 0.6 plus head 0.5 × 0.4 / 2
    assert_relative_eq!(mesh.surface_area(), 0.12 + 0.1, epsilon = 1e-12);
}

#[test]
fn test_stair_bounds() {
    let p = StairParams::default();
    let mesh = build(&Shape::Stair(p), false);
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min, DVec3::new(-0.5, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(max, DVec3::new(0.5, 1.0, 0.8), epsilon = 1e-12);
}

#[test]
fn test_single_step_stair_is_closed_box() {
    let p = StairParams {
        steps: 1,
        ..Default::default()
    };
    let mesh = build(&Shape::Stair(p), false);
    assert_closed(&mesh);
    assert_relative_eq!(signed_volume(&mesh), 0.25 * 0.2, epsilon = 1e-12);
}

#[test]
fn test_spiral_stair_height_and_column() {
    let p = SpiralStairParams::default();
    let mesh = build(&Shape::SpiralStair(p), false);
    let (_, max) = mesh.bounding_box();
    assert_relative_eq!(max.z, 12.0 * 0.2, epsilon = 1e-9);

    let without = build(
        &Shape::SpiralStair(SpiralStairParams {
            column: false,
            ..p
        }),
        false,
    );
    assert!(without.triangle_count() < mesh.triangle_count());
}

// =============================================================================
// PLACEMENT AND SERIALISATION
// =============================================================================

#[test]
fn test_frame_applies_pivot_in_local_axes() {
    let params = ShapeParams {
        origin: DVec3::new(10.0, 0.0, 0.0),
        forward: DVec3::X,
        right: DVec3::NEG_Y,
        pivot_offset: DVec3::new(1.0, 0.0, 0.0),
        ..ShapeParams::new(ShapeKind::Box.default_shape())
    };
    let frame = params.frame().unwrap();
    assert_relative_eq!(frame.origin, DVec3::new(10.0, -1.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(frame.up, DVec3::Z, epsilon = 1e-12);
}

#[test]
fn test_parallel_axes_rejected() {
    let params = ShapeParams {
        forward: DVec3::X,
        right: DVec3::X * 2.0,
        ..Default::default()
    };
    assert!(params.frame().is_err());
}

#[test]
fn test_preset_json_round_trip() {
    let params = ShapeParams {
        shape: Shape::Tube(TubeParams {
            slice: Slice::new(0.0, 180.0),
            bottom_thickness: 0.1,
            ..Default::default()
        }),
        origin: DVec3::new(1.0, 2.0, 3.0),
        flip_normals: true,
        ..Default::default()
    };
    let json = serde_json::to_string(&params).unwrap();
    let back: ShapeParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn test_partial_preset_uses_defaults() {
    let json = r#"{ "shape": { "kind": "Box", "width": 2.0 }, "uv": { "real_world": true } }"#;
    let params: ShapeParams = serde_json::from_str(json).unwrap();
    match &params.shape {
        Shape::Box(p) => {
            assert_eq!(p.width, 2.0);
            assert_eq!(p.height, BoxParams::default().height);
            assert_eq!(p.faces, BoxFaces::ALL);
        }
        other => panic!("unexpected shape {:?}", other.kind()),
    }
    assert!(params.uv.real_world);
    assert!(params.uv.generate);
    assert_eq!(params.forward, DVec3::Y);
}

// =============================================================================
// UV SEAMS
// =============================================================================

fn build_with_uv(shape: &Shape, uv: &UvSettings) -> Mesh {
    let mut mesh = Mesh::new();
    shape.clamped().build(&mut mesh, &Frame::default(), uv, false);
    mesh
}

/// Coincident vertices from adjoining pieces must carry the same UV.
/// Vertices selected by `skip` are left out. Returns the number of pairs
/// compared.
fn assert_uv_seams_match(mesh: &Mesh, skip: impl Fn(DVec3) -> bool) -> usize {
    let (vertices, uvs) = (mesh.vertices(), mesh.uvs());
    let mut pairs = 0;
    for i in 0..vertices.len() {
        if skip(vertices[i]) {
            continue;
        }
        for j in i + 1..vertices.len() {
            if vertices[i].distance(vertices[j]) < 1e-9 {
                assert_relative_eq!(uvs[i], uvs[j], epsilon = 1e-9);
                pairs += 1;
            }
        }
    }
    pairs
}

fn uv_modes() -> [UvSettings; 2] {
    let normalized = UvSettings::default();
    let real_world = UvSettings {
        real_world: true,
        tiling: DVec2::new(2.0, 0.5),
        ..Default::default()
    };
    [normalized, real_world]
}

#[test]
fn test_chamfer_cylinder_uv_continuous_across_fillets() {
    let p = ChamferCylinderParams::default();
    let shape = Shape::ChamferCylinder(p);
    for uv in uv_modes() {
        let mesh = build_with_uv(&shape, &uv);
        // Caps are planar-mapped; the u wrap lies on the +right half-plane
        let pairs = assert_uv_seams_match(&mesh, |v| {
            v.z < 1e-9 || v.z > p.height - 1e-9 || (v.y.abs() < 1e-9 && v.x > 0.0)
        });
        // Fillet/band rings at both ends, minus the wrap column
        assert!(pairs >= 2 * (p.sides as usize - 1), "only {pairs} seam pairs");
    }
}

#[test]
fn test_rect_tube_r_uv_continuous_around_walls() {
    let p = RectTubeRParams {
        height_segments: 3,
        ..Default::default()
    };
    let outer = RoundedRect::new(p.width, p.length, p.corner_radius, p.corner_segments);
    let inner = outer.inset(p.wall_thickness);
    let wrap = [outer.outline()[0], inner.outline()[0]];
    let shape = Shape::RectTubeR(p);

    for uv in uv_modes() {
        let mesh = build_with_uv(&shape, &uv);
        let pairs = assert_uv_seams_match(&mesh, |v| {
            v.z < 1e-9
                || v.z > p.height - 1e-9
                || wrap.iter().any(|w| w.distance(v.truncate()) < 1e-9)
        });
        // Seven joints per wall, two interior rows, two walls
        assert_eq!(pairs, 7 * 2 * 2);
    }
}
