//! End-to-end properties of generated stroke outlines.

use agg_stroke::basics::{
    collect_vertices, get_orientation, is_end_poly, is_move_to, is_vertex, PointR, Real,
    VertexR, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_FLAGS_CCW,
    PATH_FLAGS_CLOSE, PATH_FLAGS_CW,
};
use agg_stroke::math::{calc_distance, calc_polygon_area, VERTEX_DIST_EPSILON};
use agg_stroke::path_storage::PathStorage;
use agg_stroke::vcgen_stroke::Status;
use agg_stroke::{ConvStroke, InnerJoin, LineCap, LineJoin, StrokeStyle, VcgenStroke};
use approx::assert_abs_diff_eq;

const SQUARE: [(Real, Real); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

fn stroker(style: StrokeStyle) -> VcgenStroke {
    VcgenStroke::with_style(&style).expect("valid style")
}

fn feed(gen: &mut VcgenStroke, points: &[(Real, Real)], closed: bool) {
    for (i, &(x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        };
        gen.add_vertex(x, y, cmd);
    }
    if closed {
        gen.add_vertex(0.0, 0.0, PATH_CMD_END_POLY | PATH_FLAGS_CLOSE);
    }
}

/// Split an outline into its contours, dropping the end-of-polygon markers.
fn contours(verts: &[VertexR]) -> Vec<Vec<PointR>> {
    let mut out: Vec<Vec<PointR>> = Vec::new();
    for v in verts {
        if is_move_to(v.cmd) {
            out.push(Vec::new());
        }
        if is_vertex(v.cmd) {
            if let Some(c) = out.last_mut() {
                c.push(PointR::new(v.x, v.y));
            }
        }
    }
    out
}

#[test]
fn closed_path_emits_ccw_then_cw_contour() {
    let mut gen = stroker(StrokeStyle::new(2.0));
    feed(&mut gen, &SQUARE, true);

    let verts = collect_vertices(&mut gen, 0);
    let markers: Vec<u32> = verts
        .iter()
        .filter(|v| is_end_poly(v.cmd))
        .map(|v| get_orientation(v.cmd))
        .collect();
    assert_eq!(markers, vec![PATH_FLAGS_CCW, PATH_FLAGS_CW]);
    assert_eq!(verts.iter().filter(|v| is_move_to(v.cmd)).count(), 2);
    assert!(is_end_poly(verts[verts.len() - 1].cmd));
}

#[test]
fn closed_contours_have_opposite_signed_area() {
    let mut gen = stroker(StrokeStyle::new(2.0));
    feed(&mut gen, &SQUARE, true);

    let parts = contours(&collect_vertices(&mut gen, 0));
    assert_eq!(parts.len(), 2);
    assert_abs_diff_eq!(calc_polygon_area(&parts[0]), 144.0, epsilon = 1e-3);
    assert_abs_diff_eq!(calc_polygon_area(&parts[1]), -64.0, epsilon = 1e-3);
}

#[test]
fn open_path_is_one_contour_without_markers() {
    for cap in [LineCap::Butt, LineCap::Square, LineCap::Round] {
        let mut gen = stroker(StrokeStyle::new(4.0).with_line_cap(cap));
        feed(&mut gen, &[(0.0, 0.0), (20.0, 0.0), (20.0, 20.0)], false);

        let verts = collect_vertices(&mut gen, 0);
        assert!(!verts.is_empty(), "{cap:?}");
        assert!(is_move_to(verts[0].cmd));
        assert_eq!(verts.iter().filter(|v| is_move_to(v.cmd)).count(), 1);
        assert!(verts.iter().all(|v| !is_end_poly(v.cmd)));
    }
}

#[test]
fn square_cap_extends_past_endpoints() {
    let mut gen = stroker(StrokeStyle::new(2.0).with_line_cap(LineCap::Square));
    feed(&mut gen, &[(0.0, 0.0), (10.0, 0.0)], false);

    let verts = collect_vertices(&mut gen, 0);
    assert_eq!(verts.len(), 4);
    let min_x = verts.iter().map(|v| v.x).fold(Real::MAX, Real::min);
    let max_x = verts.iter().map(|v| v.x).fold(Real::MIN, Real::max);
    assert_abs_diff_eq!(min_x, -1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(max_x, 11.0, epsilon = 1e-4);
}

#[test]
fn round_cap_stays_within_chord_error() {
    let style = StrokeStyle::new(20.0).with_line_cap(LineCap::Round);
    let tolerance = style.max_chord_error();
    let mut gen = stroker(style);
    feed(&mut gen, &[(0.0, 0.0), (100.0, 0.0)], false);

    let verts = collect_vertices(&mut gen, 0);
    let (first_cap, second_cap) = verts.split_at(verts.len() / 2);
    for (cap, cx) in [(first_cap, 0.0), (second_cap, 100.0)] {
        assert!(cap.len() > 2);
        for v in cap {
            assert_abs_diff_eq!(calc_distance(cx, 0.0, v.x, v.y), 10.0, epsilon = 1e-3);
        }
        for pair in cap.windows(2) {
            let mx = (pair[0].x + pair[1].x) * 0.5;
            let my = (pair[0].y + pair[1].y) * 0.5;
            let sag = 10.0 - calc_distance(cx, 0.0, mx, my);
            assert!(sag <= tolerance + 1e-3, "sag {sag} exceeds {tolerance}");
        }
    }
}

#[test]
fn finer_approximation_adds_arc_vertices() {
    let count = |scale: Real| {
        let style = StrokeStyle::new(20.0)
            .with_line_cap(LineCap::Round)
            .with_approximation_scale(scale);
        let mut gen = stroker(style);
        feed(&mut gen, &[(0.0, 0.0), (100.0, 0.0)], false);
        collect_vertices(&mut gen, 0).len()
    };
    assert!(count(4.0) > count(1.0));
}

#[test]
fn coincident_vertices_are_merged() {
    let mut gen = stroker(StrokeStyle::new(2.0));
    feed(
        &mut gen,
        &[
            (0.0, 0.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 0.000_001),
            (10.0, 10.0),
        ],
        false,
    );
    gen.rewind();
    assert_eq!(gen.source_vertices().size(), 3);
}

#[test]
fn buffer_distances_match_geometry() {
    for closed in [false, true] {
        let mut gen = stroker(StrokeStyle::new(2.0));
        feed(&mut gen, &[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (1.0, 6.0)], closed);
        gen.rewind();

        let buf = gen.finalized_vertices().as_slice();
        let n = buf.len();
        assert_eq!(n, 4);
        for i in 0..n - 1 {
            assert!(buf[i].dist > VERTEX_DIST_EPSILON);
            assert_abs_diff_eq!(buf[i].dist, buf[i].distance_to(&buf[i + 1]), epsilon = 1e-5);
        }
        if closed {
            assert_abs_diff_eq!(buf[n - 1].dist, buf[n - 1].distance_to(&buf[0]), epsilon = 1e-5);
        } else {
            assert_eq!(buf[n - 1].dist, 0.0);
        }
    }
}

#[test]
fn too_few_vertices_produce_nothing() {
    let mut open = stroker(StrokeStyle::new(2.0));
    feed(&mut open, &[(1.0, 1.0), (1.0, 1.0)], false);
    assert!(collect_vertices(&mut open, 0).is_empty());
    assert_eq!(open.status(), Status::Ready);

    let mut closed = stroker(StrokeStyle::new(2.0));
    feed(&mut closed, &[(0.0, 0.0), (5.0, 0.0), (0.0, 0.0)], true);
    assert!(collect_vertices(&mut closed, 0).is_empty());
}

#[test]
fn repeated_rewind_replays_identical_output() {
    let mut gen = stroker(
        StrokeStyle::new(6.0)
            .with_line_join(LineJoin::Round)
            .with_inner_join(InnerJoin::Round)
            .with_line_cap(LineCap::Round),
    );
    feed(&mut gen, &[(0.0, 0.0), (40.0, 0.0), (40.0, 30.0), (10.0, 35.0)], false);

    let first = collect_vertices(&mut gen, 0);
    let second = collect_vertices(&mut gen, 0);
    assert_eq!(first, second);
}

#[test]
fn bevel_join_counts_on_square() {
    let mut gen = stroker(StrokeStyle::new(2.0).with_line_join(LineJoin::Bevel));
    feed(&mut gen, &SQUARE, true);

    let parts = contours(&collect_vertices(&mut gen, 0));
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].len(), 8);
    assert_eq!(parts[1].len(), 4);
}

#[test]
fn sharp_miter_falls_back_to_bevel() {
    let spike = [(0.0, 0.0), (50.0, 0.0), (0.0, 2.0)];

    let mut miter = stroker(StrokeStyle::new(4.0));
    feed(&mut miter, &spike, false);
    let mut bevel = stroker(StrokeStyle::new(4.0).with_line_join(LineJoin::Bevel));
    feed(&mut bevel, &spike, false);

    assert_eq!(
        collect_vertices(&mut miter, 0),
        collect_vertices(&mut bevel, 0)
    );
}

#[test]
fn negative_width_swaps_sides() {
    let mut gen = stroker(StrokeStyle::new(-2.0));
    feed(&mut gen, &[(0.0, 0.0), (10.0, 0.0)], false);

    let verts = collect_vertices(&mut gen, 0);
    assert_eq!(verts.len(), 4);
    assert_abs_diff_eq!(verts[0].y, -1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(verts[1].y, 1.0, epsilon = 1e-5);
}

#[test]
fn shorten_trims_from_the_end() {
    let mut gen = stroker(StrokeStyle::new(2.0).with_shorten(12.0));
    feed(&mut gen, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], false);

    let verts = collect_vertices(&mut gen, 0);
    assert_eq!(verts.len(), 4);
    let max_x = verts.iter().map(|v| v.x).fold(Real::MIN, Real::max);
    assert_abs_diff_eq!(max_x, 8.0, epsilon = 1e-4);
    assert!(verts.iter().all(|v| v.y.abs() <= 1.0 + 1e-4));
}

#[test]
fn conv_stroke_over_mixed_sub_paths() {
    let mut path = PathStorage::new();
    path.concat_poly(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0], true);
    path.concat_poly(&[20.0, 0.0, 30.0, 0.0], false);

    let mut stroke = ConvStroke::new(&mut path);
    stroke.set_width(2.0);
    let verts = collect_vertices(&mut stroke, 0);

    assert_eq!(verts.len(), 14);
    assert_eq!(verts.iter().filter(|v| is_move_to(v.cmd)).count(), 3);
    assert_eq!(verts.iter().filter(|v| is_end_poly(v.cmd)).count(), 2);
    assert!(verts[10..].iter().all(|v| v.x >= 20.0 - 1e-4));
}

#[test]
fn overlong_shorten_keeps_minimal_two_point_path() {
    let mut gen = stroker(StrokeStyle::new(2.0).with_shorten(15.0));
    feed(&mut gen, &[(0.0, 0.0), (10.0, 0.0)], false);

    let verts = collect_vertices(&mut gen, 0);
    let path = gen.finalized_vertices();
    assert_eq!(path.size(), 2);
    assert!(path[0].dist > VERTEX_DIST_EPSILON);
    assert_eq!(verts.len(), 4);
    assert!(verts.iter().all(|v| v.x >= 0.0 && v.x < 1e-3));
}
