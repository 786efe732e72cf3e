//! End-to-end scenarios (S1-S6) and cross-cutting testable properties,
//! exercised purely through the public API (`Facade`, `ForceRegistry`,
//! `ArrayMesh`) the way a host application would use this crate.

use std::collections::HashMap;

use vertex_model_forces::force::GlobalParams;
use vertex_model_forces::geometry::Pos2;
use vertex_model_forces::indices::VertexId;
use vertex_model_forces::mesh::{ArrayMesh, MeshView};
use vertex_model_forces::{Error, Facade, ForceRegistry};

fn unit_square() -> ArrayMesh {
    let vertices = vec![
        Pos2::new(0.0, 0.0),
        Pos2::new(1.0, 0.0),
        Pos2::new(1.0, 1.0),
        Pos2::new(0.0, 1.0),
    ];
    let faces = vec![vec![
        VertexId::new(0),
        VertexId::new(1),
        VertexId::new(2),
        VertexId::new(3),
    ]];
    ArrayMesh::from_polygons(vertices, faces).unwrap()
}

fn stretched_square() -> ArrayMesh {
    let vertices = vec![
        Pos2::new(0.0, 0.0),
        Pos2::new(2.0, 0.0),
        Pos2::new(2.0, 1.0),
        Pos2::new(0.0, 1.0),
    ];
    let faces = vec![vec![
        VertexId::new(0),
        VertexId::new(1),
        VertexId::new(2),
        VertexId::new(3),
    ]];
    ArrayMesh::from_polygons(vertices, faces).unwrap()
}

fn num(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn square_cell_at_rest_area_force_vanishes() {
    let mesh = unit_square();
    let mut facade = Facade::new(&mesh);
    facade.add_force("a", "area", false).unwrap();
    facade
        .set_global_params(
            "a",
            &num(&[("A0", 1.0), ("kappa", 1.0)]),
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
            false,
        )
        .unwrap();

    let forces = facade.compute_all_vertex_forces(false).unwrap();
    for f in &forces {
        assert!(f.norm() < 1e-12, "expected zero, got {f:?}");
    }
}

#[test]
fn stretched_square_sums_to_zero_and_pulls_inward() {
    let mesh = stretched_square();
    let mut facade = Facade::new(&mesh);
    facade.add_force("a", "area", false).unwrap();
    facade
        .set_global_params(
            "a",
            &num(&[("A0", 1.0), ("kappa", 1.0)]),
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
            false,
        )
        .unwrap();

    let forces = facade.compute_all_vertex_forces(false).unwrap();
    let sum: vertex_model_forces::geometry::Vec2 = forces.iter().sum();
    assert!(sum.norm() < 1e-12);

    let at_2_0 = forces[1];
    assert!(at_2_0.norm() > 0.0);
    assert!(at_2_0.x < 0.0, "expected inward (negative x) pull, got {at_2_0:?}");
}

#[test]
fn uniform_field_distributes_evenly_over_perimeter() {
    let mesh = unit_square();
    let mut facade = Facade::new(&mesh);
    facade
        .add_force("e", "force_efield_on_cell_boundary_uniform", false)
        .unwrap();
    facade
        .set_global_params(
            "e",
            &num(&[("E_x", 1.0), ("E_y", 0.0)]),
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
            false,
        )
        .unwrap();
    facade
        .set_face_params_facewise("e", &[0], &[num(&[("charge", 2.0)])], false)
        .unwrap();

    let forces = facade.compute_all_vertex_forces(false).unwrap();
    // Each vertex is shared by two unit-length half-edges, each
    // contributing 0.5 * sigma * E = 0.25 * (1, 0), for a total of
    // sigma * E = (charge / perimeter) * E = 0.5 * (1, 0).
    for f in &forces {
        assert!((f.x - 0.5).abs() < 1e-12, "{f:?}");
        assert!(f.y.abs() < 1e-12, "{f:?}");
    }
}

#[test]
fn pixelated_single_pixel_matches_uniform_equivalent() {
    let mesh = unit_square();
    let mut facade = Facade::new(&mesh);
    facade
        .add_force("pf", "force_efield_on_cell_boundary_pixelated", false)
        .unwrap();

    let global_num = num(&[
        ("origin_x", 0.0),
        ("origin_y", 0.0),
        ("spacing_x", 10.0),
        ("spacing_y", 10.0),
    ]);
    let int = HashMap::from([("ncells_x".to_string(), 1), ("ncells_y".to_string(), 1)]);
    let arr = HashMap::from([
        ("field_flattened_x".to_string(), vec![3.0]),
        ("field_flattened_y".to_string(), vec![4.0]),
    ]);
    facade
        .set_global_params("pf", &global_num, &HashMap::new(), &int, &arr, false)
        .unwrap();

    facade
        .set_face_params_facewise("pf", &[0], &[num(&[("charge", 1.0)])], false)
        .unwrap();

    let forces = facade.compute_all_vertex_forces(false).unwrap();

    let mut uniform = Facade::new(&mesh);
    uniform
        .add_force("e", "force_efield_on_cell_boundary_uniform", false)
        .unwrap();
    uniform
        .set_global_params(
            "e",
            &num(&[("E_x", 3.0), ("E_y", 4.0)]),
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
            false,
        )
        .unwrap();
    uniform
        .set_face_params_facewise("e", &[0], &[num(&[("charge", 1.0)])], false)
        .unwrap();
    let expected = uniform.compute_all_vertex_forces(false).unwrap();

    for (got, want) in forces.iter().zip(expected.iter()) {
        assert!((got - want).norm() < 1e-9, "got {got:?}, want {want:?}");
    }
}

#[test]
fn pixelated_edge_crossing_segment_lengths() {
    use vertex_model_forces::force::tracer::integrate_field_over_edge;
    use vertex_model_forces::geometry::{GridSpec, Vec2};
    use vertex_model_forces::indices::EdgeId;

    let grid = GridSpec::new(0.0, 0.0, 1.0, 1.0, 2, 1).unwrap();
    let field = vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
    let p0 = Pos2::new(0.25, 0.5);
    let p1 = Pos2::new(1.75, 0.5);

    let integral = integrate_field_over_edge(&grid, &field, p0, p1, EdgeId::new(0)).unwrap();
    assert!((integral.x - 0.75).abs() < 1e-9);
    assert!((integral.y - 0.75).abs() < 1e-9);
}

#[test]
fn registry_add_delete_readd_then_reject_duplicate() {
    let mut registry = ForceRegistry::new();
    registry.add_force("a", "area", false).unwrap();
    registry.add_force("p", "perimeter", false).unwrap();
    registry.delete_force("a", false).unwrap();
    registry.add_force("a", "area", false).unwrap();

    let err = registry.add_force("a", "area", false).unwrap_err();
    assert!(matches!(err, Error::DuplicateForceId(id) if id == "a"));
}

#[test]
fn no_forces_registered_gives_zero_everywhere() {
    let mesh = unit_square();
    let mut facade = Facade::new(&mesh);
    let forces = facade.compute_all_vertex_forces(false).unwrap();
    assert_eq!(forces.len(), mesh.num_vertices());
    assert!(forces.iter().all(|f| f.norm() == 0.0));
}

#[test]
fn combined_forces_equal_sum_of_individual_forces() {
    let mesh = stretched_square();
    let area_params = num(&[("A0", 1.0), ("kappa", 1.0)]);
    let perim_params = num(&[("P0", 4.0), ("gamma", 0.5)]);

    let mut area_only = Facade::new(&mesh);
    area_only.add_force("a", "area", false).unwrap();
    area_only
        .set_global_params("a", &area_params, &HashMap::new(), &HashMap::new(), &HashMap::new(), false)
        .unwrap();
    let area_forces = area_only.compute_all_vertex_forces(false).unwrap();

    let mut perim_only = Facade::new(&mesh);
    perim_only.add_force("p", "perimeter", false).unwrap();
    perim_only
        .set_global_params("p", &perim_params, &HashMap::new(), &HashMap::new(), &HashMap::new(), false)
        .unwrap();
    let perim_forces = perim_only.compute_all_vertex_forces(false).unwrap();

    let mut both = Facade::new(&mesh);
    both.add_force("a", "area", false).unwrap();
    both.add_force("p", "perimeter", false).unwrap();
    both
        .set_global_params("a", &area_params, &HashMap::new(), &HashMap::new(), &HashMap::new(), false)
        .unwrap();
    both
        .set_global_params("p", &perim_params, &HashMap::new(), &HashMap::new(), &HashMap::new(), false)
        .unwrap();
    let combined = both.compute_all_vertex_forces(false).unwrap();

    for ((c, a), p) in combined.iter().zip(&area_forces).zip(&perim_forces) {
        assert!((c - (a + p)).norm() < 1e-9, "c={c:?} a={a:?} p={p:?}");
    }
}

#[test]
fn area_and_perimeter_forces_are_translation_invariant() {
    let shift = vertex_model_forces::geometry::Vec2::new(5.0, -3.0);
    let base = stretched_square();
    let shifted_vertices: Vec<_> = (0..base.num_vertices())
        .map(|i| base.vertex_position(VertexId::new(i)) + shift)
        .collect();
    let shifted = ArrayMesh::from_polygons(
        shifted_vertices,
        vec![vec![
            VertexId::new(0),
            VertexId::new(1),
            VertexId::new(2),
            VertexId::new(3),
        ]],
    )
    .unwrap();

    for force_type in ["area", "perimeter"] {
        let params = if force_type == "area" {
            num(&[("A0", 1.0), ("kappa", 1.0)])
        } else {
            num(&[("P0", 4.0), ("gamma", 1.0)])
        };

        let mut f1 = Facade::new(&base);
        f1.add_force("f", force_type, false).unwrap();
        f1.set_global_params("f", &params, &HashMap::new(), &HashMap::new(), &HashMap::new(), false)
            .unwrap();
        let r1 = f1.compute_all_vertex_forces(false).unwrap();

        let mut f2 = Facade::new(&shifted);
        f2.add_force("f", force_type, false).unwrap();
        f2.set_global_params("f", &params, &HashMap::new(), &HashMap::new(), &HashMap::new(), false)
            .unwrap();
        let r2 = f2.compute_all_vertex_forces(false).unwrap();

        for (a, b) in r1.iter().zip(&r2) {
            assert!((a - b).norm() < 1e-9, "{force_type}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn internal_area_and_perimeter_forces_cancel() {
    let mesh = stretched_square();
    for (force_type, params) in [
        ("area", num(&[("A0", 1.0), ("kappa", 1.0)])),
        ("perimeter", num(&[("P0", 4.0), ("gamma", 1.0)])),
    ] {
        let mut facade = Facade::new(&mesh);
        facade.add_force("f", force_type, false).unwrap();
        facade
            .set_global_params("f", &params, &HashMap::new(), &HashMap::new(), &HashMap::new(), false)
            .unwrap();
        let forces = facade.compute_all_vertex_forces(false).unwrap();
        let sum: vertex_model_forces::geometry::Vec2 = forces.iter().sum();
        assert!(sum.norm() < 1e-9, "{force_type} forces did not cancel: {sum:?}");
    }
}

#[test]
fn uniform_field_integral_partitions_exactly_across_pixels() {
    use vertex_model_forces::force::tracer::integrate_field_over_edge;
    use vertex_model_forces::geometry::{GridSpec, Vec2};
    use vertex_model_forces::indices::EdgeId;

    let grid = GridSpec::new(0.0, 0.0, 1.0, 1.0, 5, 5).unwrap();
    let field = vec![Vec2::new(2.0, -1.0); grid.len()];
    let p0 = Pos2::new(0.3, 0.2);
    let p1 = Pos2::new(4.1, 3.7);

    let integral = integrate_field_over_edge(&grid, &field, p0, p1, EdgeId::new(0)).unwrap();
    let length = (p1 - p0).norm();
    // Uniform field: I(e) must equal E * length exactly (up to rounding),
    // which only holds if the tracer's per-pixel lengths partition the
    // whole edge with no gaps or double counting.
    let expected = Vec2::new(2.0, -1.0) * length;
    assert!((integral - expected).norm() / length < 1e-9);
}

#[test]
fn timers_accumulate_monotonically_across_computes() {
    let mesh = unit_square();
    let mut registry = ForceRegistry::new();
    registry.add_force("a", "area", false).unwrap();
    registry
        .set_global_params(
            "a",
            GlobalParams {
                num: &num(&[("A0", 0.5), ("kappa", 1.0)]),
                str: &HashMap::new(),
                int: &HashMap::new(),
                arr: &HashMap::new(),
            },
            false,
        )
        .unwrap();

    registry.start_force_compute_timers();
    let mut out = Vec::new();
    registry.compute_all_vertex_forces(&mesh, &mut out, false).unwrap();
    let t1 = registry.get_timers_millis();
    registry.compute_all_vertex_forces(&mesh, &mut out, false).unwrap();
    let t2 = registry.get_timers_millis();

    assert!(t1["a"] >= 0.0);
    assert!(t2["a"] >= t1["a"]);
}
