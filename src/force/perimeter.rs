//! Perimeter force: energy `½ Γ (P(f) − P0(f))²`, contributed via
//! `∂P/∂x_v` over the two half-edges incident to each vertex.

use std::collections::HashMap;

use crate::error::Error;
use crate::force::{reset_output, ForceContribution, GlobalParams, ParamStore};
use crate::geometry::Vec2;
use crate::mesh::MeshView;

#[derive(Clone, Debug, Default)]
pub struct PerimeterForce {
    params: ParamStore,
}

impl PerimeterForce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ForceContribution for PerimeterForce {
    fn set_global_params(&mut self, params: GlobalParams<'_>) -> Result<(), Error> {
        self.params.merge_global(params);
        Ok(())
    }

    fn set_face_params_facewise(
        &mut self,
        fids: &[i32],
        params: &[HashMap<String, f64>],
    ) -> Result<(), Error> {
        self.params.set_face_params_facewise(fids, params)
    }

    fn set_vertex_params_vertexwise(
        &mut self,
        vids: &[i32],
        params: &[HashMap<String, f64>],
    ) -> Result<(), Error> {
        self.params.set_vertex_params_vertexwise(vids, params)
    }

    fn compute_all_vertex_forces(
        &self,
        mesh: &dyn MeshView,
        out: &mut Vec<Vec2>,
    ) -> Result<(), Error> {
        reset_output(out, mesh.num_vertices());

        for face in mesh.face_ids() {
            let fid = face.index() as i32;
            let p0 = self.params.face_param(fid, "P0").unwrap_or(0.0);
            let gamma = self.params.face_param(fid, "gamma").unwrap_or(0.0);
            if gamma == 0.0 {
                continue;
            }

            let halfedges = mesh.face_halfedges(face);
            let positions = mesh.face_vertex_positions(face);
            let perimeter: f64 = crate::geometry::polygon_perimeter(&positions);
            // Force is -gradient of the energy gamma/2*(P-P0)^2: a
            // stretched face (P > P0) is pulled inward, matching the area
            // force's sign convention.
            let coeff = -gamma * (perimeter - p0);
            let n = positions.len();

            // For each vertex v, the two incident half-edges within this
            // face contribute unit vectors from the neighbouring vertex
            // toward v.
            for k in 0..n {
                let v = mesh.halfedge_from(halfedges[k]);
                let here = positions[k];
                let prev = positions[(k + n - 1) % n];
                let next = positions[(k + 1) % n];

                let mut grad = Vec2::zeros();
                let from_prev = here - prev;
                if from_prev.norm() > 0.0 {
                    grad += from_prev.normalize();
                }
                let from_next = here - next;
                if from_next.norm() > 0.0 {
                    grad += from_next.normalize();
                }
                out[v] += coeff * grad;
            }
        }

        Ok(())
    }
}
