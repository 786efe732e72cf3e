//! Area force: energy `½ κ (A(f) − A0(f))²` per face, contributed
//! as the negative gradient of that energy with respect to each incident
//! vertex's position, so a face stretched beyond `A0` is pulled inward.

use std::collections::HashMap;

use crate::error::Error;
use crate::force::{reset_output, ForceContribution, GlobalParams, ParamStore};
use crate::geometry::Vec2;
use crate::mesh::MeshView;

/// Gradient of the signed polygon area `A(f) = ½ Σ (x_i y_{i+1} − x_{i+1}
/// y_i)` with respect to vertex `k`'s position: `∂A/∂x_k = ½ (y_{k+1} −
/// y_{k-1})`, `∂A/∂y_k = ½ (x_{k-1} − x_{k+1})`. `positions` is the face's
/// cyclic vertex list, `k` an index into it.
fn signed_area_gradient(positions: &[crate::geometry::Pos2], k: usize) -> Vec2 {
    let n = positions.len();
    let prev = positions[(k + n - 1) % n];
    let next = positions[(k + 1) % n];
    Vec2::new(0.5 * (next.y - prev.y), 0.5 * (prev.x - next.x))
}

#[derive(Clone, Debug, Default)]
pub struct AreaForce {
    params: ParamStore,
}

impl AreaForce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ForceContribution for AreaForce {
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
            let a0 = self.params.face_param(fid, "A0").unwrap_or(0.0);
            let kappa = self.params.face_param(fid, "kappa").unwrap_or(0.0);
            if kappa == 0.0 {
                continue;
            }

            let halfedges = mesh.face_halfedges(face);
            let positions = mesh.face_vertex_positions(face);
            let area = crate::geometry::polygon_signed_area(&positions);
            // Force is -gradient of the energy kappa/2*(A-A0)^2, pulling a
            // stretched face (area > A0) inward.
            let coeff = -kappa * (area - a0);

            for (k, &he) in halfedges.iter().enumerate() {
                let v = mesh.halfedge_from(he);
                out[v] += coeff * signed_area_gradient(&positions, k);
            }
        }

        Ok(())
    }
}
