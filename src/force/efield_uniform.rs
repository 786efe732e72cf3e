//! Uniform electric field on cell boundary: force on a face is
//! `Q(f) · E`, distributed over the perimeter proportionally to each
//! half-edge's length, split equally between its endpoints.

use std::collections::HashMap;

use crate::error::Error;
use crate::force::{reset_output, ForceContribution, GlobalParams, ParamStore};
use crate::geometry::Vec2;
use crate::mesh::MeshView;

#[derive(Clone, Debug, Default)]
pub struct UniformEfieldForce {
    params: ParamStore,
}

impl UniformEfieldForce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ForceContribution for UniformEfieldForce {
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

        let e_x = self.params.num.get("E_x").copied().unwrap_or(0.0);
        let e_y = self.params.num.get("E_y").copied().unwrap_or(0.0);
        let field = Vec2::new(e_x, e_y);

        for face in mesh.face_ids() {
            let fid = face.index() as i32;
            let charge = self.params.face_param(fid, "charge").unwrap_or(0.0);
            if charge == 0.0 {
                continue;
            }

            let perimeter = mesh.face_perimeter(face);
            if perimeter <= 0.0 {
                continue;
            }
            let sigma = charge / perimeter;

            for &he in mesh.face_halfedges(face) {
                let len = mesh.halfedge_length(he);
                let contribution = 0.5 * sigma * len * field;
                let from = mesh.halfedge_from(he);
                let to = mesh.halfedge_to(he);
                out[from] += contribution;
                out[to] += contribution;
            }
        }

        Ok(())
    }
}
