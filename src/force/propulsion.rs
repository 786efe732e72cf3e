//! Constant vertex propulsion: a fixed force vector per vertex, added
//! directly with no face dependence.

use std::collections::HashMap;

use crate::error::Error;
use crate::force::{reset_output, ForceContribution, GlobalParams, ParamStore};
use crate::geometry::Vec2;
use crate::mesh::MeshView;

#[derive(Clone, Debug, Default)]
pub struct ConstVertexPropulsionForce {
    params: ParamStore,
}

impl ConstVertexPropulsionForce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ForceContribution for ConstVertexPropulsionForce {
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

        for v in mesh.vertex_ids() {
            let vid = v.index() as i32;
            let fx = self.params.vertex_param(vid, "fx").unwrap_or(0.0);
            let fy = self.params.vertex_param(vid, "fy").unwrap_or(0.0);
            out[v] = Vec2::new(fx, fy);
        }

        Ok(())
    }
}
