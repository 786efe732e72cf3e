//! Pixelated electric field on cell boundary: as the uniform field force,
//! but `E` is sampled from a rectilinear grid and each edge is traced
//! through it (`crate::force::tracer`) rather than treated as a single
//! straight contribution.

use std::collections::{HashMap, HashSet};

use crate::error::Error;
use crate::force::tracer::integrate_field_over_edge;
use crate::force::{reset_output, ForceContribution, GlobalParams, ParamStore};
use crate::geometry::{GridSpec, Vec2};
use crate::indices::EdgeId;
use crate::mesh::MeshView;

/// The type tag this force is registered under; used to identify it in
/// errors since the force itself does not know its registry id.
pub const FORCE_TYPE: &str = "force_efield_on_cell_boundary_pixelated";

#[derive(Clone, Debug, Default)]
pub struct PixelatedEfieldForce {
    params: ParamStore,
    grid: Option<GridSpec>,
    field: Option<Vec<Vec2>>,
}

impl PixelatedEfieldForce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds `self.grid`/`self.field` from the current contents of the
    /// numeric/int/array global param maps, if all required keys are
    /// present. Leaves the prior configuration untouched otherwise, so a
    /// caller setting params incrementally doesn't transiently invalidate
    /// an already-working configuration.
    fn try_reconfigure_grid(&mut self) -> Result<(), Error> {
        let num = &self.params.num;
        let int = &self.params.int;
        let arr = &self.params.arr;

        let (Some(&origin_x), Some(&origin_y), Some(&spacing_x), Some(&spacing_y)) = (
            num.get("origin_x"),
            num.get("origin_y"),
            num.get("spacing_x"),
            num.get("spacing_y"),
        ) else {
            return Ok(());
        };
        let (Some(&ncells_x), Some(&ncells_y)) = (int.get("ncells_x"), int.get("ncells_y")) else {
            return Ok(());
        };
        let (Some(field_x), Some(field_y)) =
            (arr.get("field_flattened_x"), arr.get("field_flattened_y"))
        else {
            return Ok(());
        };

        let grid = GridSpec::new(
            origin_x,
            origin_y,
            spacing_x,
            spacing_y,
            ncells_x.max(0) as usize,
            ncells_y.max(0) as usize,
        )?;

        if field_x.len() != grid.len() || field_y.len() != grid.len() {
            return Err(Error::FieldLengthMismatch {
                expected: grid.len(),
                got: field_x.len().min(field_y.len()),
            });
        }

        let field = field_x
            .iter()
            .zip(field_y.iter())
            .map(|(&x, &y)| Vec2::new(x, y))
            .collect();

        self.grid = Some(grid);
        self.field = Some(field);
        Ok(())
    }
}

impl ForceContribution for PixelatedEfieldForce {
    fn set_global_params(&mut self, params: GlobalParams<'_>) -> Result<(), Error> {
        self.params.merge_global(params);
        self.try_reconfigure_grid()
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

        let grid = self
            .grid
            .as_ref()
            .ok_or_else(|| Error::GridNotConfigured(FORCE_TYPE.to_string()))?;
        let field = self.field.as_ref().expect("grid and field are set together");

        let charged_faces: Vec<_> = mesh
            .face_ids()
            .filter(|f| self.params.per_face.contains_key(&(f.index() as i32)))
            .collect();
        if charged_faces.is_empty() {
            return Ok(());
        }

        // Collect the distinct edges incident to any charged face, then
        // compute each one's integral exactly once.
        let mut edge_ids: HashSet<EdgeId> = HashSet::new();
        for &face in &charged_faces {
            for &he in mesh.face_halfedges(face) {
                edge_ids.insert(mesh.halfedge_edge(he));
            }
        }

        let mut edge_cache: HashMap<EdgeId, Vec2> = HashMap::with_capacity(edge_ids.len());
        for edge in edge_ids {
            let he = mesh.edge_halfedge(edge);
            let (p0, p1) = mesh.halfedge_endpoints(he);
            let integral = integrate_field_over_edge(grid, field, p0, p1, edge)?;
            edge_cache.insert(edge, integral);
        }

        // Distribute each edge's integral onto its two endpoints.
        for face in charged_faces {
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
                let edge = mesh.halfedge_edge(he);
                let integral = edge_cache[&edge];
                let contribution = 0.5 * sigma * integral;
                let from = mesh.halfedge_from(he);
                let to = mesh.halfedge_to(he);
                out[from] += contribution;
                out[to] += contribution;
            }
        }

        Ok(())
    }
}
