//! The force-contribution contract and the built-in forces.
//!
//! Every concrete force implements [`ForceContribution`]; the registry
//! (`crate::registry`) dispatches to them by string tag. A small sum-
//! type-friendly trait, rather than a heavy virtual-dispatch hierarchy.

use std::collections::HashMap;

use crate::error::Error;
use crate::geometry::Vec2;
use crate::mesh::MeshView;

pub mod area;
pub mod efield_pixelated;
pub mod efield_uniform;
pub mod param_store;
pub mod perimeter;
pub mod propulsion;
pub mod tracer;

pub use area::AreaForce;
pub use efield_pixelated::PixelatedEfieldForce;
pub use efield_uniform::UniformEfieldForce;
pub use param_store::ParamStore;
pub use perimeter::PerimeterForce;
pub use propulsion::ConstVertexPropulsionForce;

/// The four recognised global-parameter maps.
pub struct GlobalParams<'a> {
    pub num: &'a HashMap<String, f64>,
    pub str: &'a HashMap<String, String>,
    pub int: &'a HashMap<String, i32>,
    pub arr: &'a HashMap<String, Vec<f64>>,
}

/// Uniform contract every force implements.
pub trait ForceContribution {
    /// Merges `params` into this force's parameter store. Forces that
    /// reject unknown keys (rather than silently ignoring them) do so
    /// here and surface the rejection as an `Err`.
    fn set_global_params(&mut self, params: GlobalParams<'_>) -> Result<(), Error>;

    /// Precondition: `fids.len() == params.len()`.
    fn set_face_params_facewise(
        &mut self,
        fids: &[i32],
        params: &[HashMap<String, f64>],
    ) -> Result<(), Error>;

    /// Precondition: `vids.len() == params.len()`.
    fn set_vertex_params_vertexwise(
        &mut self,
        vids: &[i32],
        params: &[HashMap<String, f64>],
    ) -> Result<(), Error>;

    /// Resizes `out` to `mesh.num_vertices()`, zeroes it, and accumulates
    /// this force's contribution. Pure function of `mesh` and the
    /// parameters previously set; must not mutate the mesh.
    fn compute_all_vertex_forces(
        &self,
        mesh: &dyn MeshView,
        out: &mut Vec<Vec2>,
    ) -> Result<(), Error>;
}

/// Zeroes and resizes `out` to `n`, the shared precondition of
/// `compute_all_vertex_forces`. Shared by every built-in force so the
/// "resize and zero before accumulation" rule can't be forgotten in one
/// implementation and not another.
pub(crate) fn reset_output(out: &mut Vec<Vec2>, n: usize) {
    out.clear();
    out.resize(n, Vec2::zeros());
}
