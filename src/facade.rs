//! Thin façade exposed to the integrator/scripting host.
//!
//! Wraps a [`ForceRegistry`] and a borrowed [`MeshView`], translating the
//! host-facing operation set into registry calls. This is the only type
//! external callers (the excluded integrators/bindings) are expected to
//! touch.

use std::collections::HashMap;

use crate::error::Error;
use crate::force::GlobalParams;
use crate::geometry::Vec2;
use crate::mesh::MeshView;
use crate::registry::ForceRegistry;

pub struct Facade<'m> {
    mesh: &'m dyn MeshView,
    registry: ForceRegistry,
}

impl<'m> Facade<'m> {
    pub fn new(mesh: &'m dyn MeshView) -> Self {
        Self {
            mesh,
            registry: ForceRegistry::new(),
        }
    }

    pub fn add_force(&mut self, force_id: &str, force_type: &str, verbose: bool) -> Result<(), Error> {
        self.registry.add_force(force_id, force_type, verbose)
    }

    pub fn delete_force(&mut self, force_id: &str, verbose: bool) -> Result<(), Error> {
        self.registry.delete_force(force_id, verbose)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_global_params(
        &mut self,
        force_id: &str,
        num_params: &HashMap<String, f64>,
        str_params: &HashMap<String, String>,
        int_params: &HashMap<String, i32>,
        flt_array_params: &HashMap<String, Vec<f64>>,
        verbose: bool,
    ) -> Result<(), Error> {
        self.registry.set_global_params(
            force_id,
            GlobalParams {
                num: num_params,
                str: str_params,
                int: int_params,
                arr: flt_array_params,
            },
            verbose,
        )
    }

    pub fn set_face_params_facewise(
        &mut self,
        force_id: &str,
        face_ids: &[i32],
        params: &[HashMap<String, f64>],
        verbose: bool,
    ) -> Result<(), Error> {
        self.registry
            .set_face_params_facewise(force_id, face_ids, params, verbose)
    }

    pub fn set_vertex_params_vertexwise(
        &mut self,
        force_id: &str,
        vertex_ids: &[i32],
        params: &[HashMap<String, f64>],
        verbose: bool,
    ) -> Result<(), Error> {
        self.registry
            .set_vertex_params_vertexwise(force_id, vertex_ids, params, verbose)
    }

    /// Per-force per-vertex contributions, not summed.
    pub fn get_instantaneous_forces(
        &self,
        _verbose: bool,
    ) -> Result<HashMap<String, Vec<Vec2>>, Error> {
        self.registry.get_per_force_vertex_forces(self.mesh)
    }

    /// Summed per-vertex force, as an integrator would consume each tick.
    pub fn compute_all_vertex_forces(&mut self, verbose: bool) -> Result<Vec<Vec2>, Error> {
        let mut out = Vec::new();
        self.registry
            .compute_all_vertex_forces(self.mesh, &mut out, verbose)?;
        Ok(out)
    }

    pub fn start_force_compute_timers(&mut self, _verbose: bool) {
        self.registry.start_force_compute_timers();
    }

    pub fn get_force_compute_timers_millis(&self, _verbose: bool) -> HashMap<String, f64> {
        self.registry.get_timers_millis()
    }
}
