//! Force registry / compute orchestrator.
//!
//! Owns the `force_id -> ForceContribution` map and, optionally, the per-
//! force timer table. Dispatches to concrete forces through a small
//! built-in factory keyed by the recognised force-type strings.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::error::Error;
use crate::force::{
    AreaForce, ConstVertexPropulsionForce, ForceContribution, GlobalParams, PerimeterForce,
    PixelatedEfieldForce, UniformEfieldForce,
};
use crate::geometry::Vec2;
use crate::mesh::MeshView;

/// The closed set of recognised force types.
fn build_force(force_type: &str) -> Result<Box<dyn ForceContribution>, Error> {
    match force_type {
        "area" => Ok(Box::new(AreaForce::new())),
        "perimeter" => Ok(Box::new(PerimeterForce::new())),
        "const_vertex_propulsion" => Ok(Box::new(ConstVertexPropulsionForce::new())),
        "force_efield_on_cell_boundary_uniform" => Ok(Box::new(UniformEfieldForce::new())),
        "force_efield_on_cell_boundary_pixelated" => Ok(Box::new(PixelatedEfieldForce::new())),
        other => Err(Error::UnknownForceType(other.to_string())),
    }
}

/// A `Vec` of `(force_id, force)` pairs preserves insertion order without
/// requiring an auxiliary index map; registries in this crate are small
/// enough that a linear `force_id` lookup is not a concern.
#[derive(Default)]
pub struct ForceRegistry {
    forces: Vec<(String, Box<dyn ForceContribution>)>,
    timers: Option<HashMap<String, Duration>>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, force_id: &str) -> Option<usize> {
        self.forces.iter().position(|(id, _)| id == force_id)
    }

    /// Registers a new force under `force_id`, built from `force_type`.
    pub fn add_force(&mut self, force_id: &str, force_type: &str, verbose: bool) -> Result<(), Error> {
        if self.position(force_id).is_some() {
            return Err(Error::DuplicateForceId(force_id.to_string()));
        }
        let force = build_force(force_type)?;
        if verbose {
            debug!(force_id, force_type, "registering force");
        }
        self.forces.push((force_id.to_string(), force));
        Ok(())
    }

    /// Removes a previously registered force.
    pub fn delete_force(&mut self, force_id: &str, verbose: bool) -> Result<(), Error> {
        let idx = self
            .position(force_id)
            .ok_or_else(|| Error::UnknownForceId(force_id.to_string()))?;
        self.forces.remove(idx);
        if verbose {
            debug!(force_id, "removed force");
        }
        Ok(())
    }

    fn force_mut(&mut self, force_id: &str) -> Result<&mut Box<dyn ForceContribution>, Error> {
        let idx = self
            .position(force_id)
            .ok_or_else(|| Error::UnknownForceId(force_id.to_string()))?;
        Ok(&mut self.forces[idx].1)
    }

    pub fn set_global_params(
        &mut self,
        force_id: &str,
        params: GlobalParams<'_>,
        verbose: bool,
    ) -> Result<(), Error> {
        if verbose {
            trace!(force_id, "set_global_params");
        }
        self.force_mut(force_id)?.set_global_params(params)
    }

    pub fn set_face_params_facewise(
        &mut self,
        force_id: &str,
        fids: &[i32],
        params: &[HashMap<String, f64>],
        verbose: bool,
    ) -> Result<(), Error> {
        if verbose {
            trace!(force_id, n = fids.len(), "set_face_params_facewise");
        }
        self.force_mut(force_id)?.set_face_params_facewise(fids, params)
    }

    pub fn set_vertex_params_vertexwise(
        &mut self,
        force_id: &str,
        vids: &[i32],
        params: &[HashMap<String, f64>],
        verbose: bool,
    ) -> Result<(), Error> {
        if verbose {
            trace!(force_id, n = vids.len(), "set_vertex_params_vertexwise");
        }
        self.force_mut(force_id)?.set_vertex_params_vertexwise(vids, params)
    }

    /// Resizes `out`, sums every registered force's contribution into it,
    /// optionally timing each.
    pub fn compute_all_vertex_forces(
        &mut self,
        mesh: &dyn MeshView,
        out: &mut Vec<Vec2>,
        verbose: bool,
    ) -> Result<(), Error> {
        out.clear();
        out.resize(mesh.num_vertices(), Vec2::zeros());

        let mut scratch = Vec::new();
        for (force_id, force) in &self.forces {
            if verbose {
                trace!(force_id = force_id.as_str(), "computing force");
            }
            let start = self.timers.is_some().then(Instant::now);
            force.compute_all_vertex_forces(mesh, &mut scratch)?;
            if let Some(start) = start {
                let elapsed = start.elapsed();
                if let Some(timers) = &mut self.timers {
                    if let Some(acc) = timers.get_mut(force_id) {
                        *acc += elapsed;
                    }
                }
            }
            for (o, s) in out.iter_mut().zip(&scratch) {
                *o += *s;
            }
        }
        Ok(())
    }

    /// Each force's contribution in isolation, unsummed.
    pub fn get_per_force_vertex_forces(
        &self,
        mesh: &dyn MeshView,
    ) -> Result<HashMap<String, Vec<Vec2>>, Error> {
        let mut result = HashMap::with_capacity(self.forces.len());
        for (force_id, force) in &self.forces {
            let mut out = Vec::new();
            force.compute_all_vertex_forces(mesh, &mut out)?;
            result.insert(force_id.clone(), out);
        }
        Ok(result)
    }

    /// Creates or clears the timer table and seeds a zero entry for every
    /// currently registered force.
    pub fn start_force_compute_timers(&mut self) {
        let mut timers = HashMap::with_capacity(self.forces.len());
        for (force_id, _) in &self.forces {
            timers.insert(force_id.clone(), Duration::ZERO);
        }
        self.timers = Some(timers);
    }

    /// Returns accumulated per-force wall-clock time, in milliseconds.
    pub fn get_timers_millis(&self) -> HashMap<String, f64> {
        match &self.timers {
            Some(timers) => timers
                .iter()
                .map(|(id, d)| (id.clone(), d.as_secs_f64() * 1e3))
                .collect(),
            None => {
                warn!("get_timers_millis called with no timer table started");
                HashMap::new()
            }
        }
    }
}
