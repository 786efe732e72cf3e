//! The private parameter store every force holds.
//!
//! Ids in the per-face/per-vertex maps are caller-supplied `i32`s, not
//! validated against the mesh — an unknown id simply never matches a
//! face — so lookups key on the raw `i32`, with the caller (the concrete
//! force) responsible for casting a `FaceId`/`VertexId` to `i32` when
//! consulting the map during a compute.

use std::collections::HashMap;

use crate::error::Error;
use crate::force::GlobalParams;

/// Four global maps plus optional per-face/per-vertex overrides.
#[derive(Clone, Debug, Default)]
pub struct ParamStore {
    pub num: HashMap<String, f64>,
    pub str: HashMap<String, String>,
    pub int: HashMap<String, i32>,
    pub arr: HashMap<String, Vec<f64>>,
    pub per_face: HashMap<i32, HashMap<String, f64>>,
    pub per_vertex: HashMap<i32, HashMap<String, f64>>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the four global maps into this store: later values
    /// overwrite earlier ones for the same key.
    pub fn merge_global(&mut self, params: GlobalParams<'_>) {
        self.num.extend(params.num.iter().map(|(k, v)| (k.clone(), *v)));
        self.str.extend(params.str.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.int.extend(params.int.iter().map(|(k, v)| (k.clone(), *v)));
        self.arr.extend(params.arr.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Precondition: `fids.len() == params.len()`; writes (overwriting) a
    /// per-face record for each id.
    pub fn set_face_params_facewise(
        &mut self,
        fids: &[i32],
        params: &[HashMap<String, f64>],
    ) -> Result<(), Error> {
        if fids.len() != params.len() {
            return Err(Error::ParamLengthMismatch {
                op: "set_face_params_facewise",
                expected: fids.len(),
                got: params.len(),
            });
        }
        for (fid, p) in fids.iter().zip(params) {
            self.per_face.insert(*fid, p.clone());
        }
        Ok(())
    }

    /// Symmetric to [`Self::set_face_params_facewise`], for vertices.
    pub fn set_vertex_params_vertexwise(
        &mut self,
        vids: &[i32],
        params: &[HashMap<String, f64>],
    ) -> Result<(), Error> {
        if vids.len() != params.len() {
            return Err(Error::ParamLengthMismatch {
                op: "set_vertex_params_vertexwise",
                expected: vids.len(),
                got: params.len(),
            });
        }
        for (vid, p) in vids.iter().zip(params) {
            self.per_vertex.insert(*vid, p.clone());
        }
        Ok(())
    }

    /// A per-face override for `key`, falling back to the global numeric
    /// scalar of the same name.
    pub fn face_param(&self, face_id: i32, key: &str) -> Option<f64> {
        self.per_face
            .get(&face_id)
            .and_then(|m| m.get(key))
            .copied()
            .or_else(|| self.num.get(key).copied())
    }

    /// A per-vertex override for `key`; no global fallback (const-vertex
    /// propulsion has no meaningful global default for a per-vertex
    /// direction).
    pub fn vertex_param(&self, vertex_id: i32, key: &str) -> Option<f64> {
        self.per_vertex.get(&vertex_id).and_then(|m| m.get(key)).copied()
    }
}
