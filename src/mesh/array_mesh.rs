//! A minimal array-backed [`MeshView`] implementation, built from ordered
//! polygon vertex lists.
//!
//! Stores vertices array-of-structs style, with a half-edge layout
//! (`origin`/`twin`/`next`/`face`) typical of a DCEL. Unlike a full mesh
//! editor this type is construct-once and read-only: it exists so the
//! force-compute core and its tests have a concrete mesh to run against,
//! not to support topology edits.

use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Error;
use crate::geometry::Pos2;
use crate::indices::{EdgeId, FaceId, HalfEdgeId, VertexId};
use crate::mesh::MeshView;

#[derive(Clone, Debug)]
struct HalfEdge {
    from: VertexId,
    to: VertexId,
    face: FaceId,
    edge: EdgeId,
}

/// A fixed mesh assembled from a list of faces, each given as an ordered,
/// counter-clockwise list of vertex ids.
#[derive(Clone, Debug)]
pub struct ArrayMesh {
    vertices: Vec<Pos2>,
    halfedges: Vec<HalfEdge>,
    face_halfedges: Vec<Vec<HalfEdgeId>>,
    edge_halfedge: Vec<HalfEdgeId>,
}

impl ArrayMesh {
    /// Builds a mesh from vertex positions and a list of faces, each a
    /// cyclic sequence of vertex ids into `vertices`.
    ///
    /// Each undirected edge may be shared by at most two half-edges
    /// (manifold); edges used by only one face become boundary edges with
    /// no twin.
    pub fn from_polygons(
        vertices: Vec<Pos2>,
        faces: Vec<Vec<VertexId>>,
    ) -> Result<Self, Error> {
        for v in faces.iter().flatten() {
            if v.index() >= vertices.len() {
                return Err(Error::OutOfBoundsVertex {
                    index: v.index(),
                    num_vertices: vertices.len(),
                });
            }
        }

        let mut halfedges = Vec::new();
        let mut face_halfedges = Vec::with_capacity(faces.len());
        // undirected (min, max) vertex pair -> half-edge ids seen so far
        let mut pair_halfedges: HashMap<(VertexId, VertexId), Vec<HalfEdgeId>> = HashMap::new();

        for (face_idx, poly) in faces.iter().enumerate() {
            if poly.len() < 3 {
                return Err(Error::DegenerateFace(poly.len()));
            }
            let face = FaceId::new(face_idx);
            let n = poly.len();
            let mut this_face_halfedges = Vec::with_capacity(n);

            for (from, to) in poly.iter().copied().circular_tuple_windows() {
                let he_id = HalfEdgeId::new(halfedges.len());
                halfedges.push(HalfEdge {
                    from,
                    to,
                    face,
                    // patched below once we know the edge id
                    edge: EdgeId::new(0),
                });
                this_face_halfedges.push(he_id);

                let key = if from.index() <= to.index() {
                    (from, to)
                } else {
                    (to, from)
                };
                let bucket = pair_halfedges.entry(key).or_default();
                if bucket.len() >= 2 {
                    return Err(Error::NonManifoldEdge { from, to });
                }
                bucket.push(he_id);
            }

            face_halfedges.push(this_face_halfedges);
        }

        // Assign a shared EdgeId to each undirected pair and one
        // representative half-edge per edge.
        let mut edge_halfedge = Vec::with_capacity(pair_halfedges.len());
        for (edge_idx, (_key, bucket)) in pair_halfedges.iter().enumerate() {
            let edge_id = EdgeId::new(edge_idx);
            for &he in bucket {
                halfedges[he.index()].edge = edge_id;
            }
            edge_halfedge.push(bucket[0]);
        }

        Ok(Self {
            vertices,
            halfedges,
            face_halfedges,
            edge_halfedge,
        })
    }
}

impl MeshView for ArrayMesh {
    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_faces(&self) -> usize {
        self.face_halfedges.len()
    }

    fn vertex_position(&self, v: VertexId) -> Pos2 {
        self.vertices[v.index()]
    }

    fn face_halfedges(&self, face: FaceId) -> &[HalfEdgeId] {
        &self.face_halfedges[face.index()]
    }

    fn face_ids(&self) -> Box<dyn Iterator<Item = FaceId> + '_> {
        Box::new((0..self.face_halfedges.len()).map(FaceId::new))
    }

    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertices.len()).map(VertexId::new))
    }

    fn halfedge_from(&self, he: HalfEdgeId) -> VertexId {
        self.halfedges[he.index()].from
    }

    fn halfedge_to(&self, he: HalfEdgeId) -> VertexId {
        self.halfedges[he.index()].to
    }

    fn halfedge_edge(&self, he: HalfEdgeId) -> EdgeId {
        self.halfedges[he.index()].edge
    }

    fn edge_halfedge(&self, edge: EdgeId) -> HalfEdgeId {
        self.edge_halfedge[edge.index()]
    }
}
