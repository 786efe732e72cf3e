//! Read-only mesh access adapter.
//!
//! The half-edge mesh itself is an external collaborator: this module
//! only specifies the operations the force-compute core requires of it
//! (the [`MeshView`] trait) plus one concrete, dependency-free
//! implementation ([`array_mesh::ArrayMesh`]) so the core can be built and
//! tested without a real simulation host.

use crate::geometry::{polygon_area, polygon_perimeter, Pos2};
use crate::indices::{EdgeId, FaceId, HalfEdgeId, VertexId};

pub mod array_mesh;
pub use array_mesh::ArrayMesh;

/// Read-only access to vertices, edges, faces and half-edges, and the
/// circulators the core needs to walk them.
///
/// Implementations own or borrow the actual mesh storage; the core never
/// mutates it through this trait. Identifiers are dense and stable for
/// the lifetime of a single `compute_all_vertex_forces` call.
pub trait MeshView {
    fn num_vertices(&self) -> usize;
    fn num_faces(&self) -> usize;

    /// Position of a vertex. Panics if `v` is out of range — callers are
    /// expected to only use ids obtained from this same mesh.
    fn vertex_position(&self, v: VertexId) -> Pos2;

    /// The half-edges bounding `face`, in cyclic order.
    fn face_halfedges(&self, face: FaceId) -> &[HalfEdgeId];

    fn face_ids(&self) -> Box<dyn Iterator<Item = FaceId> + '_>;
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn halfedge_from(&self, he: HalfEdgeId) -> VertexId;
    fn halfedge_to(&self, he: HalfEdgeId) -> VertexId;
    fn halfedge_edge(&self, he: HalfEdgeId) -> EdgeId;

    /// One of the edge's two half-edges.
    fn edge_halfedge(&self, edge: EdgeId) -> HalfEdgeId;

    /// Vertex positions of a face, in the same cyclic order as
    /// [`MeshView::face_halfedges`].
    fn face_vertex_positions(&self, face: FaceId) -> Vec<Pos2> {
        self.face_halfedges(face)
            .iter()
            .map(|&he| self.vertex_position(self.halfedge_from(he)))
            .collect()
    }

    /// Unsigned polygon area of a face. The area force itself uses the
    /// signed shoelace sum directly, since its gradient depends on the
    /// vertex winding; this is a convenience for callers that only care
    /// about magnitude.
    fn face_area(&self, face: FaceId) -> f64 {
        polygon_area(&self.face_vertex_positions(face))
    }

    /// Sum of the Euclidean lengths of a face's bounding edges.
    fn face_perimeter(&self, face: FaceId) -> f64 {
        polygon_perimeter(&self.face_vertex_positions(face))
    }

    fn halfedge_endpoints(&self, he: HalfEdgeId) -> (Pos2, Pos2) {
        (
            self.vertex_position(self.halfedge_from(he)),
            self.vertex_position(self.halfedge_to(he)),
        )
    }

    fn halfedge_length(&self, he: HalfEdgeId) -> f64 {
        let (from, to) = self.halfedge_endpoints(he);
        (to - from).norm()
    }
}

