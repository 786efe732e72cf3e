//! Force-compute pipeline and pixelated-field edge tracer for a 2D
//! vertex-model tissue mesh.
//!
//! The half-edge mesh itself is an external collaborator: this crate only
//! specifies the operations the core needs from it ([`mesh::MeshView`])
//! and ships one concrete implementation ([`mesh::ArrayMesh`]) so the
//! force pipeline can be built and tested standalone.

pub mod error;
pub mod facade;
pub mod force;
pub mod geometry;
pub mod indices;
pub mod mesh;
pub mod registry;

pub use error::Error;
pub use facade::Facade;
pub use registry::ForceRegistry;
