//! Type-safe newtype indices used as stable identifiers for mesh elements.
//!
//! Dense and stable for the lifetime of a force computation, following the
//! indexing style used throughout this crate's mesh types: a `pub usize`
//! newtype plus `Index`/`IndexMut` on the `Vec` it addresses, rather than
//! raw `usize` everywhere.

use std::fmt;
use std::ops::{Index, IndexMut};

macro_rules! mesh_index {
    ($name:ident) => {
        #[derive(
            Copy,
            Clone,
            Debug,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub usize);

        impl $name {
            #[inline(always)]
            pub fn new(idx: usize) -> Self {
                Self(idx)
            }

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl<T> Index<$name> for Vec<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0]
            }
        }

        impl<T> IndexMut<$name> for Vec<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: $name) -> &mut Self::Output {
                &mut self[index.0]
            }
        }
    };
}

mesh_index!(VertexId);
mesh_index!(EdgeId);
mesh_index!(HalfEdgeId);
mesh_index!(FaceId);
