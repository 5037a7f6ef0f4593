//! Vertex-weighted DAG engine.
//!
//! `IntGraph` stores vertices in an arena addressed by dense integer ids and
//! computes heaviest paths with a topological-order dynamic program.
//! `Graph` layers a key ↔ id bijection on top so callers can address
//! vertices by their own values.

mod indexed;
mod keyed;
mod types;

pub use indexed::{GraphError, IntGraph};
pub use keyed::{Graph, KeyedGraphError};
pub use types::{PathCostPair, VertexId};
