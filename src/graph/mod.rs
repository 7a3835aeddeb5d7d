pub mod edge;
pub mod traits;

pub use edge::{Edge, WeightedEdge};
pub use traits::{Node, WeightedNode};
