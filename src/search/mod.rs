pub mod bfs;
pub mod dijkstra;
pub mod path;

pub use bfs::breadth_first;
pub use dijkstra::shortest_path;
pub use path::{Route, Step};
