pub mod bfs;
pub mod two_coloring;
