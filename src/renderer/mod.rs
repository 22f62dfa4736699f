//! WebGPU rendering module
//!
//! Turns a game snapshot into flat-colored triangles in board units and
//! draws them with a single vertex-color pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
