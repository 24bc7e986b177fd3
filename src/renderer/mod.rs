//! WebGPU rendering module
//!
//! Game code draws into a `Canvas`; the recorded list is tessellated into
//! flat-colored triangles and uploaded once per frame.

pub mod draw;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use draw::{Canvas, DrawCommand, DrawList, TextAnchor, TextStyle, css_rgba};
pub use pipeline::RenderState;
