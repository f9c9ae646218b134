//! Data types crossing the render boundary.
//!
//! The core hands the host renderer plain mesh buffers and bounding boxes;
//! it never owns a camera, a window, or a draw call.

pub mod aabb;
pub mod mesh;
