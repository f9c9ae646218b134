// Library crate: the testable editor core. Scene store with undo/redo,
// CSG build layer, joint engine, overlap preview, and the headless command
// surface. Rendering and windowing live with the host, behind the data
// types in `render`.

pub mod build;
pub mod command;
pub mod csg;
pub mod fixtures;
pub mod harness;
pub mod preview;
pub mod render;
pub mod state;
pub mod validation;
