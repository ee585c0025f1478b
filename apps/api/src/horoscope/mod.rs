//! Daily reading pipeline: prompt construction, provider call, response
//! normalization, and the rendering-side view model.

pub mod generator;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod render;
pub mod view;
