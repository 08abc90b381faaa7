pub mod chart;
pub mod engine;
pub mod grouper;
pub mod loader;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Group, Record, RenderReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
