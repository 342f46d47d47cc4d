mod engine;
mod engine_config;
mod engine_init;
mod input_controller;
mod visibility;

pub use engine::ViewportEngine;
pub use engine_config::ViewportEngineConfig;
pub use visibility::{ChannelFigure, ChannelVisibilityManager, VisibilityChange};
