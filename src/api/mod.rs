mod axis_frame_builder;
mod axis_style;
mod axis_view;
mod axis_view_config;
mod interaction_controller;

pub use axis_style::AxisStyle;
pub use axis_view::AxisView;
pub use axis_view_config::{
    AXIS_VIEW_CONFIG_JSON_SCHEMA_V1, AxisViewConfig, AxisViewConfigJsonContractV1,
};
