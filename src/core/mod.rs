pub mod ticks;
pub mod time_mapper;
pub mod types;
pub mod view_state;

pub use ticks::{Marker, MarkerList, format_marker_label, generate_markers};
pub use time_mapper::TimeMapper;
pub use types::SurfaceSize;
pub use view_state::{
    DEFAULT_UNIT_COUNT, DEFAULT_UNIT_SECONDS, MAX_UNIT_SECONDS, MIN_UNIT_SECONDS, ViewState,
};
