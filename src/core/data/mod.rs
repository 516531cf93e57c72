pub mod affine_map;
pub mod canvas;
pub mod colour;
pub mod frame_buffer;
pub mod map_set;
pub mod point;
pub mod point_cloud;
