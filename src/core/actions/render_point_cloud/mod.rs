pub mod ports;
pub mod render_point_cloud;
