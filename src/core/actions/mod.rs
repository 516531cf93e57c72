pub mod generate_point_cloud;
pub mod render_point_cloud;
