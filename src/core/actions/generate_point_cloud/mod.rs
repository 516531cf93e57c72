pub mod generate_point_cloud;
pub mod selection_table;
