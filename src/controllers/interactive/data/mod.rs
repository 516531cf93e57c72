pub mod fractal_config;
