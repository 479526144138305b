pub mod app;
pub mod camera_controls;
pub mod function_input;
pub mod plot_view;
