pub mod constants;
pub mod shared_wheel_game;
pub mod spin_rng;
pub mod wheel_config;
pub mod wheel_view;
