pub mod config;
pub mod http_client;
pub mod image_lookup;
pub mod model;
pub mod player_fetch;
pub mod provider;
pub mod state;
pub mod theme;
pub mod ui;
