pub mod config;
pub mod icons;
pub mod serve;

pub use config::{ConfigCommands, handle_config_command};
pub use icons::{IconCommands, handle_kebab_command, handle_list_command, handle_lookup_command, handle_render_command};
pub use serve::{ServeCommands, handle_serve_command};
