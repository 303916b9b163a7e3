//! Configuration: types, default paths, XML loading, and validation.
//! Re-exports keep the public surface flat for the CLI and tests.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, ensure_default_config_exists, load_config_from_xml_path};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "BIB_RELINK_CONFIG";
