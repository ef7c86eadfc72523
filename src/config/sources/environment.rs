//! Environment source: `MANIFEST__LAYOUT__APP_NAME=...` style variables.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Prefix shared by all configuration variables
pub const ENV_PREFIX: &str = "MANIFEST";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("layout.managed_allow_list")
            .try_parsing(true),
    )
}
