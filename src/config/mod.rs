//! Configuration for the summarizer.
//!
//! This module handles the optional `tfsum.yaml` file: deserializing it,
//! validating filter values into the core enums, and converting it into the
//! explicit options records the analyzer and formatter consume. The core
//! never reads configuration itself; everything flows through these types.

mod parser;
mod spec;

pub use parser::{find_config_file, ConfigParser, DEFAULT_CONFIG_FILES};
pub use spec::{DisplayConfig, TfsumConfig};
