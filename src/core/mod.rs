pub mod catalog;
pub mod compiler;
pub mod config;
pub mod sanitize;

pub use catalog::{DirectiveName, CATALOG};
pub use compiler::{compile_header, compile_report_to};
pub use config::{DirectivePolicy, PolicyConfig, PolicyConfigBuilder, PolicyMode};
pub use sanitize::{sanitize_directive_value, strip_line_breaks};
