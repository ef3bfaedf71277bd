pub mod constants;
pub mod core;
pub mod error;
pub mod middleware;
pub mod prelude;
pub mod store;

// Re-export commonly used types for convenience
pub use crate::core::{
    compile_header, compile_report_to, sanitize_directive_value, strip_line_breaks, DirectiveName,
    DirectivePolicy, PolicyConfig, PolicyConfigBuilder, PolicyMode, CATALOG,
};
pub use error::CspError;
pub use middleware::{csp_manager, path_selector, CspManager, CspManagerExt, CspManagerService};
pub use store::{CompiledHeaders, ContextPolicies, PolicyStore, RequestContext};
