pub mod csp;
pub mod extensions;

pub use csp::{csp_manager, path_selector, ContextSelector, CspManager, CspManagerService};
pub use extensions::CspManagerExt;
