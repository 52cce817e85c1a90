pub mod cors;
pub mod logging;
pub mod session;

pub use cors::enforce_origin_policy;
pub use logging::logging_middleware;
pub use session::{RequestIdentity, require_admin, require_user};
