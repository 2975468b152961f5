pub mod middleware;
pub mod request_id;

pub use middleware::{auth_middleware, viewer_middleware, AuthState, AuthUser, Viewer};
pub use request_id::{request_id_middleware, RequestId};
