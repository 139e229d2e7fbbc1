pub mod backend;
pub mod context;
pub mod error;

pub use backend::{AuthBackend, MemoryAuthBackend};
pub use context::{use_auth, AuthContext, AuthState};
pub use error::AuthError;
