pub mod guard;
pub mod storage;
pub mod store;

pub use guard::{GuardDecision, Navigator, NullNavigator, RouteGuard};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, CURRENT_USER_KEY, TOKEN_KEY};
pub use store::SessionStore;
