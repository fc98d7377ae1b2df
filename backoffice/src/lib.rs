//! Back-office collaborators
//!
//! Key-value storage, the signed-in session and the sidebar navigation tree
//! used alongside the table views.

pub mod nav;
pub mod session;
pub mod storage;

pub use nav::{FlatNode, Icon, NavNode, NavSection, Sidebar, default_sidebar};
pub use session::{LOGIN_PATH, LoginRequest, Session, SessionUser, TOKEN_KEY, UserUpdate};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError, TypedStorage};
