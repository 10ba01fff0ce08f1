//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod bookmark_repo;
pub mod comment_repo;
pub mod contact_repo;
pub mod follow_repo;
pub mod like_repo;
pub mod notification_repo;
pub mod preset_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use bookmark_repo::BookmarkRepo;
pub use comment_repo::CommentRepo;
pub use contact_repo::ContactRepo;
pub use follow_repo::FollowRepo;
pub use like_repo::LikeRepo;
pub use notification_repo::NotificationRepo;
pub use preset_repo::PresetRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
