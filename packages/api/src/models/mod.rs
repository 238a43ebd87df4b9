//! Wire models exchanged with the auth API.

mod requests;
mod user;

pub use requests::{LoginRequest, RegisterRequest, ResendRequest};
pub use user::UserProfile;
