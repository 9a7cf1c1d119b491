//! Wire models - serde structs for backend rows and auth payloads

mod auth;
mod id;
mod interaction;
mod post;
mod profile;

pub use auth::{GoTrueSession, GoTrueUser, PasswordGrant, SignUpBody, SignUpMetadata, SignUpReply};
pub use id::deserialize_id;
pub use interaction::{InteractionInsert, InteractionModel};
pub use post::{AuthorModel, PostInsert, PostModel, PostTitleUpdate, UsernameModel};
pub use profile::{ProfileInsert, ProfileModel};
