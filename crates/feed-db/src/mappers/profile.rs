//! Profile entity <-> model mapper

use feed_core::entities::{NewProfile, Profile};

use crate::models::{ProfileInsert, ProfileModel};

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            email: model.email.unwrap_or_default(),
            username: model.username,
            avatar_url: model.avatar_url,
        }
    }
}

impl<'a> From<&'a NewProfile> for ProfileInsert<'a> {
    fn from(profile: &'a NewProfile) -> Self {
        Self {
            id: &profile.id,
            email: &profile.email,
            username: &profile.username,
            avatar_url: profile.avatar_url.as_deref(),
        }
    }
}
