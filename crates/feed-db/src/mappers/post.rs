//! Post entity <-> model mapper

use feed_core::entities::{NewPost, Post};

use crate::models::{PostInsert, PostModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content.unwrap_or_default(),
            article_url: model.article_url,
            thumbnail_url: model.thumbnail_url,
            view_count: model.view_count.unwrap_or(0),
            created_at: model.created_at,
        }
    }
}

impl<'a> From<&'a NewPost> for PostInsert<'a> {
    fn from(post: &'a NewPost) -> Self {
        Self {
            user_id: &post.user_id,
            title: &post.title,
            content: &post.content,
            article_url: &post.article_url,
            thumbnail_url: post.thumbnail_url.as_deref(),
        }
    }
}
