//! The post handler applied to each write.

use statefold_sdk::{Handler, Result};

use crate::model::{PostAction, PostState};

/// Folds post operations into the post map.
///
/// The service owns uniqueness and validation, so no invariants are
/// enforced here: create and update both store the post under its id,
/// replacing any existing entry, and deleting an unknown id is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostHandler;

impl Handler for PostHandler {
    type State = PostState;
    type Input = PostAction;

    fn handle(&self, mut state: PostState, action: PostAction) -> Result<PostState> {
        match action {
            PostAction::Create { post } => {
                tracing::debug!(post_id = %post.id, "create post");
                state.posts.insert(post.id.clone(), post);
            }
            PostAction::Update { post } => {
                tracing::debug!(post_id = %post.id, "update post");
                state.posts.insert(post.id.clone(), post);
            }
            PostAction::Delete { post_id } => {
                if state.posts.remove(&post_id).is_none() {
                    tracing::debug!(%post_id, "delete for unknown post id");
                }
            }
        }
        Ok(state)
    }
}
