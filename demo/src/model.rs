//! Post records and the operation wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A post as stored in the deployment's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Client-generated identifier, globally unique
    pub id: String,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Author display name
    pub author: String,
}

/// An operation record submitted in a write batch.
///
/// Tagged on a `type` field; create and update carry the full post,
/// delete carries only the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostAction {
    /// Store a new post
    #[serde(rename = "createPost")]
    Create { post: Post },

    /// Replace a post's fields
    #[serde(rename = "updatePost")]
    Update { post: Post },

    /// Remove a post
    #[serde(rename = "deletePost")]
    Delete {
        #[serde(rename = "postId")]
        post_id: String,
    },
}

/// State owned by the post deployment: a map from post id to post.
///
/// A `BTreeMap` keeps snapshots and logs in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostState {
    pub posts: BTreeMap<String, Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "post-1".to_string(),
            title: "Hello world".to_string(),
            content: "My first post".to_string(),
            author: "demo".to_string(),
        }
    }

    #[test]
    fn test_create_wire_shape() {
        let json = serde_json::to_string(&PostAction::Create {
            post: sample_post(),
        })
        .unwrap();
        assert!(json.contains(r#""type":"createPost""#));
        assert!(json.contains(r#""post":{"#));
    }

    #[test]
    fn test_update_wire_shape() {
        let json = serde_json::to_string(&PostAction::Update {
            post: sample_post(),
        })
        .unwrap();
        assert!(json.contains(r#""type":"updatePost""#));
    }

    #[test]
    fn test_delete_wire_shape() {
        let json = serde_json::to_string(&PostAction::Delete {
            post_id: "post-1".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"deletePost","postId":"post-1"}"#);
    }

    #[test]
    fn test_action_round_trip() {
        let action = PostAction::Create {
            post: sample_post(),
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: PostAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_state_wire_shape() {
        let mut state = PostState::default();
        state.posts.insert("post-1".to_string(), sample_post());

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["posts"]["post-1"]["title"], "Hello world");
    }

    #[test]
    fn test_default_state_is_empty() {
        assert!(PostState::default().posts.is_empty());
    }
}
