//! Acceptance tests for the post handler, run through the local harness
//! the way the deployed handler would be driven by write batches.

use statefold_demo::{Post, PostAction, PostHandler, PostState};
use statefold_testkit::{create_write, test_function, TestFunctionInput};
use uuid::Uuid;

fn post(id: &str, title: &str, content: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author: "demo".to_string(),
    }
}

#[test]
fn create_shows_the_post() {
    let id = Uuid::new_v4().to_string();

    let attempt = test_function(TestFunctionInput {
        handler: PostHandler,
        init_state: PostState::default(),
        writes: vec![create_write(PostAction::Create {
            post: post(&id, "Hello world", "My first post"),
        })],
    })
    .unwrap();

    let stored = attempt.state.posts.get(&id).expect("post should be stored");
    assert_eq!(stored.id, id);
    assert_eq!(stored.title, "Hello world");
}

#[test]
fn update_replaces_the_title() {
    let id = Uuid::new_v4().to_string();

    let attempt = test_function(TestFunctionInput {
        handler: PostHandler,
        init_state: PostState::default(),
        writes: vec![
            create_write(PostAction::Create {
                post: post(&id, "Hello world", "My first post"),
            }),
            create_write(PostAction::Update {
                post: post(&id, "Hello world V2", "My updated post"),
            }),
        ],
    })
    .unwrap();

    assert_eq!(attempt.writes_applied, 2);
    assert_eq!(attempt.state.posts[&id].title, "Hello world V2");
}

#[test]
fn delete_leaves_no_posts() {
    let id = Uuid::new_v4().to_string();

    let attempt = test_function(TestFunctionInput {
        handler: PostHandler,
        init_state: PostState::default(),
        writes: vec![
            create_write(PostAction::Create {
                post: post(&id, "Hello world", "My first post"),
            }),
            create_write(PostAction::Delete { post_id: id }),
        ],
    })
    .unwrap();

    assert!(attempt.state.posts.is_empty());
}

#[test]
fn delete_of_another_id_keeps_the_post() {
    let id = Uuid::new_v4().to_string();

    let attempt = test_function(TestFunctionInput {
        handler: PostHandler,
        init_state: PostState::default(),
        writes: vec![
            create_write(PostAction::Create {
                post: post(&id, "Hello world", "My first post"),
            }),
            create_write(PostAction::Delete {
                post_id: Uuid::new_v4().to_string(),
            }),
        ],
    })
    .unwrap();

    assert_eq!(attempt.state.posts.len(), 1);
    assert!(attempt.state.posts.contains_key(&id));
}

#[test]
fn snapshot_matches_the_service_wire_shape() {
    let id = Uuid::new_v4().to_string();

    let attempt = test_function(TestFunctionInput {
        handler: PostHandler,
        init_state: PostState::default(),
        writes: vec![create_write(PostAction::Create {
            post: post(&id, "Hello world", "My first post"),
        })],
    })
    .unwrap();

    let value = attempt.state_value().unwrap();
    assert_eq!(value["posts"][&id]["title"], "Hello world");
}
