use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{
        FollowEdge,
        feed::{FeedScope, ScopeSet},
    },
};

/// Resolves which authors' reviews are eligible for a viewer, given the
/// follow edges fetched for that viewer (their own edges plus their
/// friends' edges for the two-hop scope).
///
/// Pure over the edge list; runs once per scope change.
pub fn resolve_scope(
    viewer: Option<Uuid>,
    scope: FeedScope,
    edges: &[FollowEdge],
) -> Result<ScopeSet, AppError> {
    if scope == FeedScope::Community {
        // Community is filtered by the author's membership flag, not by an
        // id set, so anonymous viewers are allowed here.
        return Ok(ScopeSet::Community);
    }

    let viewer = viewer.ok_or_else(|| {
        AppError::AuthenticationRequired("Sign in to view a personalized feed".into())
    })?;

    let authors = match scope {
        FeedScope::Myself => HashSet::from([viewer]),
        FeedScope::Friends => followings_of(viewer, edges),
        FeedScope::FriendsOfFriends => {
            // One hop of transitive closure. The viewer's own id is never
            // injected; it appears only if a friend follows the viewer back.
            let friends = followings_of(viewer, edges);
            let mut authors = friends.clone();
            for friend in &friends {
                authors.extend(followings_of(*friend, edges));
            }
            authors
        }
        FeedScope::Community => unreachable!(),
    };

    Ok(ScopeSet::Authors(authors))
}

fn followings_of(follower: Uuid, edges: &[FollowEdge]) -> HashSet<Uuid> {
    edges
        .iter()
        .filter(|edge| edge.follower_id == follower)
        .map(|edge| edge.following_id)
        .collect()
}
