//! Nesting of a movie's flat review rows into reply threads.
//!
//! Only root reviews (no parent) appear at the top level; every reply is
//! reachable solely through its parent's `children`. Each row has a single
//! parent, so growing the tree downward from roots visits every node at most
//! once. Rows that cannot be reached from a root (missing parent, or stuck in
//! a parent cycle) are left out.

use std::collections::HashMap;

use crate::domain::types::Review;

/// One review with its replies, in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewNode {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub children: Vec<ReviewNode>,
}

/// Build the reply forest for one movie's reviews.
pub fn build_review_tree(mut reviews: Vec<Review>) -> Vec<ReviewNode> {
    reviews.sort_by_key(|r| r.id);

    let mut roots = Vec::new();
    let mut replies: HashMap<i32, Vec<Review>> = HashMap::new();
    for review in reviews {
        match review.parent_id {
            None => roots.push(review),
            Some(parent_id) => replies.entry(parent_id).or_default().push(review),
        }
    }

    roots
        .into_iter()
        .map(|root| render(root, &mut replies))
        .collect()
}

fn render(review: Review, replies: &mut HashMap<i32, Vec<Review>>) -> ReviewNode {
    // Taking the bucket out of the map means a node's replies are consumed once.
    let children = replies
        .remove(&review.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| render(child, replies))
        .collect();
    ReviewNode {
        id: review.id,
        name: review.name,
        text: review.text,
        children,
    }
}
