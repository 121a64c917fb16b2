use crate::{RecordId, Reference, Review, Role, User, UserSummary, visible_reviews};

fn review_by(author: Reference<UserSummary>, text: &str) -> Review {
    Review {
        review: text.to_string(),
        rating: 4.0,
        user: Some(author),
        ..Review::default()
    }
}

fn user(id: &str, role: Role) -> User {
    User {
        ident: RecordId::new(id),
        name: String::from("Abebe"),
        email: String::from("abebe@example.com"),
        role,
        ..User::default()
    }
}

/// **VALUE**: Authorship must be detected whether the backend populated `user` or not.
///
/// **WHY THIS MATTERS**: The tour page hides the review form once the user has reviewed.
/// Populated and bare references both occur depending on the endpoint.
///
/// **BUG THIS CATCHES**: Would catch if only one of the reference forms is handled.
#[test]
fn given_populated_and_bare_authors_when_checking_authorship_then_both_match() {
    // GIVEN: One populated author (with `_id`) and one bare id
    let populated = review_by(
        Reference::Populated(UserSummary {
            ident: RecordId {
                mongo_id: Some(String::from("u1")),
                id: None,
            },
            name: Some(String::from("Abebe")),
            ..UserSummary::default()
        }),
        "populated",
    );
    let bare = review_by(Reference::Id(String::from("u1")), "bare");

    // THEN: Both are authored by u1, neither by u2
    assert!(populated.is_authored_by("u1"));
    assert!(bare.is_authored_by("u1"));
    assert!(!bare.is_authored_by("u2"));
}

#[test]
fn given_review_without_author_when_checking_authorship_then_false() {
    let review = Review::default();

    assert!(!review.is_authored_by("u1"));
}

/// **VALUE**: Regular users only manage their own reviews; admins manage all.
#[test]
fn given_mixed_reviews_when_filtering_for_regular_user_then_only_own_remain() {
    // GIVEN: Reviews from two authors
    let reviews = vec![
        review_by(Reference::Id(String::from("u1")), "mine"),
        review_by(Reference::Id(String::from("u2")), "theirs"),
    ];

    // WHEN: Filtering for u1 and for an admin
    let own = visible_reviews(reviews.clone(), &user("u1", Role::User));
    let all = visible_reviews(reviews, &user("admin", Role::Admin));

    // THEN
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].review, "mine");
    assert_eq!(all.len(), 2);
}

/// **BUG THIS CATCHES**: Would catch a viewer without an id matching reviews without authors.
#[test]
fn given_viewer_without_id_when_filtering_then_nothing_is_visible() {
    let reviews = vec![Review::default()];
    let anonymous = User::default();

    assert!(visible_reviews(reviews, &anonymous).is_empty());
}
