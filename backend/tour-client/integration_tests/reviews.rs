use crate::helpers::{api_path, document_json, list_json, start_signed_in_backend};

use models::{ReviewDraftBuilder, Role, visible_reviews};
use tour_client::{QuerySpec, SessionStore};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_tour_when_listing_its_reviews_then_paging_forwarded() {
    // GIVEN
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("GET"))
        .and(path(api_path("/tours/t1/reviews")))
        .and(query_param("page", "2"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![json!({
            "_id": "r1",
            "review": "Unforgettable",
            "rating": 5,
            "tour": "t1",
            "user": {"_id": "u2", "name": "Lourdes Browning", "photo": "user-2.jpg"}
        })])))
        .expect(1)
        .mount(&backend.server)
        .await;

    // WHEN
    let query = QuerySpec::new().with("page", 2u32).with("limit", 5u32);
    let reviews = backend
        .client
        .reviews()
        .get_reviews_for_tour("t1", &query)
        .await
        .expect("reviews");

    // THEN: Populated author is kept
    let review = &reviews.items()[0];
    assert_eq!(review.rating, 5.0);
    assert!(review.is_authored_by("u2"));
}

/// **VALUE**: A validated draft is posted under the tour and the created review returned.
#[tokio::test]
async fn given_valid_draft_when_creating_review_for_tour_then_created_review_returned() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("POST"))
        .and(path(api_path("/tours/t1/reviews")))
        .and(body_json(json!({"review": "Great guides", "rating": 4})))
        .respond_with(ResponseTemplate::new(201).set_body_json(document_json(json!({
            "_id": "r9", "review": "Great guides", "rating": 4, "tour": "t1", "user": "u1"
        }))))
        .expect(1)
        .mount(&backend.server)
        .await;
    let draft = ReviewDraftBuilder::default()
        .with_review("Great guides")
        .with_rating(4)
        .build()
        .expect("draft");

    let review = backend
        .client
        .reviews()
        .create_review_for_tour("t1", &draft)
        .await
        .expect("created");

    assert_eq!(review.id(), Some("r9"));
    assert!(review.is_authored_by("u1"));
}

/// **VALUE**: Duplicate reviews are rejected by the backend and explained to the user.
#[tokio::test]
async fn given_duplicate_review_when_creating_then_backend_message_returned() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("POST"))
        .and(path(api_path("/reviews")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "fail",
            "message": "Duplicate field value. Please use another value!"
        })))
        .mount(&backend.server)
        .await;
    let draft = ReviewDraftBuilder::default()
        .with_review("Again")
        .with_rating(3)
        .with_tour("t1")
        .build()
        .expect("draft");

    let err = backend
        .client
        .reviews()
        .create(&draft)
        .await
        .expect_err("duplicate");

    assert_eq!(
        err.message(),
        "Duplicate field value. Please use another value!"
    );
}

/// **VALUE**: "My reviews" shows only the viewer's reviews unless they are an admin.
#[tokio::test]
async fn given_all_reviews_when_filtered_for_viewer_then_only_own_reviews_for_non_admin() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("GET"))
        .and(path(api_path("/reviews")))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
            json!({"_id": "r1", "review": "Mine", "rating": 4, "user": {"_id": "u1"}}),
            json!({"_id": "r2", "review": "Theirs", "rating": 2, "user": "u2"}),
            json!({"_id": "r3", "review": "Also mine", "rating": 5, "user": "u1"}),
        ])))
        .mount(&backend.server)
        .await;

    let all = backend
        .client
        .reviews()
        .get_all(&QuerySpec::new())
        .await
        .expect("reviews")
        .into_items();
    let viewer = backend.store.user().expect("signed in");

    let mine: Vec<String> = visible_reviews(all.clone(), &viewer)
        .into_iter()
        .filter_map(|r| r.id().map(str::to_string))
        .collect();
    assert_eq!(mine, vec!["r1".to_string(), "r3".to_string()]);

    let mut admin = viewer.clone();
    admin.role = Role::Admin;
    assert_eq!(visible_reviews(all, &admin).len(), 3);
}

#[tokio::test]
async fn given_own_review_when_deleting_then_no_content_accepted() {
    let backend = start_signed_in_backend(Role::User).await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/reviews/r1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    backend.client.reviews().delete("r1").await.expect("deleted");
}
