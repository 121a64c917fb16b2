use crate::render;

use models::{Difficulty, MonthlyPlan, RecordId, Reference, Review, Tour, UserSummary};
use tour_client::ClientConfig;

fn tour() -> Tour {
    Tour {
        ident: RecordId::new("t1"),
        name: "The Forest Hiker".to_string(),
        duration: 5,
        difficulty: Some(Difficulty::Easy),
        price: 397.0,
        ratings_average: 4.7,
        ratings_quantity: 37,
        summary: "Breathtaking hike".to_string(),
        image_cover: "tour-1-cover.jpg".to_string(),
        guides: vec![
            Reference::Populated(UserSummary {
                ident: RecordId::new("g1"),
                name: Some("Miyah Myles".to_string()),
                ..UserSummary::default()
            }),
            Reference::Id("g2".to_string()),
        ],
        ..Tour::default()
    }
}

#[test]
fn given_tour_when_rendered_as_line_then_key_facts_shown() {
    let line = render::tour_line(&tour());

    assert_eq!(line, "t1  The Forest Hiker  5 days, easy  $397  ★ 4.7 (37)");
}

/// **VALUE**: Image names are shown as full URLs the user can open.
#[test]
fn given_tour_detail_when_rendered_then_cover_url_resolved_and_guides_named() {
    let detail = render::tour_detail(&tour(), &ClientConfig::default());

    assert!(detail.contains("Cover: http://localhost:3000/img/tour-1-cover.jpg"));
    assert!(detail.contains("Guides: Miyah Myles, g2"));
}

#[test]
fn given_reviews_with_mixed_authors_when_rendered_then_name_or_id_shown() {
    let reviews = vec![
        Review {
            ident: RecordId::new("r1"),
            review: "Loved it".to_string(),
            rating: 5.0,
            user: Some(Reference::Populated(UserSummary {
                ident: RecordId::new("u1"),
                name: Some("Sara".to_string()),
                ..UserSummary::default()
            })),
            ..Review::default()
        },
        Review {
            ident: RecordId::new("r2"),
            review: "Okay".to_string(),
            rating: 3.0,
            user: Some(Reference::Id("u2".to_string())),
            ..Review::default()
        },
    ];

    assert_eq!(
        render::review_list(&reviews),
        "r1  5/5  Sara: Loved it\nr2  3/5  u2: Okay"
    );
}

#[test]
fn given_empty_results_when_rendered_then_friendly_placeholder() {
    assert_eq!(render::tour_list(&[]), "No tours found.");
    assert_eq!(render::review_list(&[]), "No reviews yet.");
    assert_eq!(render::booking_list(&[]), "No bookings yet.");
    assert_eq!(render::monthly_plan(2021, &[]), "No tours start in 2021.");
}

#[test]
fn given_monthly_plan_when_rendered_then_months_zero_padded() {
    let plan = vec![MonthlyPlan {
        month: 7,
        num_tour_starts: 2,
        tours: vec!["The Sea Explorer".to_string(), "The Park Camper".to_string()],
    }];

    assert_eq!(
        render::monthly_plan(2021, &plan),
        "2021-07: 2 start(s): The Sea Explorer, The Park Camper"
    );
}
