//! Plain-text rendering of backend records for the terminal.

use models::{Booking, MonthlyPlan, Review, Tour, TourStats, User};
use tour_client::ClientConfig;

use std::fmt::Write;

const NO_ID: &str = "-";

pub fn tour_line(tour: &Tour) -> String {
    let difficulty = tour.difficulty.map_or("-", |d| d.as_str());
    format!(
        "{id}  {name}  {duration} days, {difficulty}  ${price}  ★ {rating:.1} ({count})",
        id = tour.id().unwrap_or(NO_ID),
        name = tour.name,
        duration = tour.duration,
        price = tour.price,
        rating = tour.ratings_average,
        count = tour.ratings_quantity,
    )
}

pub fn tour_list(tours: &[Tour]) -> String {
    if tours.is_empty() {
        return String::from("No tours found.");
    }
    tours.iter().map(tour_line).collect::<Vec<_>>().join("\n")
}

/// Multi-line detail view with resolved image URLs.
pub fn tour_detail(tour: &Tour, config: &ClientConfig) -> String {
    let mut out = tour_line(tour);

    if !tour.summary.is_empty() {
        let _ = write!(out, "\n\n{}", tour.summary);
    }
    if let Some(description) = tour.description.as_deref() {
        let _ = write!(out, "\n\n{description}");
    }

    let cover = config.asset_url(Some(&tour.image_cover));
    if !cover.is_empty() {
        let _ = write!(out, "\n\nCover: {cover}");
    }
    for image in &tour.images {
        let _ = write!(out, "\nImage: {}", config.asset_url(Some(image)));
    }

    let guides: Vec<String> = tour
        .guides
        .iter()
        .map(|guide| match guide.populated() {
            Some(summary) => summary
                .name
                .clone()
                .unwrap_or_else(|| guide.id().unwrap_or(NO_ID).to_string()),
            None => guide.id().unwrap_or(NO_ID).to_string(),
        })
        .collect();
    if !guides.is_empty() {
        let _ = write!(out, "\nGuides: {}", guides.join(", "));
    }

    out
}

pub fn review_line(review: &Review) -> String {
    let author = review
        .user
        .as_ref()
        .map(|user| match user.populated().and_then(|u| u.name.as_deref()) {
            Some(name) => name.to_string(),
            None => user.id().unwrap_or(NO_ID).to_string(),
        })
        .unwrap_or_else(|| NO_ID.to_string());

    format!(
        "{id}  {rating}/5  {author}: {text}",
        id = review.id().unwrap_or(NO_ID),
        rating = review.rating,
        text = review.review,
    )
}

pub fn review_list(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return String::from("No reviews yet.");
    }
    reviews.iter().map(review_line).collect::<Vec<_>>().join("\n")
}

pub fn user_card(user: &User, config: &ClientConfig) -> String {
    let mut out = format!(
        "{name} <{email}>\nRole: {role}\nId: {id}",
        name = user.name,
        email = user.email,
        role = user.role,
        id = user.id().unwrap_or(NO_ID),
    );
    if let Some(photo) = user.photo.as_deref() {
        let _ = write!(out, "\nPhoto: {}", config.asset_url(Some(photo)));
    }
    out
}

pub fn stats_table(stats: &[TourStats]) -> String {
    if stats.is_empty() {
        return String::from("No statistics available.");
    }
    stats
        .iter()
        .map(|row| {
            format!(
                "{group:<10} tours: {tours:>3}  ratings: {ratings:>4}  avg ★ {avg_rating:.2}  avg ${avg_price:.0}  min ${min:.0}  max ${max:.0}",
                group = row.group.as_deref().unwrap_or(NO_ID),
                tours = row.num_tours,
                ratings = row.num_ratings,
                avg_rating = row.avg_rating,
                avg_price = row.avg_price,
                min = row.min_price,
                max = row.max_price,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn monthly_plan(year: i32, plan: &[MonthlyPlan]) -> String {
    if plan.is_empty() {
        return format!("No tours start in {year}.");
    }
    plan.iter()
        .map(|month| {
            format!(
                "{year}-{month:02}: {count} start(s): {tours}",
                month = month.month,
                count = month.num_tour_starts,
                tours = month.tours.join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn booking_line(booking: &Booking) -> String {
    let tour = booking
        .tour
        .as_ref()
        .map(|tour| match tour.populated().and_then(|t| t.name.as_deref()) {
            Some(name) => name.to_string(),
            None => tour.id().unwrap_or(NO_ID).to_string(),
        })
        .unwrap_or_else(|| NO_ID.to_string());

    format!(
        "{id}  {tour}  ${price}  {paid}",
        id = booking.id().unwrap_or(NO_ID),
        price = booking.price,
        paid = if booking.paid { "paid" } else { "unpaid" },
    )
}

pub fn booking_list(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return String::from("No bookings yet.");
    }
    bookings.iter().map(booking_line).collect::<Vec<_>>().join("\n")
}
