//! Command line surface of the `tours` client.
//!
//! Each subcommand maps onto one access-layer call. [`execute`] returns the
//! text to print so commands can be checked without a terminal.

use crate::error::TourCliError;
use crate::render;

use common::ErrorLocation;
use models::{Difficulty, ReviewDraftBuilder, visible_reviews};
use tour_client::{ApiClient, ClientConfig, QuerySpec, SessionStore, TourFilter};

use std::panic::Location;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "tours", version, about = "Browse, review and book tours")]
pub struct Cli {
    /// Directory holding config.json, the session file and logs
    #[arg(long, env = "TOURS_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Echo debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List tours, optionally filtered, sorted and paged
    Tours {
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Sort expression, e.g. `-ratingsAverage,price`
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_duration: Option<u32>,
    },

    /// Show one tour
    Tour { id: String },

    /// The five cheapest top-rated tours
    TopCheap,

    /// Aggregate statistics per difficulty
    Stats,

    /// Tour starts per month of a year
    Plan { year: i32 },

    /// Reviews of a tour
    Reviews {
        tour_id: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        sort: Option<String>,
    },

    /// Write a review for a tour
    Review {
        tour_id: String,
        /// 1 to 5
        rating: u8,
        text: String,
    },

    /// Reviews written by the signed-in user (every review for admins)
    MyReviews,

    /// Sign in and store the session
    Login { email: String, password: String },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Me,

    /// Bookings of the signed-in user
    Bookings,

    /// Start a checkout for a tour and print the payment link
    Checkout { tour_id: String },

    /// Confirm a payment by its transaction reference
    Verify { tx_ref: String },
}

impl Command {
    /// Tour listing filter for `tours`, `None` for every other command.
    pub fn tour_filter(&self) -> Option<TourFilter> {
        match self {
            Command::Tours {
                difficulty,
                sort,
                page,
                limit,
                max_price,
                min_duration,
            } => Some(TourFilter {
                difficulty: *difficulty,
                duration_gte: *min_duration,
                price_lte: *max_price,
                sort: sort.clone(),
                fields: None,
                page: *page,
                limit: *limit,
            }),
            _ => None,
        }
    }
}

/// Text to print for `value`: pretty JSON when `json` is set, `text` otherwise.
fn emit<T: Serialize + ?Sized>(
    value: &T,
    json: bool,
    text: impl FnOnce(&T) -> String,
) -> Result<String, TourCliError> {
    if !json {
        return Ok(text(value));
    }

    serde_json::to_string_pretty(value).map_err(|e| TourCliError::Cli {
        message: format!("Failed to encode output: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn require_sign_in(client: &ApiClient) -> Result<models::User, TourCliError> {
    client
        .session_store()
        .user()
        .ok_or_else(|| TourCliError::InvalidInput {
            message: String::from("You are not logged in. Run `tours login <email> <password>` first."),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Run `command` against `client` and return what should be printed.
pub async fn execute(
    command: Command,
    client: &ApiClient,
    config: &ClientConfig,
    json: bool,
) -> Result<String, TourCliError> {
    debug!("Executing {command:?}");

    match command {
        Command::Tours { .. } => {
            let filter = command.tour_filter().unwrap_or_default();
            let tours = client.tours().get_filtered(&filter).await?.into_items();
            emit(&tours, json, |tours| render::tour_list(tours))
        }

        Command::Tour { id } => {
            let tour = client.tours().get_by_id(&id).await?;
            emit(&tour, json, |tour| render::tour_detail(tour, config))
        }

        Command::TopCheap => {
            let tours = client.tours().get_top_cheap().await?.into_items();
            emit(&tours, json, |tours| render::tour_list(tours))
        }

        Command::Stats => {
            let stats = client.tours().get_tour_stats().await?;
            emit(&stats, json, |stats| render::stats_table(stats))
        }

        Command::Plan { year } => {
            let plan = client.tours().get_monthly_plan(year).await?;
            emit(&plan, json, |plan| render::monthly_plan(year, plan))
        }

        Command::Reviews {
            tour_id,
            page,
            limit,
            sort,
        } => {
            let query = QuerySpec::new()
                .with("page", page)
                .with("limit", limit)
                .with("sort", sort);
            let reviews = client
                .reviews()
                .get_reviews_for_tour(&tour_id, &query)
                .await?
                .into_items();
            emit(&reviews, json, |reviews| render::review_list(reviews))
        }

        Command::Review {
            tour_id,
            rating,
            text,
        } => {
            let draft = ReviewDraftBuilder::default()
                .with_review(text)
                .with_rating(rating)
                .build()?;
            let review = client.reviews().create_review_for_tour(&tour_id, &draft).await?;
            info!("Review {} created for tour {tour_id}", review.id().unwrap_or("-"));
            emit(&review, json, |review| {
                format!("Review submitted.\n{}", render::review_line(review))
            })
        }

        Command::MyReviews => {
            let viewer = require_sign_in(client)?;
            let reviews = client.reviews().get_all(&QuerySpec::new()).await?.into_items();
            let mine = visible_reviews(reviews, &viewer);
            emit(&mine, json, |reviews| render::review_list(reviews))
        }

        Command::Login { email, password } => {
            let response = client.auth().login(&email, &password).await?;
            let user = response.user().cloned().unwrap_or_default();
            emit(&user, json, |user| format!("Logged in as {}.", user.name))
        }

        Command::Logout => {
            client.auth().logout()?;
            Ok(String::from("Logged out."))
        }

        Command::Me => {
            let me = client.users().get_me().await?;
            emit(&me, json, |me| render::user_card(me, config))
        }

        Command::Bookings => {
            let bookings = client.bookings().get_my_bookings().await?.into_items();
            emit(&bookings, json, |bookings| render::booking_list(bookings))
        }

        Command::Checkout { tour_id } => {
            let session = client.bookings().create(&tour_id).await?;
            emit(&session, json, |session| match session.checkout_url.as_deref() {
                Some(url) => format!("Complete your payment at: {url}"),
                None => String::from("Checkout started, but no payment link was returned."),
            })
        }

        Command::Verify { tx_ref } => {
            let verification = client.bookings().verify(&tx_ref).await?;
            emit(&verification, json, |verification| {
                verification
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Verification status: {}", verification.status))
            })
        }
    }
}
