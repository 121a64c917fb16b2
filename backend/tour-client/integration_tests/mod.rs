mod auth;
mod bookings;
mod helpers;
mod reviews;
mod tours;
mod unauthorized;
mod users;
