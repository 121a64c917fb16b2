mod assets;
mod backend_message;
mod bookings;
mod config;
mod env;
mod query;
