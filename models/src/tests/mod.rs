mod envelope;
mod review;
