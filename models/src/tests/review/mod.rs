mod builder;
mod visibility;
