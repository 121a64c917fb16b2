mod commands;
mod navigator;
