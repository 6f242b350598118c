pub mod animation;
pub mod config;
pub mod controllers;
pub mod models;
pub mod render;
pub mod sorting;
pub mod views;
