//! Paperclips Core - Backend-independent logic for the rotating paperclips spinner
//!
//! This crate contains the shape geometry, easing curves, angle timeline and
//! color math that can be tested on the host without any graphics backend.

pub mod color_utils;
pub mod config;
pub mod easing;
pub mod geometry;
pub mod timeline;
