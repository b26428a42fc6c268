//! # Storyboard
//!
//! A client for Hack-or-Snooze style link-sharing servers.
//!
//! ## Architecture
//!
//! ```text
//! StoryApi → Controller (AppState) → Render → Page
//! ```
//!
//! - [`api`]: the remote story service and its reqwest implementation
//! - [`controller`]: loads stories and turns user events into remote calls
//! - [`render`]: markup for a single story
//! - [`page`]: the visible page model and its HTML rendering
//!
//! ## Quick Start
//!
//! ```bash
//! storyboard login alice --password s3cret
//! storyboard list
//! storyboard submit --title "Rust 2024" --author Ferris --url https://blog.rust-lang.org
//! storyboard render --out stories.html --open
//! ```

/// Application context, error types and the remembered session.
pub mod app;

/// Remote story service.
///
/// - [`StoryApi`](api::StoryApi): async trait for the remote operations
/// - [`HttpStoryApi`](api::http_api::HttpStoryApi): reqwest-based implementation
pub mod api;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/storyboard/config.toml`.
pub mod config;

/// Page controller and the application state it owns.
pub mod controller;

/// Core domain models.
///
/// - [`Story`](domain::Story): one shared link
/// - [`StoryList`](domain::StoryList): ordered stories
/// - [`User`](domain::User): the logged-in account with favorites
pub mod domain;

/// Visible page model: loading message, story list, submit form, error banner.
pub mod page;

/// Story markup generation.
pub mod render;
