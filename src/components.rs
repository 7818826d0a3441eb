//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across multiple
//! page types (dashboard, lecture, subject). Components handle specific UI
//! elements with consistent styling and behavior, eliminating duplication
//! across page generators.

pub mod footer;
pub mod layout;
pub mod lecture_card;
pub mod metadata;
pub mod nav;
