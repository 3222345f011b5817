//! User interface rendering layer with component-based architecture.
//!
//! This module turns API responses into plain-text markup through immutable
//! view models. Rendering is entirely pure: data in, string out, with the
//! terminal driver deciding where output goes. That keeps every display rule
//! (field fallbacks, star quantization, pluralization, skill truncation,
//! empty states) testable without a terminal.
//!
//! # Architecture
//!
//! ```text
//! API response → view model computation → component renderers → markup string
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and their pure builders
//! - [`renderer`]: Top-level rendering coordinators
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Shared formatting utilities (stars, pluralization)
//! - [`notice`]: Transient notices with deterministic expiry

pub mod components;
pub mod helpers;
pub mod notice;
pub mod renderer;
pub mod viewmodel;

pub use notice::{Notice, NoticeBoard, NoticeKind, DEFAULT_NOTICE_TTL};
pub use renderer::{render_nav, render_profile, render_search};
pub use viewmodel::{
    EmptyState, NavLink, NavMenu, PersonCard, ProfileViewModel, ReviewLine, SearchViewModel,
};
