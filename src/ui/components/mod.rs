//! Composable UI component renderers.
//!
//! Each component is a pure function from a view model to a markup string;
//! none of them touch the terminal, the network, or any state. Composition
//! into full views happens in [`renderer`](crate::ui::renderer).
//!
//! # Components
//!
//! - [`card`]: one person result card
//! - [`empty`]: empty search state with the add-person call-to-action
//! - [`nav`]: navigation menu for the current auth state
//! - [`notice`]: transient alert lines
//! - [`profile`]: person detail view with reviews

pub mod card;
pub mod empty;
pub mod nav;
pub mod notice;
pub mod profile;

pub use card::render_person_card;
pub use empty::render_empty_state;
pub use nav::render_nav_menu;
pub use notice::render_notice;
pub use profile::render_profile;
