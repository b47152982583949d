//! Shared UI for the Lunch4Less workspace: session state, the navigation
//! shell, presentational components, and the pure view logic (wizard state,
//! list filtering, markdown rendering) the routed views build on.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_client, make_store, make_vault};

mod session;
pub use session::{
    clear_session, establish_session, use_require_auth, use_session, LogoutButton,
    SessionProvider, SessionState,
};

mod navbar;
pub use navbar::Navbar;

mod components;
pub use components::{
    ConfirmDialog, MessageBanner, RecipeCard, Severity, Spinner, StarInput, StarRating,
};

pub mod browse;
pub mod collection;
pub mod markdown;
pub mod wizard;
