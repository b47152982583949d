use dioxus::prelude::*;

use crate::icons::FaUtensils;
use crate::{use_session, Icon, LogoutButton};

/// Global navigation bar.
///
/// The routed links are supplied as children (they need the app's route
/// type); the brand and the session area are shared. Anonymous visitors get
/// no session area — the shell puts the login/signup links among the
/// children.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { width: 20, height: 20, icon: FaUtensils }
                span { "Lunch4Less" }
            }
            div {
                class: "navbar-links",
                {children}
            }
            if let Some(user) = session().user {
                div {
                    class: "navbar-session",
                    span { class: "navbar-user", "{user.display_name()}" }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}
