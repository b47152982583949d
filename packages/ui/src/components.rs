//! Small presentational components shared by the routed views.

use api::Recipe;
use dioxus::prelude::*;

use crate::icons::{FaClock, FaImage, FaStar, FaUsers};
use crate::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "banner banner-success",
            Severity::Info => "banner banner-info",
            Severity::Warn => "banner banner-warn",
            Severity::Error => "banner banner-error",
        }
    }
}

/// Inline notification banner.
#[component]
pub fn MessageBanner(severity: Severity, text: String) -> Element {
    rsx! {
        div {
            class: severity.class(),
            "{text}"
        }
    }
}

/// Indeterminate progress indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "status" }
    }
}

/// Read-only star display with an optional vote count.
#[component]
pub fn StarRating(value: f64, #[props(default)] count: Option<u32>) -> Element {
    let filled = value.round().clamp(0.0, 5.0) as usize;

    rsx! {
        span {
            class: "stars",
            for i in 0..5 {
                span {
                    key: "{i}",
                    class: if i < filled { "star star-filled" } else { "star" },
                    Icon { width: 14, height: 14, icon: FaStar }
                }
            }
            if let Some(count) = count {
                span { class: "stars-count", "({count})" }
            }
        }
    }
}

/// Star picker for submitting a rating.
#[component]
pub fn StarInput(value: u8, on_select: EventHandler<u8>) -> Element {
    rsx! {
        span {
            class: "stars stars-input",
            for i in 1..=5u8 {
                button {
                    key: "{i}",
                    r#type: "button",
                    class: if i <= value { "star star-filled" } else { "star" },
                    onclick: move |_| on_select.call(i),
                    Icon { width: 18, height: 18, icon: FaStar }
                }
            }
        }
    }
}

/// Modal confirmation dialog.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Sí, eliminar".to_string())] accept_label: String,
    #[props(default = "Cancelar".to_string())] reject_label: String,
    on_accept: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            div {
                class: "dialog",
                h3 { "{title}" }
                p { "{message}" }
                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "{reject_label}"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_accept.call(()),
                        "{accept_label}"
                    }
                }
            }
        }
    }
}

pub(crate) fn difficulty_class(difficulty: &str) -> &'static str {
    match difficulty {
        "Fácil" => "tag tag-success",
        "Intermedio" => "tag tag-info",
        "Difícil" => "tag tag-warn",
        _ => "tag tag-info",
    }
}

/// Recipe summary card. The caller supplies the action row.
#[component]
pub fn RecipeCard(recipe: Recipe, actions: Element) -> Element {
    rsx! {
        article {
            class: "recipe-card",
            div {
                class: "recipe-card-cover",
                if let Some(url) = recipe.cover_image() {
                    img { src: "{url}", alt: "{recipe.name}", loading: "lazy" }
                } else {
                    div {
                        class: "recipe-card-placeholder",
                        Icon { width: 32, height: 32, icon: FaImage }
                    }
                }
            }
            div {
                class: "recipe-card-body",
                div {
                    class: "recipe-card-head",
                    h3 { "{recipe.name}" }
                    span { class: difficulty_class(&recipe.difficulty), "{recipe.difficulty}" }
                }
                p { class: "recipe-card-description", "{recipe.description}" }
                div {
                    class: "recipe-card-meta",
                    span {
                        Icon { width: 13, height: 13, icon: FaClock }
                        " {recipe.preparation_time} min"
                    }
                    span {
                        Icon { width: 13, height: 13, icon: FaUsers }
                        " {recipe.servings} personas"
                    }
                    if let Some(rating) = recipe.average_rating {
                        StarRating { value: rating, count: recipe.total_ratings }
                    }
                }
                div {
                    class: "recipe-card-actions",
                    {actions}
                }
            }
        }
    }
}
