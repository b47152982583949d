//! Community feed: public recipes with filters and a per-recipe review
//! dialog.

use dioxus::prelude::*;

use api::{Recipe, Review};
use ui::browse::{RecipeFilter, SortBy};
use ui::collection::upsert_by_id;
use ui::{
    make_client, use_session, MessageBanner, RecipeCard, Severity, Spinner, StarInput, StarRating,
};

use crate::Route;

#[component]
pub fn Community() -> Element {
    let session = use_session();
    let mut recipes = use_signal(Vec::<Recipe>::new);
    let mut loading = use_signal(|| true);
    let mut message = use_signal(|| Option::<(Severity, String)>::None);

    let mut search = use_signal(String::new);
    let mut difficulty = use_signal(String::new);
    let mut sort = use_signal(|| SortBy::Newest);

    // Review dialog state.
    let mut current = use_signal(|| Option::<Recipe>::None);
    let mut reviews = use_signal(Vec::<Review>::new);
    let mut new_rating = use_signal(|| 0u8);
    let mut new_comment = use_signal(String::new);
    let mut review_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let client = make_client().await;
        match client.list_public_recipes().await {
            Ok(list) => recipes.set(list),
            Err(e) => message.set(Some((Severity::Error, e.to_string()))),
        }
        loading.set(false);
    });

    let filter = RecipeFilter {
        search: search(),
        difficulty: if difficulty().is_empty() {
            None
        } else {
            Some(difficulty())
        },
        visibility: None,
        sort: sort(),
    };
    let all = recipes();
    let filtered = filter.apply(&all);

    let mut open_reviews = move |recipe: Recipe| {
        let recipe_id = recipe.id;
        current.set(Some(recipe));
        reviews.set(Vec::new());
        new_rating.set(0);
        new_comment.set(String::new());
        review_error.set(None);
        spawn(async move {
            let client = make_client().await;
            match client.list_reviews(recipe_id).await {
                Ok(list) => reviews.set(list),
                Err(e) => review_error.set(Some(e.to_string())),
            }
        });
    };

    let close_reviews = move |_| {
        current.set(None);
        reviews.set(Vec::new());
        new_rating.set(0);
        new_comment.set(String::new());
        review_error.set(None);
    };

    let submit_review = move |_| {
        spawn(async move {
            let Some(recipe) = current() else {
                return;
            };
            let rating = new_rating();
            if rating == 0 {
                review_error.set(Some("Selecciona una puntuación".to_string()));
                return;
            }
            let comment = new_comment().trim().to_string();

            let client = make_client().await;
            let result = client
                .create_review(
                    recipe.id,
                    rating as f64,
                    if comment.is_empty() {
                        None
                    } else {
                        Some(comment.as_str())
                    },
                )
                .await;
            match result {
                Ok(review) => {
                    // Update the card's aggregate with a running average.
                    let mut updated = recipe.clone();
                    let prev_total = updated.total_ratings.unwrap_or(0);
                    let prev_sum = updated.average_rating.unwrap_or(0.0) * prev_total as f64;
                    updated.total_ratings = Some(prev_total + 1);
                    updated.average_rating =
                        Some((prev_sum + review.rating) / (prev_total + 1) as f64);
                    upsert_by_id(&mut recipes.write(), updated.clone(), |r| r.id);
                    current.set(Some(updated));

                    reviews.write().insert(0, review);
                    new_rating.set(0);
                    new_comment.set(String::new());
                    review_error.set(None);
                }
                Err(e) => review_error.set(Some(e.to_string())),
            }
        });
    };

    let copy_link = move |recipe_id: i64| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let origin = window.location().origin().unwrap_or_default();
                let _ = window
                    .navigator()
                    .clipboard()
                    .write_text(&format!("{origin}/recipes/{recipe_id}"));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::debug!("copy link for recipe {recipe_id}");
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                h1 { "Comunidad" }
                p { "Recetas compartidas por otros usuarios" }
            }

            if let Some((severity, text)) = message() {
                MessageBanner { severity, text }
            }

            div {
                class: "filter-bar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Buscar recetas...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    onchange: move |evt| difficulty.set(evt.value()),
                    option { value: "", selected: difficulty().is_empty(), "Todas las dificultades" }
                    for level in ["Fácil", "Intermedio", "Difícil"] {
                        option {
                            key: "{level}",
                            value: "{level}",
                            selected: difficulty() == level,
                            "{level}"
                        }
                    }
                }
                select {
                    onchange: move |evt| sort.set(SortBy::from_key(&evt.value())),
                    for option_sort in [SortBy::Newest, SortBy::Rating, SortBy::Popular, SortBy::Time] {
                        option {
                            key: "{option_sort.key()}",
                            value: "{option_sort.key()}",
                            selected: sort() == option_sort,
                            "{option_sort.label()}"
                        }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        search.set(String::new());
                        difficulty.set(String::new());
                        sort.set(SortBy::Newest);
                    },
                    "Limpiar filtros"
                }
            }

            if loading() {
                Spinner {}
            } else if filtered.is_empty() {
                div { class: "empty-state", p { "No hay recetas públicas que mostrar." } }
            } else {
                div {
                    class: "card-grid",
                    for recipe in filtered {
                        RecipeCard {
                            key: "{recipe.id}",
                            recipe: recipe.clone(),
                            actions: rsx! {
                                Link {
                                    to: Route::RecipeDetail { id: recipe.id },
                                    class: "btn btn-small",
                                    "Ver"
                                }
                                button {
                                    class: "btn btn-small",
                                    onclick: {
                                        let recipe = recipe.clone();
                                        move |_| open_reviews(recipe.clone())
                                    },
                                    "Reseñas"
                                }
                                button {
                                    class: "btn btn-small",
                                    onclick: move |_| copy_link(recipe.id),
                                    "Copiar enlace"
                                }
                            },
                        }
                    }
                }
            }

            if let Some(recipe) = current() {
                div {
                    class: "dialog-overlay",
                    div {
                        class: "dialog dialog-wide",
                        div {
                            class: "dialog-head",
                            h3 { "Reseñas de {recipe.name}" }
                            button {
                                class: "btn btn-small btn-secondary",
                                onclick: close_reviews,
                                "Cerrar"
                            }
                        }

                        if let Some(rating) = recipe.average_rating {
                            StarRating { value: rating, count: recipe.total_ratings }
                        }

                        if let Some(err) = review_error() {
                            MessageBanner { severity: Severity::Error, text: err }
                        }

                        if session().is_authenticated() {
                            div {
                                class: "review-form",
                                StarInput {
                                    value: new_rating(),
                                    on_select: move |stars| new_rating.set(stars),
                                }
                                textarea {
                                    placeholder: "Escribe un comentario (opcional)...",
                                    value: new_comment(),
                                    oninput: move |evt| new_comment.set(evt.value()),
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: submit_review,
                                    "Publicar reseña"
                                }
                            }
                        } else {
                            p { class: "review-login-hint", "Inicia sesión para dejar una reseña." }
                        }

                        div {
                            class: "review-list",
                            if reviews().is_empty() {
                                p { "Todavía no hay reseñas." }
                            }
                            for review in reviews() {
                                div {
                                    key: "{review.id}",
                                    class: "review",
                                    div {
                                        class: "review-head",
                                        span { class: "review-avatar", "{review.initials()}" }
                                        span { class: "review-author", "{review.display_name()}" }
                                        StarRating { value: review.rating }
                                    }
                                    if let Some(comment) = &review.comment {
                                        p { class: "review-comment", "{comment}" }
                                    }
                                    if let Some(date) = &review.created_at {
                                        span { class: "review-date", "{date}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
