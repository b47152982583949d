//! The user's recipe list: stats, filters, visibility toggle, delete.

use dioxus::prelude::*;

use api::Recipe;
use ui::browse::{self, RecipeFilter, SortBy};
use ui::collection::{remove_by_id, upsert_by_id};
use ui::{
    make_client, use_require_auth, ConfirmDialog, MessageBanner, RecipeCard, Severity, Spinner,
};

use crate::Route;

#[component]
pub fn MyRecipes() -> Element {
    let _session = use_require_auth();
    let mut recipes = use_signal(Vec::<Recipe>::new);
    let mut loading = use_signal(|| true);
    let mut message = use_signal(|| Option::<(Severity, String)>::None);

    let mut search = use_signal(String::new);
    let mut visibility = use_signal(String::new);
    let mut sort = use_signal(|| SortBy::Newest);

    let mut pending_delete = use_signal(|| Option::<Recipe>::None);

    let _loader = use_resource(move || async move {
        let client = make_client().await;
        match client.list_my_recipes().await {
            Ok(list) => recipes.set(list),
            Err(e) => message.set(Some((Severity::Error, e.to_string()))),
        }
        loading.set(false);
    });

    let filter = RecipeFilter {
        search: search(),
        difficulty: None,
        visibility: match visibility().as_str() {
            "public" => Some(true),
            "private" => Some(false),
            _ => None,
        },
        sort: sort(),
    };
    let all = recipes();
    let filtered = filter.apply(&all);
    let total = all.len();
    let publics = browse::public_count(&all);
    let average = format!("{:.1}", browse::average_rating(&all));
    let favourites = browse::favourite_count(&all);

    let toggle_share = move |recipe: Recipe| {
        spawn(async move {
            let client = make_client().await;
            match client.toggle_share(recipe.id).await {
                Ok(()) => {
                    let mut updated = recipe;
                    updated.is_public = !updated.is_public;
                    let note = if updated.is_public {
                        "Receta compartida con la comunidad"
                    } else {
                        "Receta marcada como privada"
                    };
                    upsert_by_id(&mut recipes.write(), updated, |r| r.id);
                    message.set(Some((Severity::Success, note.into())));
                }
                Err(e) => message.set(Some((Severity::Error, e.to_string()))),
            }
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            let Some(recipe) = pending_delete() else {
                return;
            };
            pending_delete.set(None);
            let client = make_client().await;
            match client.delete_recipe(recipe.id).await {
                Ok(()) => {
                    remove_by_id(&mut recipes.write(), recipe.id, |r| r.id);
                    message.set(Some((Severity::Success, "Receta eliminada correctamente".into())));
                }
                Err(e) => message.set(Some((Severity::Error, e.to_string()))),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                h1 { "Mis Recetas" }
                Link { to: Route::CreateAi {}, class: "btn btn-primary", "Crear receta" }
            }

            if let Some((severity, text)) = message() {
                MessageBanner { severity, text }
            }

            div {
                class: "stats-bar",
                div {
                    class: "stat",
                    span { class: "stat-value", "{total}" }
                    span { class: "stat-label", "Recetas" }
                }
                div {
                    class: "stat",
                    span { class: "stat-value", "{publics}" }
                    span { class: "stat-label", "Públicas" }
                }
                div {
                    class: "stat",
                    span { class: "stat-value", "{average}" }
                    span { class: "stat-label", "Valoración media" }
                }
                div {
                    class: "stat",
                    span { class: "stat-value", "{favourites}" }
                    span { class: "stat-label", "Favoritas" }
                }
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
                    onchange: move |evt| visibility.set(evt.value()),
                    option { value: "", selected: visibility().is_empty(), "Todas" }
                    option { value: "public", selected: visibility() == "public", "Públicas" }
                    option { value: "private", selected: visibility() == "private", "Privadas" }
                }
                select {
                    onchange: move |evt| sort.set(SortBy::from_key(&evt.value())),
                    for option_sort in [SortBy::Newest, SortBy::Rating, SortBy::Time, SortBy::Name] {
                        option {
                            key: "{option_sort.key()}",
                            value: "{option_sort.key()}",
                            selected: sort() == option_sort,
                            "{option_sort.label()}"
                        }
                    }
                }
            }

            if loading() {
                Spinner {}
            } else if filtered.is_empty() {
                div { class: "empty-state", p { "No hay recetas que mostrar." } }
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
                                Link {
                                    to: Route::RecipeEdit { id: recipe.id },
                                    class: "btn btn-small",
                                    "Editar"
                                }
                                button {
                                    class: "btn btn-small",
                                    onclick: {
                                        let recipe = recipe.clone();
                                        move |_| toggle_share(recipe.clone())
                                    },
                                    if recipe.is_public { "Hacer privada" } else { "Compartir" }
                                }
                                button {
                                    class: "btn btn-small btn-danger",
                                    onclick: {
                                        let recipe = recipe.clone();
                                        move |_| pending_delete.set(Some(recipe.clone()))
                                    },
                                    "Eliminar"
                                }
                            },
                        }
                    }
                }
            }

            if let Some(recipe) = pending_delete() {
                ConfirmDialog {
                    title: "Confirmar eliminación",
                    message: format!("¿Estás seguro de que deseas eliminar \"{}\"?", recipe.name),
                    on_accept: handle_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
