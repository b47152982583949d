//! Authenticated landing: greeting plus the six most recent own recipes.

use dioxus::prelude::*;

use api::Recipe;
use ui::{make_client, use_require_auth, RecipeCard, Spinner};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_require_auth();
    let mut recipes = use_signal(Vec::<Recipe>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let client = make_client().await;
        match client.list_my_recipes().await {
            Ok(mut list) => {
                list.sort_by(|a, b| b.id.cmp(&a.id));
                list.truncate(6);
                recipes.set(list);
            }
            Err(e) => tracing::error!("cargando recetas del panel: {e}"),
        }
        loading.set(false);
    });

    let greeting = session()
        .user
        .map(|u| format!("Hola, {}", u.display_name()))
        .unwrap_or_else(|| "Hola".to_string());

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                h1 { "{greeting}" }
                p { "¿Qué cocinamos hoy?" }
            }

            div {
                class: "quick-actions",
                Link { to: Route::CreateAi {}, class: "btn btn-primary", "Crear receta con IA" }
                Link { to: Route::MyRecipes {}, class: "btn btn-secondary", "Mis recetas" }
                Link { to: Route::Community {}, class: "btn btn-secondary", "Comunidad" }
            }

            h2 { "Tus recetas recientes" }
            if loading() {
                Spinner {}
            } else if recipes().is_empty() {
                div {
                    class: "empty-state",
                    p { "Todavía no tienes recetas." }
                    Link { to: Route::CreateAi {}, class: "btn btn-primary", "Crea la primera" }
                }
            } else {
                div {
                    class: "card-grid",
                    for recipe in recipes() {
                        RecipeCard {
                            key: "{recipe.id}",
                            recipe: recipe.clone(),
                            actions: rsx! {
                                Link {
                                    to: Route::RecipeDetail { id: recipe.id },
                                    class: "btn btn-small",
                                    "Ver"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
