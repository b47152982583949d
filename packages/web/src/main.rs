use dioxus::prelude::*;

use ui::{Navbar, SessionProvider};
use views::{
    Categories, Community, CreateAi, Dashboard, Home, Ingredients, Login, MyRecipes,
    RecipeDetail, RecipeEdit, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/community")]
    Community {},
    #[route("/auth/login")]
    Login {},
    #[route("/auth/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/ingredients")]
    Ingredients {},
    #[route("/categories")]
    Categories {},
    #[route("/recipes/my")]
    MyRecipes {},
    #[route("/recipes/create-ai")]
    CreateAi {},
    #[route("/recipes/:id")]
    RecipeDetail { id: i64 },
    #[route("/recipes/:id/edit")]
    RecipeEdit { id: i64 },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation shell: the navbar with session-conditioned links, then the
/// routed view.
#[component]
fn Shell() -> Element {
    let session = ui::use_session();

    rsx! {
        Navbar {
            if session().is_authenticated() {
                Link { to: Route::Dashboard {}, class: "nav-link", "Inicio" }
                Link { to: Route::MyRecipes {}, class: "nav-link", "Mis Recetas" }
                Link { to: Route::CreateAi {}, class: "nav-link", "Crear Receta" }
                Link { to: Route::Ingredients {}, class: "nav-link", "Ingredientes" }
                Link { to: Route::Categories {}, class: "nav-link", "Categorías" }
                Link { to: Route::Community {}, class: "nav-link", "Comunidad" }
            } else {
                Link { to: Route::Home {}, class: "nav-link", "Inicio" }
                Link { to: Route::Community {}, class: "nav-link", "Comunidad" }
                Link { to: Route::Login {}, class: "nav-link", "Iniciar sesión" }
                Link { to: Route::Signup {}, class: "nav-link nav-link-cta", "Registrarse" }
            }
        }
        Outlet::<Route> {}
    }
}

/// Unknown paths land on the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("ruta desconocida: /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
