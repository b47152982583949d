use dioxus::prelude::*;

use ui::icons::{FaBookOpen, FaUsers, FaWandMagicSparkles};
use ui::{use_session, Icon};

use crate::Route;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "hero",
            h1 { "Cocina más, gasta menos" }
            p {
                class: "hero-subtitle",
                "Elige tus ingredientes, fija tu presupuesto y deja que la IA \
                 cree una receta a tu medida."
            }
            div {
                class: "hero-actions",
                if session().is_authenticated() {
                    Link { to: Route::CreateAi {}, class: "btn btn-primary", "Crear receta con IA" }
                    Link { to: Route::Dashboard {}, class: "btn btn-secondary", "Ir a mi panel" }
                } else {
                    Link { to: Route::Signup {}, class: "btn btn-primary", "Crear cuenta" }
                    Link { to: Route::Community {}, class: "btn btn-secondary", "Ver la comunidad" }
                }
            }
        }

        div {
            class: "feature-grid",
            div {
                class: "feature",
                Icon { width: 28, height: 28, icon: FaWandMagicSparkles }
                h3 { "Recetas con IA" }
                p { "Genera recetas con los ingredientes que ya tienes, dentro de tu presupuesto." }
            }
            div {
                class: "feature",
                Icon { width: 28, height: 28, icon: FaBookOpen }
                h3 { "Tu recetario" }
                p { "Guarda, edita y organiza tus recetas con fotos e ingredientes." }
            }
            div {
                class: "feature",
                Icon { width: 28, height: 28, icon: FaUsers }
                h3 { "Comunidad" }
                p { "Comparte tus recetas públicas y valora las del resto." }
            }
        }
    }
}
