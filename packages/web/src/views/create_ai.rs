//! The AI recipe creation wizard: select ingredients, set a budget, view the
//! generated result. The step logic lives in [`ui::wizard::WizardState`];
//! this view renders it and issues the generation request.

use dioxus::prelude::*;

use api::Recipe;
use ui::markdown::preview_html;
use ui::wizard::{WizardState, WizardStep, MAX_BUDGET, MIN_INGREDIENTS};
use ui::{make_client, use_require_auth, MessageBanner, Severity, Spinner};

use crate::Route;

/// Character budget for the instructions preview on the result card.
const PREVIEW_CHARS: usize = 280;

#[component]
pub fn CreateAi() -> Element {
    let _session = use_require_auth();
    let mut wizard = use_signal(WizardState::new);
    let mut result = use_signal(|| Option::<Recipe>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut catalog_filter = use_signal(String::new);
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        let client = make_client().await;
        match client.list_products().await {
            Ok(products) => wizard.write().set_catalog(products),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let generate = move |_| {
        let Some(request) = wizard.write().begin_generation() else {
            return;
        };
        error.set(None);
        spawn(async move {
            let client = make_client().await;
            match client
                .generate_recipe(&request.ingredients, request.budget)
                .await
            {
                Ok(recipe) => result.set(Some(recipe)),
                Err(e) => {
                    // Back to the budget step, budget intact: the user can
                    // adjust without re-selecting ingredients.
                    error.set(Some(e.to_string()));
                    wizard.write().generation_failed();
                }
            }
        });
    };

    let state = wizard();
    let step_index = match state.step() {
        WizardStep::SelectIngredients => 0,
        WizardStep::SetBudget => 1,
        WizardStep::Generate => 2,
    };

    let term = catalog_filter().trim().to_lowercase();

    rsx! {
        div {
            class: "page wizard",
            div {
                class: "page-head page-head-center",
                h1 { "Crear Receta con IA" }
                p {
                    "Selecciona tus ingredientes y presupuesto, y deja que la IA \
                     cree una receta perfecta para ti"
                }
            }

            div {
                class: "steps",
                for (index, label) in ["Ingredientes", "Presupuesto", "Generar"].into_iter().enumerate() {
                    div {
                        key: "{label}",
                        class: if index == step_index { "step step-active" } else { "step" },
                        span { class: "step-number", "{index + 1}" }
                        span { "{label}" }
                    }
                }
            }

            if let Some(err) = error() {
                MessageBanner { severity: Severity::Error, text: err }
            }

            {match state.step() {
                WizardStep::SelectIngredients => rsx! {
                    div {
                        class: "wizard-card",
                        h2 { "Selecciona tus Ingredientes" }
                        p { "Elige los ingredientes que tienes disponibles o que te gustaría usar" }

                        input {
                            class: "search-input",
                            r#type: "search",
                            placeholder: "Filtrar ingredientes...",
                            value: catalog_filter(),
                            oninput: move |evt| catalog_filter.set(evt.value()),
                        }

                        div {
                            class: "ingredient-list",
                            for product in state.catalog().iter().filter(|p| {
                                term.is_empty() || p.name.to_lowercase().contains(&term)
                            }) {
                                label {
                                    key: "{product.id}",
                                    class: "ingredient-option",
                                    input {
                                        r#type: "checkbox",
                                        checked: state.is_selected(product.id),
                                        onchange: {
                                            let id = product.id;
                                            move |_| wizard.write().toggle(id)
                                        },
                                    }
                                    span { class: "ingredient-name", "{product.name}" }
                                    span {
                                        class: "ingredient-category",
                                        {product.category_name.clone().unwrap_or_else(|| "Sin categoría".to_string())}
                                    }
                                    span { class: "tag tag-success", {format!("${:.2}", product.price)} }
                                }
                            }
                        }

                        if state.selected_count() > 0 {
                            div {
                                class: "selection-summary",
                                h3 { "Ingredientes Seleccionados:" }
                                div {
                                    class: "chips",
                                    for product in state.selected_products() {
                                        span {
                                            key: "{product.id}",
                                            class: "chip",
                                            {format!("{} - ${:.2}", product.name, product.price)}
                                            button {
                                                r#type: "button",
                                                onclick: {
                                                    let id = product.id;
                                                    move |_| wizard.write().toggle(id)
                                                },
                                                "×"
                                            }
                                        }
                                    }
                                }
                                p {
                                    strong { "Costo base estimado: " }
                                    span { class: "cost", {format!("${:.2}", state.base_cost())} }
                                }
                            }
                        }

                        if !state.selection_valid() {
                            p { class: "field-hint", "Selecciona al menos {MIN_INGREDIENTS} ingredientes" }
                        }

                        div {
                            class: "wizard-actions wizard-actions-end",
                            button {
                                class: "btn btn-primary",
                                disabled: !state.selection_valid(),
                                onclick: move |_| { wizard.write().advance(); },
                                "Siguiente"
                            }
                        }
                    }
                },
                WizardStep::SetBudget => rsx! {
                    div {
                        class: "wizard-card",
                        h2 { "Define tu Presupuesto" }
                        p { "Establece cuánto quieres gastar en tu receta completa" }

                        div {
                            class: "summary-box",
                            h3 { "Resumen de Ingredientes Base" }
                            p {
                                "Has seleccionado {state.chosen().len()} ingredientes con un costo base de "
                                strong { {format!("${:.2}", state.base_cost())} }
                            }
                            div {
                                class: "chips",
                                for product in state.chosen().iter() {
                                    span {
                                        key: "{product.id}",
                                        class: "chip",
                                        "{product.name}"
                                        button {
                                            r#type: "button",
                                            onclick: {
                                                let id = product.id;
                                                move |_| wizard.write().remove_chosen(id)
                                            },
                                            "×"
                                        }
                                    }
                                }
                            }
                        }

                        label { "Presupuesto Total (USD)" }
                        input {
                            r#type: "number",
                            min: "{state.base_cost()}",
                            max: "{MAX_BUDGET}",
                            step: "0.01",
                            value: "{state.budget()}",
                            oninput: move |evt| {
                                if let Ok(budget) = evt.value().parse::<f64>() {
                                    wizard.write().set_budget(budget);
                                }
                            },
                        }
                        p {
                            class: "field-hint",
                            {format!("El presupuesto mínimo es ${:.2} (costo de ingredientes base)", state.base_cost())}
                        }
                        if !state.budget_valid() {
                            p {
                                class: "field-error",
                                {format!("Presupuesto mínimo: ${:.2}", state.base_cost())}
                            }
                        } else {
                            div {
                                class: "info-box",
                                p { {format!("Ingredientes base: ${:.2}", state.base_cost())} }
                                p { {format!("Presupuesto adicional: ${:.2}", state.budget() - state.base_cost())} }
                                p {
                                    class: "info-note",
                                    "La IA podrá sugerir ingredientes adicionales y condimentos dentro de este rango"
                                }
                            }
                        }

                        div {
                            class: "wizard-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| wizard.write().back(),
                                "Anterior"
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: !state.budget_valid(),
                                onclick: generate,
                                "Generar Receta"
                            }
                        }
                    }
                },
                WizardStep::Generate => rsx! {
                    div {
                        class: "wizard-card wizard-card-center",
                        if let Some(recipe) = result() {
                            h2 { "¡Receta Generada!" }
                            p { "Tu receta personalizada está lista" }

                            div {
                                class: "result-card",
                                h3 { "{recipe.name}" }
                                p { "{recipe.description}" }
                                div {
                                    class: "result-meta",
                                    span { "{recipe.preparation_time} min" }
                                    span { "{recipe.servings} personas" }
                                    span { "{recipe.difficulty}" }
                                    span { "Dentro de presupuesto" }
                                }
                                div {
                                    class: "result-preview",
                                    h4 { "Vista previa de instrucciones:" }
                                    div {
                                        class: "markdown-body",
                                        dangerous_inner_html: preview_html(&recipe.instructions, PREVIEW_CHARS),
                                    }
                                }
                            }

                            div {
                                class: "wizard-actions wizard-actions-center",
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| {
                                        if let Some(recipe) = result() {
                                            nav.push(Route::RecipeDetail { id: recipe.id });
                                        }
                                    },
                                    "Ver Receta Completa"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| {
                                        wizard.write().reset();
                                        result.set(None);
                                        error.set(None);
                                    },
                                    "Generar Otra"
                                }
                            }
                        } else {
                            Spinner {}
                            h2 { "Generando tu receta..." }
                            p { "Nuestra IA está creando una receta personalizada con tus ingredientes y presupuesto" }
                            div {
                                class: "info-box",
                                p {
                                    strong { "Procesando: " }
                                    {format!(
                                        "{} ingredientes con presupuesto de ${:.2}",
                                        state.chosen().len(),
                                        state.budget()
                                    )}
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
