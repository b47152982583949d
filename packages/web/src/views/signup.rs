//! Registration page. Account creation is backend-owned; on success the
//! visitor is sent to the login form.

use dioxus::prelude::*;

use ui::{make_client, use_session, MessageBanner, Severity};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut done = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    if !session().loading && session().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let ln = last_name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() || ln.is_empty() {
                error.set(Some("Nombre y apellidos son obligatorios".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Introduce un email válido".to_string()));
                return;
            }
            if p.chars().count() < 6 {
                error.set(Some(
                    "La contraseña debe tener al menos 6 caracteres".to_string(),
                ));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Las contraseñas no coinciden".to_string()));
                return;
            }

            loading.set(true);
            let client = make_client().await;
            match client.signup(&n, &ln, &e, &p).await {
                Ok(()) => {
                    done.set(true);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Crear cuenta" }
            p { class: "auth-subtitle", "Únete a Lunch4Less" }

            if done() {
                MessageBanner {
                    severity: Severity::Success,
                    text: "Cuenta creada exitosamente. Ya puedes iniciar sesión.",
                }
                Link { to: Route::Login {}, class: "btn btn-primary", "Ir a iniciar sesión" }
            } else {
                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        MessageBanner { severity: Severity::Error, text: err }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Nombre",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Apellidos",
                        value: last_name(),
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Contraseña (mínimo 6 caracteres)",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Confirmar contraseña",
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creando cuenta..." } else { "Registrarse" }
                    }
                }

                p {
                    class: "auth-switch",
                    "¿Ya tienes cuenta? "
                    Link { to: Route::Login {}, "Inicia sesión" }
                }
            }
        }
    }
}
