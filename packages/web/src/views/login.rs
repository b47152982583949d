//! Login page with the email/password form.

use dioxus::prelude::*;

use ui::{establish_session, make_client, use_session, MessageBanner, Severity};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // Already logged in: straight to the dashboard.
    if !session().loading && session().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

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

            loading.set(true);
            let client = make_client().await;
            match client.login(&e, &p).await {
                Ok(auth) => {
                    establish_session(session, &auth).await;
                    nav.push(Route::Dashboard {});
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
            h1 { "Iniciar sesión" }
            p { class: "auth-subtitle", "Accede a tu cuenta de Lunch4Less" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    MessageBanner { severity: Severity::Error, text: err }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Contraseña",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Entrando..." } else { "Entrar" }
                }
            }

            p {
                class: "auth-switch",
                "¿No tienes cuenta? "
                Link { to: Route::Signup {}, "Regístrate" }
            }
        }
    }
}
