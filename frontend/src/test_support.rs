use leptos::*;

use crate::pages::signup::utils::SignupFormState;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// A form state that passes every client-side check. Call inside a runtime.
pub fn filled_signup_form() -> SignupFormState {
    let form = SignupFormState::default();
    form.first_name.set("Jane".into());
    form.last_name.set("Doe".into());
    form.login_id.set("jdoe".into());
    form.password.set("hunter2".into());
    form.confirm_password.set("hunter2".into());
    form
}
