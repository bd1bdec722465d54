use super::{components::form::SignupForm, view_model::use_signup_view_model};
use crate::utils::dialog;
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    Callback, *,
};

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let form = vm.form;
    let is_form_valid = vm.is_form_valid;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if !is_form_valid.get_untracked() {
            let _ = dialog::alert("모든 필드를 올바르게 입력해 주세요.");
            return;
        }
        submit_action.dispatch(form.to_request());
    });

    let handle_back = Callback::new(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    });

    view! {
        <SignupForm
            form=form
            pending=pending
            on_submit=handle_submit
            on_back=handle_back
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn signup_panel_renders_all_fields_and_controls() {
        let html = render_to_string(|| view! { <SignupPanel /> });
        assert!(html.contains("Sign up to VirusDecode"));
        for name in ["firstName", "lastName", "id", "password", "cPassword"] {
            assert!(
                html.contains(&format!("name=\"{}\"", name)),
                "missing input named {}",
                name
            );
        }
        assert!(html.contains("Signup"));
        assert!(html.contains("Back to Login"));
    }
}
