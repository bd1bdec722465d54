use super::{repository::SignupRepository, utils::SignupFormState};
use crate::api::{ApiClient, ApiError, SignupRequest};
use crate::utils::dialog;
use leptos::*;
use log::error;
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupViewModel {
    pub form: SignupFormState,
    pub is_form_valid: Signal<bool>,
    pub submit_action: Action<SignupRequest, Result<(), ApiError>>,
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignupRepository::new_with_client(Rc::new(api));

    let form = SignupFormState::default();
    let is_form_valid = Signal::derive(move || form.is_valid());

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |request: &SignupRequest| {
        let repo = repo_for_submit.clone();
        let payload = request.clone();
        async move { repo.signup(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => {
                    let _ = dialog::alert("회원가입이 완료되었습니다.");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => {
                    error!("Signup failed: {}", err);
                    let _ = dialog::alert(&err.to_string());
                }
            }
        }
    });

    SignupViewModel {
        form,
        is_form_valid,
        submit_action,
    }
}
