use crate::api::SignupRequest;
use leptos::*;

/// Reactive state behind the five signup inputs. Created when the panel
/// mounts, dropped when the user navigates away.
#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub login_id: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            login_id: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
        }
    }
}

impl SignupFormState {
    /// Tracked read, so a derived signal recomputes on any field edit.
    pub fn is_valid(&self) -> bool {
        form_is_valid(
            &self.first_name.get(),
            &self.last_name.get(),
            &self.login_id.get(),
            &self.password.get(),
            &self.confirm_password.get(),
        )
    }

    /// Snapshot for submission. The confirmation field stays behind.
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            login_id: self.login_id.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

/// Every field present (no trimming) and the two passwords equal.
pub fn form_is_valid(
    first_name: &str,
    last_name: &str,
    login_id: &str,
    password: &str,
    confirm_password: &str,
) -> bool {
    !first_name.is_empty()
        && !last_name.is_empty()
        && !login_id.is_empty()
        && !password.is_empty()
        && !confirm_password.is_empty()
        && password == confirm_password
}
