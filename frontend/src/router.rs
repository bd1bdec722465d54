use leptos::*;
use leptos_router::*;

use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/signup"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/login" view=LoginPage/>
                <Route path="/signup" view=SignupPage/>
            </Routes>
        </Router>
    }
}
