use crate::pages::signup::utils::SignupFormState;
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    *,
};
use web_sys::HtmlInputElement;

#[component]
pub fn SignupForm(
    form: SignupFormState,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
    on_back: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign up to VirusDecode"
                    </h2>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm space-y-3">
                        <div class="grid grid-cols-2 gap-3">
                            <div>
                                <label for="firstName" class="sr-only">"First Name"</label>
                                <input
                                    id="firstName"
                                    name="firstName"
                                    type="text"
                                    class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                    placeholder="First Name"
                                    prop:value=form.first_name
                                    on:input=move |ev| {
                                        let target = event_target::<HtmlInputElement>(&ev);
                                        form.first_name.set(target.value());
                                    }
                                />
                            </div>
                            <div>
                                <label for="lastName" class="sr-only">"Last Name"</label>
                                <input
                                    id="lastName"
                                    name="lastName"
                                    type="text"
                                    class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                    placeholder="Last Name"
                                    prop:value=form.last_name
                                    on:input=move |ev| {
                                        let target = event_target::<HtmlInputElement>(&ev);
                                        form.last_name.set(target.value());
                                    }
                                />
                            </div>
                        </div>
                        <div>
                            <label for="id" class="sr-only">"ID"</label>
                            <input
                                id="id"
                                name="id"
                                type="text"
                                class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                placeholder="ID"
                                prop:value=form.login_id
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.login_id.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=form.password
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.password.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="cPassword" class="sr-only">"Confirm Password"</label>
                            <input
                                id="cPassword"
                                name="cPassword"
                                type="password"
                                class="appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm"
                                placeholder="Confirm Password"
                                prop:value=form.confirm_password
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.confirm_password.set(target.value());
                                }
                            />
                        </div>
                    </div>

                    <div>
                        <button
                            type="submit"
                            disabled=pending
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                        >
                            {move || if pending.get() { "Signing up..." } else { "Signup" }}
                        </button>
                    </div>
                </form>
                <button
                    type="button"
                    class="w-full flex justify-center py-2 px-4 text-sm font-medium text-link hover:text-link-hover"
                    on:click=move |ev| on_back.call(ev)
                >
                    "Back to Login"
                </button>
            </div>
        </div>
    }
}
