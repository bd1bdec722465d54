use leptos::*;

// Landing target for "Back to Login" and post-signup navigation. Session
// establishment lives in a separate part of the product.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Log in to VirusDecode"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "계정이 없으신가요?"
                    </p>
                </div>
                <div class="text-sm text-center">
                    <a href="/signup" class="font-medium text-link hover:text-link-hover">
                        "Sign up"
                    </a>
                </div>
            </div>
        </div>
    }
}
