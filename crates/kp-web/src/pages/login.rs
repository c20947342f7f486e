//! Sign-in and registration page

use crate::theme::use_theme;
use kp_core::account::DEMO_CREDENTIALS;
use kp_core::{LoginForm, Role};
use leptos::*;

#[component]
pub fn LoginPage(
    #[prop(into)] on_login: Callback<Role>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();
    let form = create_rw_signal(LoginForm::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(LoginForm::submit) {
            Ok(role) => on_login.call(role),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let input_type = move || {
        if form.with(|f| f.show_password) {
            "text"
        } else {
            "password"
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md space-y-6">
                <button
                    class="flex items-center text-gray-500 hover:text-gray-800"
                    on:click=move |_| on_back.call(())
                >
                    "← Back to Home"
                </button>

                <div class=move || format!("{} p-8 space-y-6", theme.get().card)>
                    // Role toggle
                    <div class="grid grid-cols-2 gap-2 p-1 bg-gray-100 rounded-xl">
                        {Role::ALL.into_iter().map(|role| view! {
                            <button
                                type="button"
                                class=move || if form.with(|f| f.role == role) {
                                    "px-6 py-3 rounded-lg font-medium bg-white text-blue-600 shadow-md"
                                } else {
                                    "px-6 py-3 rounded-lg font-medium text-gray-600 hover:text-blue-600"
                                }
                                on:click=move |_| form.update(|f| f.role = role)
                            >
                                {role.label()}
                            </button>
                        }).collect_view()}
                    </div>

                    <div class="text-center">
                        <h2 class="text-3xl font-bold text-gray-900 mb-2">
                            {move || form.with(|f| f.mode.title())}
                        </h2>
                        <p class="text-gray-600">
                            {move || if form.with(|f| f.needs_confirmation()) {
                                format!("Join {} today", theme.get().brand)
                            } else {
                                "Sign in to your account".to_string()
                            }}
                        </p>
                    </div>

                    <form on:submit=on_submit class="space-y-4">
                        <Show when=move || form.with(LoginForm::needs_institution_name)>
                            <label class="block text-sm font-medium text-gray-700">"Institution Name"</label>
                            <input
                                type="text"
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-xl"
                                placeholder="Enter institution name"
                                on:input=move |ev| form.update(|f| f.institution_name = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.institution_name.clone())
                            />
                        </Show>

                        <label class="block text-sm font-medium text-gray-700">"Email Address"</label>
                        <input
                            type="email"
                            required
                            class="w-full px-4 py-3 border border-gray-300 rounded-xl"
                            placeholder="Enter your email"
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            prop:value=move || form.with(|f| f.email.clone())
                        />

                        <label class="block text-sm font-medium text-gray-700">"Password"</label>
                        <div class="relative">
                            <input
                                type=input_type
                                required
                                class="w-full px-4 pr-16 py-3 border border-gray-300 rounded-xl"
                                placeholder="Enter your password"
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.password.clone())
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-sm text-gray-400 hover:text-gray-600"
                                on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                            >
                                {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                            </button>
                        </div>

                        <Show when=move || form.with(LoginForm::needs_confirmation)>
                            <label class="block text-sm font-medium text-gray-700">"Confirm Password"</label>
                            <input
                                type=input_type
                                required
                                class="w-full px-4 py-3 border border-gray-300 rounded-xl"
                                placeholder="Confirm your password"
                                on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.confirm_password.clone())
                            />
                        </Show>

                        {move || error.get().map(|message| view! {
                            <p class="text-sm text-red-600">{message}</p>
                        })}

                        <button
                            type="submit"
                            class=move || format!("w-full py-3 px-6 text-lg {}", theme.get().primary_button)
                        >
                            {move || form.with(|f| f.mode.submit_label())}
                        </button>
                    </form>

                    <p class="text-center text-gray-600">
                        {move || if form.with(|f| f.needs_confirmation()) {
                            "Already have an account? "
                        } else {
                            "Don't have an account? "
                        }}
                        <button
                            class="text-blue-600 hover:text-blue-700 font-medium"
                            on:click=move |_| {
                                set_error.set(None);
                                form.update(LoginForm::toggle_mode);
                            }
                        >
                            {move || if form.with(|f| f.needs_confirmation()) { "Sign In" } else { "Sign Up" }}
                        </button>
                    </p>

                    <div class="p-4 bg-gray-50 rounded-xl">
                        <p class="text-sm text-gray-600 text-center mb-3">"Demo Credentials:"</p>
                        <div class="grid grid-cols-2 gap-4 text-xs">
                            {DEMO_CREDENTIALS.into_iter().zip(Role::ALL).map(|((label, email, password), role)| view! {
                                <button
                                    type="button"
                                    class="text-left hover:bg-white rounded p-2"
                                    on:click=move |_| form.update(|f| f.fill_demo(role))
                                >
                                    <p class="font-medium">{label}</p>
                                    <p class="text-gray-500">{format!("{} / {}", email, password)}</p>
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
