//! Page header shared by the signed-in views

use crate::theme::use_theme;
use kp_core::Role;
use leptos::*;

#[component]
pub fn AppHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] role: Option<Role>,
    #[prop(optional, into)] on_back: Option<Callback<()>>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <header class=move || theme.get().header_bg>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-4">
                        {on_back.map(|on_back| view! {
                            <button
                                class="p-2 rounded-lg text-gray-500 hover:text-gray-700 hover:bg-gray-100"
                                on:click=move |_| on_back.call(())
                            >
                                "←"
                            </button>
                        })}
                        <div>
                            <h1 class=move || theme.get().brand_text>{title}</h1>
                            {subtitle.map(|subtitle| view! {
                                <p class="text-sm text-gray-500">{subtitle}</p>
                            })}
                        </div>
                    </div>
                    <div class="flex items-center space-x-4">
                        {role.map(|role| view! {
                            <span class="px-3 py-1 rounded-full bg-green-100 text-sm font-medium text-green-700">
                                {role.label()}
                            </span>
                        })}
                        <button
                            class="p-2 rounded-lg text-red-600 hover:bg-red-50"
                            on:click=move |_| on_logout.call(())
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
