//! Role dashboard

use crate::app::SharedAnalytics;
use crate::components::{ActivityRow, AppHeader, StatCardView};
use crate::theme::use_theme;
use kp_core::{Page, Role};
use leptos::*;

#[component]
pub fn DashboardPage(
    role: Role,
    #[prop(into)] on_navigate: Callback<Page>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();
    let analytics = expect_context::<SharedAnalytics>();

    let profile = analytics.profile(role);
    let stats = analytics.dashboard_stats(role);
    let actions = analytics.quick_actions(role);
    let activity = analytics.recent_activity(role);
    let status = analytics.system_status();

    let subtitle = match role {
        Role::User => "User Dashboard",
        Role::Institution => "Institution Dashboard",
    };

    view! {
        <div>
            <AppHeader
                title=profile.display_name.clone()
                subtitle=subtitle
                role=role
                on_logout=on_logout
            />

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <div>
                    <h2 class=move || theme.get().heading>
                        "Welcome back, " {profile.greeting_name} "!"
                    </h2>
                    <p class="text-lg text-gray-600 mt-2">{profile.tagline}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {stats.into_iter().map(|stat| view! { <StatCardView stat/> }).collect_view()}
                </div>

                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-8">
                        <div class=move || format!("{} p-6", theme.get().card)>
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">"Quick Actions"</h3>
                            <div class="grid md:grid-cols-3 gap-4">
                                {actions.into_iter().map(|action| {
                                    let target = action.target;
                                    view! {
                                        <button
                                            class="p-4 text-left rounded-xl border border-gray-200 hover:shadow-md disabled:opacity-50 disabled:cursor-not-allowed"
                                            disabled=target.is_none()
                                            title=if target.is_none() { "Coming soon" } else { "" }
                                            on:click=move |_| {
                                                if let Some(page) = target {
                                                    on_navigate.call(page);
                                                }
                                            }
                                        >
                                            <p class="font-semibold text-gray-900">{action.title}</p>
                                            <p class="text-sm text-gray-500 mt-1">{action.description}</p>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div class=move || format!("{} p-6", theme.get().card)>
                            <h3 class="text-xl font-semibold text-gray-900 mb-4">"Recent Activity"</h3>
                            <div class="space-y-3">
                                {activity.into_iter().map(|entry| view! { <ActivityRow entry/> }).collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || format!("{} p-6", theme.get().card)>
                        <h3 class="text-xl font-semibold text-gray-900 mb-1">"Security Status"</h3>
                        <p class="text-sm text-green-600 mb-4">"All Systems Secure"</p>
                        <dl class="space-y-3">
                            {status.into_iter().map(|item| view! {
                                <div class="flex justify-between">
                                    <dt class="text-gray-500">{item.name}</dt>
                                    <dd class="font-medium text-gray-900">{item.status}</dd>
                                </div>
                            }).collect_view()}
                        </dl>
                    </div>
                </div>
            </div>
        </div>
    }
}
