//! Landing page

use crate::theme::use_theme;
use leptos::*;

const FEATURES: [(&str, &str); 6] = [
    ("AI Forgery Catcher", "Flags edited photos, seals and grades before a certificate is trusted."),
    ("Blockchain Seal of Trust", "Every issued certificate carries a tamper-evident seal."),
    ("Dual Dashboards", "Separate workspaces for certificate holders and issuing institutions."),
    ("API Integration", "Plug verification into admissions and hiring pipelines."),
    ("Real-Time Validation", "Results in seconds instead of days of manual checks."),
    ("Analytics & Reports", "Track verification volume and fraud attempts over time."),
];

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("12,847", "Certificates verified"),
    ("98.4%", "Success rate"),
    ("181", "Fraud attempts blocked"),
    ("4,291", "Active users"),
];

#[component]
pub fn LandingPage(#[prop(into)] on_get_started: Callback<()>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div>
            <header class=move || theme.get().header_bg>
                <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-16">
                    <span class=move || theme.get().brand_text>{move || theme.get().brand}</span>
                    <div class="flex items-center space-x-4">
                        <button
                            class="text-sm text-gray-500 hover:text-gray-700"
                            title="Switch theme"
                            on:click=move |_| theme.update(|t| *t = t.next())
                        >
                            "Theme"
                        </button>
                        <button
                            class=move || format!("px-4 py-2 {}", theme.get().primary_button)
                            on:click=move |_| on_get_started.call(())
                        >
                            "Sign In"
                        </button>
                    </div>
                </div>
            </header>

            <section class="max-w-5xl mx-auto px-4 py-20 text-center">
                <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                    "Verify Certificates in Seconds"
                </h1>
                <p class="text-xl text-gray-600 mb-10">
                    "Upload a degree, diploma or mark sheet and get an instant authenticity check."
                </p>
                <button
                    class=move || format!("px-8 py-4 text-lg {}", theme.get().primary_button)
                    on:click=move |_| on_get_started.call(())
                >
                    "Get Started"
                </button>
            </section>

            <section class="max-w-7xl mx-auto px-4 pb-16">
                <div class="grid md:grid-cols-3 gap-6">
                    {FEATURES.into_iter().map(|(title, description)| view! {
                        <div class=move || format!("{} p-6", theme.get().card)>
                            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
                            <p class="text-gray-600">{description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="bg-white py-16">
                <div class="max-w-5xl mx-auto px-4 grid grid-cols-2 md:grid-cols-4 gap-8">
                    {HIGHLIGHTS.into_iter().map(|(value, label)| view! {
                        <div class="text-center">
                            <div class="text-4xl font-bold text-gray-900">{value}</div>
                            <div class="text-gray-600 mt-1">{label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <footer class="py-8 text-center text-sm text-gray-500">
                {move || format!("© 2024 {}. Verification results on this site are simulated.", theme.get().brand)}
            </footer>
        </div>
    }
}
