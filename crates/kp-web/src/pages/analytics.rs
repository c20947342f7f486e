//! Institution analytics

use crate::app::SharedAnalytics;
use crate::components::{AppHeader, StatCardView};
use crate::theme::use_theme;
use kp_core::analytics::{severity_counts, Severity, TrendSummary};
use kp_core::Role;
use leptos::*;

fn severity_badge(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "px-2 py-1 text-xs font-medium rounded-full bg-red-100 text-red-700",
        Severity::Medium => "px-2 py-1 text-xs font-medium rounded-full bg-yellow-100 text-yellow-700",
        Severity::Low => "px-2 py-1 text-xs font-medium rounded-full bg-green-100 text-green-700",
    }
}

#[component]
pub fn AnalyticsPage(
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();
    let analytics = expect_context::<SharedAnalytics>();

    let kpis = analytics.kpis();
    let months = analytics.monthly_trends();
    let attempts = analytics.fraud_attempts();
    let breakdown = analytics.fraud_breakdown();

    let summary = TrendSummary::from_months(&months);
    let counts = severity_counts(&attempts);
    let busiest = months.iter().map(|m| m.verifications).max().unwrap_or(0).max(1);

    view! {
        <div>
            <AppHeader
                title="Analytics Dashboard"
                subtitle="Fraud detection and verification insights"
                role=Role::Institution
                on_back=on_back
                on_logout=on_logout
            />

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {kpis.into_iter().map(|stat| view! { <StatCardView stat/> }).collect_view()}
                </div>

                <div class=move || format!("{} p-6", theme.get().card)>
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-xl font-semibold text-gray-900">"Monthly Verification Trends"</h3>
                        <p class="text-sm text-gray-500">
                            {format!(
                                "{} verifications, {:.1} fraud attempts per 1,000, peak in {}",
                                summary.total_verifications,
                                summary.fraud_per_thousand(),
                                summary.peak_month.clone().unwrap_or_else(|| "n/a".to_string()),
                            )}
                        </p>
                    </div>
                    <div class="space-y-3">
                        {months.into_iter().map(|month| {
                            let width = f64::from(month.verifications) * 100.0 / f64::from(busiest);
                            view! {
                                <div class="grid grid-cols-12 items-center gap-3 text-sm">
                                    <span class="col-span-1 font-medium text-gray-700">{month.month}</span>
                                    <div class="col-span-7 h-3 bg-gray-100 rounded-full overflow-hidden">
                                        <div
                                            class=move || format!("h-3 rounded-full {}", theme.get().icon_bg)
                                            style=format!("width: {:.1}%", width)
                                        ></div>
                                    </div>
                                    <span class="col-span-2 text-right text-gray-900">{month.verifications}</span>
                                    <span class="col-span-1 text-right text-red-600">{month.fraud_attempts}</span>
                                    <span class="col-span-1 text-right text-green-600">
                                        {format!("{:.1}%", month.success_rate)}
                                    </span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="grid lg:grid-cols-2 gap-8">
                    <div class=move || format!("{} p-6", theme.get().card)>
                        <div class="flex items-center justify-between mb-4">
                            <h3 class="text-xl font-semibold text-gray-900">"Recent Fraud Attempts"</h3>
                            <div class="flex space-x-2">
                                {counts.into_iter().rev().map(|(severity, count)| view! {
                                    <span class=severity_badge(severity)>{format!("{} {}", count, severity)}</span>
                                }).collect_view()}
                            </div>
                        </div>
                        <div class="space-y-3">
                            {attempts.into_iter().map(|attempt| view! {
                                <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                    <div>
                                        <p class="font-medium text-gray-900">{attempt.kind}</p>
                                        <p class="text-sm text-gray-500">{attempt.certificate}</p>
                                    </div>
                                    <div class="text-right space-y-1">
                                        <span class=severity_badge(attempt.severity)>{attempt.severity.to_string()}</span>
                                        <p class="text-xs text-gray-400">{attempt.time}</p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class=move || format!("{} p-6", theme.get().card)>
                        <h3 class="text-xl font-semibold text-gray-900 mb-4">"Fraud Types"</h3>
                        <div class="space-y-4">
                            {breakdown.into_iter().map(|category| view! {
                                <div>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span class="font-medium text-gray-900">{category.name}</span>
                                        <span class="text-gray-600">{format!("{}%", category.share_percent)}</span>
                                    </div>
                                    <div class="h-2 bg-gray-100 rounded-full overflow-hidden">
                                        <div
                                            class="h-2 bg-red-400 rounded-full"
                                            style=format!("width: {}%", category.share_percent)
                                        ></div>
                                    </div>
                                    <p class="text-xs text-gray-500 mt-1">{category.description}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
