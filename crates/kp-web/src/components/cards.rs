//! Card components for dashboard and analytics pages

use crate::theme::use_theme;
use kp_core::analytics::{ActivityEntry, ActivityStatus, StatCard};
use leptos::*;

#[component]
pub fn StatCardView(stat: StatCard) -> impl IntoView {
    let theme = use_theme();
    let change_class = match stat.change.as_deref() {
        Some(change) if change.starts_with('-') => "text-sm font-medium text-red-600",
        _ => "text-sm font-medium text-green-600",
    };

    view! {
        <div class=move || format!("{} p-6", theme.get().card)>
            <p class="text-sm text-gray-500">{stat.label}</p>
            <div class="flex items-baseline justify-between mt-2">
                <p class="text-2xl font-bold text-gray-900">{stat.value}</p>
                {stat.change.map(|change| view! { <span class=change_class>{change}</span> })}
            </div>
        </div>
    }
}

#[component]
pub fn StatusDot(status: ActivityStatus) -> impl IntoView {
    let color = match status {
        ActivityStatus::Success => "bg-green-500",
        ActivityStatus::Error => "bg-red-500",
        ActivityStatus::Blocked => "bg-orange-500",
        ActivityStatus::Pending => "bg-yellow-500",
    };

    view! {
        <span class=format!("inline-block w-3 h-3 rounded-full {}", color) title=status.to_string()></span>
    }
}

#[component]
pub fn ActivityRow(entry: ActivityEntry) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 rounded-lg bg-gray-50">
            <div class="flex items-center space-x-3">
                <StatusDot status=entry.status/>
                <div>
                    <p class="font-medium text-gray-900">{entry.action}</p>
                    <p class="text-sm text-gray-500">{entry.detail}</p>
                </div>
            </div>
            <span class="text-sm text-gray-400">{entry.time}</span>
        </div>
    }
}
