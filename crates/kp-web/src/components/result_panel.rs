//! Verification result panel

use crate::theme::use_theme;
use kp_core::report::{generate_report, report_file_name, ReportFormat};
use kp_core::VerificationResult;
use leptos::*;

#[component]
pub fn ResultPanel(
    result: VerificationResult,
    #[prop(into)] on_verify_another: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();

    let format = ReportFormat::Markdown;
    let report = generate_report(&result, format).unwrap_or_default();
    let report_href = format!(
        "data:{};charset=utf-8,{}",
        format.mime_type(),
        String::from(js_sys::encode_uri_component(&report))
    );
    let report_name = report_file_name(&result, format);

    let (border, badge, headline_class) = if result.is_valid {
        ("border-green-200", "bg-green-100 text-green-600", "text-xl font-bold text-green-700")
    } else {
        ("border-red-200", "bg-red-100 text-red-600", "text-xl font-bold text-red-700")
    };
    let summary = if result.is_valid {
        "This certificate appears authentic and valid"
    } else {
        "This certificate could not be verified"
    };

    view! {
        <div class=move || format!("{} {} border p-8", theme.get().card, border)>
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center space-x-3">
                    <div class=format!("w-12 h-12 rounded-full flex items-center justify-center {}", badge)>
                        {if result.is_valid { "✓" } else { "✗" }}
                    </div>
                    <div>
                        <h3 class=headline_class>{result.headline()}</h3>
                        <p class="text-gray-600">{summary}</p>
                    </div>
                </div>
                <div class="text-right">
                    <p class="text-sm text-gray-500">"Confidence"</p>
                    <p class="text-2xl font-bold text-gray-900">{result.confidence} "%"</p>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-3 mb-6">
                {result.checks.iter().map(|check| {
                    let (class, label) = if check.passed {
                        ("p-3 rounded-lg bg-green-50 border border-green-200", "PASS")
                    } else {
                        ("p-3 rounded-lg bg-red-50 border border-red-200", "FAIL")
                    };
                    view! {
                        <div class=class>
                            <div class="flex items-center justify-between">
                                <span class="font-medium">{check.label.clone()}</span>
                                <span class=if check.passed { "text-green-600" } else { "text-red-600" }>{label}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <dl class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {result.metadata.iter().map(|field| view! {
                    <div class="p-4 bg-gray-50 rounded-lg">
                        <dt class="font-medium text-gray-700 mb-1">{field.label.clone()}</dt>
                        <dd class="text-lg font-semibold text-gray-900">{field.value.clone()}</dd>
                    </div>
                }).collect_view()}
            </dl>

            <div class="mt-6 flex justify-center space-x-4">
                <a
                    href=report_href
                    download=report_name
                    class=move || format!("px-6 py-2 {}", theme.get().secondary_button)
                >
                    "Download Report"
                </a>
                <button
                    class=move || format!("px-6 py-2 {}", theme.get().secondary_button)
                    on:click=move |_| on_verify_another.call(())
                >
                    "Verify Another"
                </button>
            </div>
        </div>
    }
}
