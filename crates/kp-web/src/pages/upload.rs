//! Certificate upload and verification page

use crate::components::{AppHeader, ResultPanel};
use crate::theme::use_theme;
use crate::timer::GlooTimer;
use kp_core::upload::FileNotice;
use kp_core::{AppConfig, MockVerifier, Role, UploadFlow, UploadPhase, UploadedFile, VerificationService};
use leptos::*;
use std::rc::Rc;

fn to_uploaded(file: &web_sys::File) -> UploadedFile {
    UploadedFile::new(file.name(), file.size() as u64)
}

#[component]
pub fn UploadPage(
    role: Role,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();
    let config = expect_context::<AppConfig>();

    let flow = create_rw_signal(UploadFlow::with_policy(config.upload.clone()));
    let verifier = store_value(Rc::new(MockVerifier::from_config(GlooTimer, &config)));
    let (drag_active, set_drag_active) = create_signal(false);
    let (notices, set_notices) = create_signal(Vec::<FileNotice>::new());
    let (rejection, set_rejection) = create_signal(None::<String>);

    let select = move |file: UploadedFile| {
        set_rejection.set(None);
        match flow.try_update(|f| f.select_file(file)) {
            Some(Ok(found)) => set_notices.set(found),
            Some(Err(err)) => {
                set_notices.set(Vec::new());
                set_rejection.set(Some(err.to_string()));
            }
            None => {}
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select(to_uploaded(&file));
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            select(to_uploaded(&file));
        }
    };

    let on_verify = move |_| {
        let Some(started) = flow.try_update(UploadFlow::start_analysis) else {
            return;
        };
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(err) => {
                tracing::warn!(%err, "verification not started");
                return;
            }
        };
        let verifier = verifier.get_value();
        spawn_local(async move {
            let outcome = verifier.submit(&ticket.file).await;
            // The page may have been left while the verifier was sleeping
            if flow.try_update(|f| f.complete(ticket, outcome)).is_none() {
                tracing::debug!("upload view disposed before analysis finished");
            }
        });
    };

    let reset = Callback::new(move |_: ()| {
        set_notices.set(Vec::new());
        set_rejection.set(None);
        flow.update(UploadFlow::reset);
    });

    let accept = flow.with_untracked(|f| f.policy().accept_attribute());
    let formats = flow.with_untracked(|f| f.policy().describe());
    let phase = move || flow.with(UploadFlow::phase);

    view! {
        <div>
            <AppHeader
                title="Certificate Verification"
                subtitle="Upload and verify certificates"
                role=role
                on_back=on_back
                on_logout=on_logout
            />

            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <div class="text-center">
                    <h2 class=move || theme.get().heading>"Verify Certificate Authenticity"</h2>
                    <p class="text-lg text-gray-600 mt-2">
                        "Upload your certificate to verify its authenticity using advanced AI and blockchain technology"
                    </p>
                </div>

                <div class=move || format!("{} p-8", theme.get().card)>
                    <div
                        class=move || {
                            let zone = if drag_active.get() {
                                theme.get().drop_zone_active
                            } else {
                                theme.get().drop_zone_idle
                            };
                            format!("relative border-2 border-dashed rounded-xl p-12 text-center transition {}", zone)
                        }
                        on:dragenter=move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(true);
                        }
                        on:dragover=move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(true);
                        }
                        on:dragleave=move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(false);
                        }
                        on:drop=on_drop
                    >
                        <input
                            type="file"
                            accept=accept
                            class="absolute inset-0 w-full h-full opacity-0 cursor-pointer"
                            disabled=move || phase() == UploadPhase::Analyzing
                            on:change=on_change
                        />
                        {move || match flow.with(|f| f.file().cloned()) {
                            Some(file) => view! {
                                <div class="space-y-2">
                                    <p class="text-lg font-medium text-gray-900">{file.name().to_string()}</p>
                                    <p class="text-sm text-gray-500">{file.display_size()}</p>
                                </div>
                            }.into_view(),
                            None => view! {
                                <div class="space-y-2">
                                    <p class="text-lg font-medium text-gray-900">
                                        "Drop your certificate here, or click to browse"
                                    </p>
                                    <p class="text-sm text-gray-500">{formats.clone()}</p>
                                </div>
                            }.into_view(),
                        }}
                    </div>

                    {move || notices.with(|found| found.iter().map(|notice| view! {
                        <p class="mt-3 text-sm text-amber-600">{notice.to_string()}</p>
                    }).collect_view())}
                    {move || rejection.get().map(|message| view! {
                        <p class="mt-3 text-sm text-red-600">{message}</p>
                    })}

                    <Show when=move || matches!(phase(), UploadPhase::FileSelected | UploadPhase::Analyzing)>
                        <div class="mt-6 flex justify-center">
                            <button
                                class=move || format!("px-8 py-3 disabled:opacity-60 {}", theme.get().primary_button)
                                disabled=move || phase() == UploadPhase::Analyzing
                                on:click=on_verify
                            >
                                {move || if phase() == UploadPhase::Analyzing {
                                    "Analyzing Certificate..."
                                } else {
                                    "Verify Certificate"
                                }}
                            </button>
                        </div>
                    </Show>
                </div>

                {move || flow.with(|f| f.result().cloned()).map(|result| view! {
                    <ResultPanel result on_verify_another=reset/>
                })}

                {move || flow.with(|f| f.error().cloned()).map(|error| view! {
                    <div class=move || format!("{} border border-red-200 p-8 text-center space-y-4", theme.get().card)>
                        <h3 class="text-xl font-bold text-red-700">"Verification could not be completed"</h3>
                        <p class="text-gray-600">{error.to_string()}</p>
                        <button
                            class=move || format!("px-6 py-2 {}", theme.get().secondary_button)
                            on:click=move |_| reset.call(())
                        >
                            "Try Another File"
                        </button>
                    </div>
                })}
            </div>
        </div>
    }
}
