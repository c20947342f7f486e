//! Main application component

use crate::pages::*;
use crate::theme::Theme;
use kp_core::{AnalyticsSource, AppConfig, MockAnalytics, Page, Role, Session, View};
use leptos::*;
use std::rc::Rc;

/// Data source behind the dashboard and analytics views
pub type SharedAnalytics = Rc<dyn AnalyticsSource>;

#[component]
pub fn App() -> impl IntoView {
    let session = create_rw_signal(Session::new());
    let theme = create_rw_signal(Theme::default());

    provide_context(theme);
    provide_context(AppConfig::default());
    provide_context::<SharedAnalytics>(Rc::new(MockAnalytics));

    let to_login = Callback::new(move |_: ()| session.update(Session::navigate_to_login));
    let login = Callback::new(move |role: Role| session.update(|s| s.login(role)));
    let logout = Callback::new(move |_: ()| session.update(Session::logout));
    let back = Callback::new(move |_: ()| session.update(Session::back));
    let navigate = Callback::new(move |page: Page| {
        session.update(|s| {
            if let Err(err) = s.navigate(page) {
                tracing::warn!(%err, "navigation refused");
            }
        })
    });

    view! {
        <div class=move || theme.get().page_bg>
            {move || match session.with(Session::view) {
                View::Landing => view! {
                    <LandingPage on_get_started=to_login/>
                }.into_view(),
                View::Login => view! {
                    <LoginPage on_login=login on_back=back/>
                }.into_view(),
                View::Dashboard(role) => view! {
                    <DashboardPage role=role on_navigate=navigate on_logout=logout/>
                }.into_view(),
                View::Upload(role) => view! {
                    <UploadPage role=role on_back=back on_logout=logout/>
                }.into_view(),
                View::Analytics => view! {
                    <AnalyticsPage on_back=back on_logout=logout/>
                }.into_view(),
            }}
        </div>
    }
}
