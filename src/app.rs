//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{message_host::MessageHost, nav_bar::NavBar};
use crate::config::AppConfig;
use crate::net::http::HttpClient;
use crate::router::{CODE_GENERATOR, HOME, TABLE_LIST, USER_MANAGEMENT};
use crate::state::messages::Messages;

/// Root application component.
///
/// Provides the configuration, the message toasts, and the intercepted HTTP
/// client as contexts, then declares one `<Route>` per route-table entry.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let messages = Messages::new();
    let http = HttpClient::new(config.api_base.clone(), Arc::new(messages));

    provide_context(config);
    provide_context(messages);
    provide_context(http);

    view! {
        <Stylesheet id="console" href="/style.css"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"页面不存在"</p> }>
                    <Route path=StaticSegment(HOME.segment()) view=|| HOME.page.render()/>
                    <Route path=StaticSegment(TABLE_LIST.segment()) view=|| TABLE_LIST.page.render()/>
                    <Route path=StaticSegment(CODE_GENERATOR.segment()) view=|| CODE_GENERATOR.page.render()/>
                    <Route path=StaticSegment(USER_MANAGEMENT.segment()) view=|| USER_MANAGEMENT.page.render()/>
                </Routes>
            </main>
            <MessageHost/>
        </Router>
    }
}
