//! Top navigation linking every declared route.
//!
//! Also hosts the title hook, since it is the one component always rendered
//! inside `<Router>`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::router::{self, ROUTES};

/// Link text for a route path.
pub fn nav_label(path: &str) -> &'static str {
    match path {
        "/" => "首页",
        "/tables" => "数据库表",
        "/codegenerator" => "代码生成",
        "/user" => "用户管理",
        _ => "",
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    router::install_title_hook();

    let pathname = use_location().pathname;

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Code Generator"</span>
            {ROUTES
                .iter()
                .map(|route| {
                    let path = route.path;
                    let is_active = move || pathname.get() == path;
                    view! {
                        <a
                            href=path
                            class=move || {
                                if is_active() { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" }
                            }
                        >
                            {nav_label(path)}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
