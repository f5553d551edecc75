//! Landing page with entry points into the console.

use leptos::prelude::*;

use crate::router::{CODE_GENERATOR, TABLE_LIST, USER_MANAGEMENT};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"代码生成器平台"</h1>
            <p class="home-page__lead">
                "读取数据库表结构，一键生成后端、前端或全栈 CRUD 代码。"
            </p>
            <div class="home-page__cards">
                <a class="home-page__card" href=TABLE_LIST.path>
                    <h2>"数据库表"</h2>
                    <p>"浏览数据库中的表及其字段元数据"</p>
                </a>
                <a class="home-page__card" href=CODE_GENERATOR.path>
                    <h2>"代码生成"</h2>
                    <p>"为单表或多表生成代码，或删除已生成的代码"</p>
                </a>
                <a class="home-page__card" href=USER_MANAGEMENT.path>
                    <h2>"用户管理"</h2>
                    <p>"生成代码的示例：用户表的增删改查"</p>
                </a>
            </div>
        </div>
    }
}
