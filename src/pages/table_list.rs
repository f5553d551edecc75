//! Table list page: browse a schema's tables and inspect their metadata.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api;
use crate::net::http::use_http;
use crate::net::types::TableMetadata;
use crate::state::codegen::generator_href;
use crate::state::messages::use_messages;
use crate::state::table_info::{self, ColumnSummary};

#[component]
pub fn TableListPage() -> impl IntoView {
    let http = use_http();
    let messages = use_messages();
    let query = use_query_map();

    let schema = RwSignal::new(query.with_untracked(|q| q.get("schema")).unwrap_or_default());
    let loaded_schema = RwSignal::new(String::new());
    let tables = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let selected = RwSignal::new(None::<String>);
    let metadata = RwSignal::new(None::<TableMetadata>);

    let load_tables = {
        let http = http.clone();
        move || {
            let name = schema.get_untracked().trim().to_owned();
            if name.is_empty() {
                messages.info("请输入数据库名称");
                return;
            }
            let http = http.clone();
            loading.set(true);
            selected.set(None);
            metadata.set(None);
            leptos::task::spawn_local(async move {
                // Failures were already reported by the interceptor.
                if let Ok(list) = api::list_tables(&http, &name).await {
                    log::info!("loaded {} tables from {name}", list.len());
                    tables.set(list);
                    loaded_schema.set(name);
                }
                loading.set(false);
            });
        }
    };

    if !schema.get_untracked().trim().is_empty() {
        load_tables();
    }

    let inspect = Callback::new({
        let http = http.clone();
        move |table: String| {
            let http = http.clone();
            let schema = loaded_schema.get_untracked();
            selected.set(Some(table.clone()));
            metadata.set(None);
            leptos::task::spawn_local(async move {
                if let Ok(meta) = api::table_metadata(&http, &schema, &table).await {
                    // Ignore responses for a table that is no longer selected.
                    if selected.get_untracked().as_deref() == Some(table.as_str()) {
                        metadata.set(Some(meta));
                    }
                }
            });
        }
    });

    let on_submit = {
        let load_tables = load_tables.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            load_tables();
        }
    };

    view! {
        <div class="table-list-page">
            <h1>"数据库表列表"</h1>
            <form class="table-list-page__search" on:submit=on_submit>
                <input
                    class="input"
                    placeholder="数据库名称 (schema)"
                    prop:value=move || schema.get()
                    on:input=move |ev| schema.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    "查询"
                </button>
            </form>

            <div class="table-list-page__body">
                <ul class="table-list-page__tables">
                    <Show when=move || loading.get()>
                        <li class="table-list-page__hint">"加载中..."</li>
                    </Show>
                    <Show when=move || !loading.get() && tables.with(Vec::is_empty)>
                        <li class="table-list-page__hint">"暂无数据"</li>
                    </Show>
                    <For
                        each=move || tables.get()
                        key=Clone::clone
                        children=move |table: String| {
                            let name = table.clone();
                            let label = table.clone();
                            let is_selected = {
                                let table = table.clone();
                                move || selected.get().as_deref() == Some(table.as_str())
                            };
                            view! {
                                <li
                                    class=move || {
                                        if is_selected() { "table-list-page__item table-list-page__item--selected" } else { "table-list-page__item" }
                                    }
                                    on:click=move |_| inspect.run(name.clone())
                                >
                                    <span>{label}</span>
                                    <a
                                        class="btn btn--small"
                                        href=move || generator_href(&loaded_schema.get(), &table)
                                    >
                                        "生成代码"
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>

                <section class="table-list-page__detail">
                    {move || match (selected.get(), metadata.get()) {
                        (None, _) => view! { <p class="table-list-page__hint">"选择一张表查看字段"</p> }.into_any(),
                        (Some(_), None) => view! { <p class="table-list-page__hint">"加载中..."</p> }.into_any(),
                        (Some(table), Some(meta)) => view! { <MetadataView table=table meta=meta/> }.into_any(),
                    }}
                </section>
            </div>
        </div>
    }
}

/// Column table for one table's metadata.
#[component]
fn MetadataView(table: String, meta: TableMetadata) -> impl IntoView {
    let class_name = table_info::class_name(&meta).unwrap_or_default().to_owned();
    let primary_key = table_info::primary_key(&meta).unwrap_or("-").to_owned();
    let columns = table_info::columns(&meta);

    view! {
        <h2>{table}</h2>
        <p class="table-list-page__summary">
            "类名: " {class_name} " · 主键: " {primary_key}
        </p>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"列名"</th>
                    <th>"字段名"</th>
                    <th>"JDBC 类型"</th>
                    <th>"Java 类型"</th>
                    <th>"主键"</th>
                    <th>"可空"</th>
                    <th>"自增"</th>
                </tr>
            </thead>
            <tbody>
                {columns.into_iter().map(column_row).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

fn flag(value: bool) -> &'static str {
    if value { "✓" } else { "" }
}

fn column_row(col: ColumnSummary) -> impl IntoView {
    view! {
        <tr>
            <td>{col.column_name}</td>
            <td>{col.field_name}</td>
            <td>{col.jdbc_type}</td>
            <td>{col.java_type}</td>
            <td>{flag(col.primary_key)}</td>
            <td>{flag(col.nullable)}</td>
            <td>{flag(col.auto_increment)}</td>
        </tr>
    }
}
