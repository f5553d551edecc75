//! Code generator page: generate or delete code for one table, or generate
//! for several tables in one batch.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api;
use crate::net::http::use_http;
use crate::net::types::GenerationKind;
use crate::state::codegen::CodegenForm;
use crate::state::messages::use_messages;
use crate::util::confirm::confirm;

#[component]
pub fn CodeGeneratorPage() -> impl IntoView {
    let http = use_http();
    let messages = use_messages();
    let query = use_query_map();

    let form = RwSignal::new(query.with_untracked(|q| {
        CodegenForm::for_table(q.get("schema").as_deref(), q.get("table").as_deref())
    }));
    let busy = RwSignal::new(false);
    let last_result = RwSignal::new(None::<String>);

    // Runs one request at a time and shows the server's confirmation text.
    let finish = move |result: Result<String, crate::net::http::HttpError>| {
        if let Ok(text) = result {
            messages.success(text.clone());
            last_result.set(Some(text));
        }
        busy.set(false);
    };

    let on_generate = {
        let http = http.clone();
        move |_| {
            let f = form.get_untracked();
            let target = match f.target() {
                Ok(t) => t,
                Err(e) => {
                    messages.info(e.to_string());
                    return;
                }
            };
            let http = http.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                log::info!("generate {} for {}.{}", f.kind.as_str(), target.schema, target.table);
                let result =
                    api::generate(&http, f.kind, &target.schema, &target.table, &f.generate_options()).await;
                finish(result);
            });
        }
    };

    let on_batch = {
        let http = http.clone();
        move |_| {
            let (schema, options) = match form.get_untracked().batch_options() {
                Ok(v) => v,
                Err(e) => {
                    messages.info(e.to_string());
                    return;
                }
            };
            let http = http.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                log::info!("batch generate {} tables in {schema}", options.table_names.len());
                finish(api::batch_generate(&http, &schema, &options).await);
            });
        }
    };

    let on_delete = {
        let http = http.clone();
        move |_| {
            let f = form.get_untracked();
            let target = match f.target() {
                Ok(t) => t,
                Err(e) => {
                    messages.info(e.to_string());
                    return;
                }
            };
            let prompt = format!("确定要删除 {} 已生成的{}吗？", target.table, f.kind.label());
            if !confirm(&prompt) {
                return;
            }
            let http = http.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                finish(api::delete_generated(&http, &target.schema, &target.table, &f.delete_options()).await);
            });
        }
    };

    view! {
        <div class="codegen-page">
            <h1>"代码生成器"</h1>

            <section class="card">
                <div class="form-row">
                    <label>"数据库名称"</label>
                    <input
                        class="input"
                        prop:value=move || form.with(|f| f.schema.clone())
                        on:input=move |ev| form.update(|f| f.schema = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label>"表名"</label>
                    <input
                        class="input"
                        prop:value=move || form.with(|f| f.table.clone())
                        on:input=move |ev| form.update(|f| f.table = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label>"生成类型"</label>
                    <select
                        class="input"
                        prop:value=move || form.with(|f| f.kind.as_str())
                        on:change=move |ev| {
                            if let Some(kind) = GenerationKind::parse(&event_target_value(&ev)) {
                                form.update(|f| f.kind = kind);
                            }
                        }
                    >
                        {GenerationKind::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="form-row">
                    <label>"输出路径"</label>
                    <input
                        class="input"
                        placeholder="留空使用默认路径"
                        prop:value=move || form.with(|f| f.output_path.clone())
                        on:input=move |ev| form.update(|f| f.output_path = event_target_value(&ev))
                    />
                </div>
                <Show when=move || form.with(|f| f.kind.uses_base_package())>
                    <div class="form-row">
                        <label>"基础包名"</label>
                        <input
                            class="input"
                            placeholder="com.example"
                            prop:value=move || form.with(|f| f.base_package.clone())
                            on:input=move |ev| form.update(|f| f.base_package = event_target_value(&ev))
                        />
                    </div>
                </Show>
                <div class="form-row">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.overwrite)
                            on:change=move |ev| form.update(|f| f.overwrite = event_target_checked(&ev))
                        />
                        " 覆盖已存在的文件"
                    </label>
                </div>
                <div class="form-actions">
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_generate>
                        "生成代码"
                    </button>
                    <button class="btn btn--danger" disabled=move || busy.get() on:click=on_delete>
                        "删除已生成代码"
                    </button>
                </div>
            </section>

            <section class="card">
                <h2>"批量生成"</h2>
                <div class="form-row">
                    <label>"表名列表"</label>
                    <textarea
                        class="input"
                        placeholder="多个表名用逗号或换行分隔"
                        prop:value=move || form.with(|f| f.batch_tables.clone())
                        on:input=move |ev| form.update(|f| f.batch_tables = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-actions">
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_batch>
                        "批量生成"
                    </button>
                </div>
            </section>

            {move || {
                last_result
                    .get()
                    .map(|text| view! { <p class="codegen-page__result">{text}</p> })
            }}
        </div>
    }
}
