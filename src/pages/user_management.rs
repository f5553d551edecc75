//! User management page: paged, searchable CRUD over `/api/user`.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::use_http;
use crate::net::types::{Page, User, UserQuery};
use crate::state::messages::use_messages;
use crate::state::user_form::{UserForm, birthday_date};
use crate::util::confirm::{confirm, delete_rows_prompt};

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let http = use_http();
    let messages = use_messages();

    let query = RwSignal::new(UserQuery::default());
    let search = RwSignal::new(String::new());
    let refresh = RwSignal::new(0_u32);
    let selection = RwSignal::new(Vec::<i64>::new());
    let editing = RwSignal::new(None::<UserForm>);

    let users = LocalResource::new({
        let http = http.clone();
        move || {
            let http = http.clone();
            let q = query.get();
            refresh.track();
            async move { api::list_users(&http, &q).await.ok() }
        }
    });

    let reload = move || {
        selection.set(Vec::new());
        refresh.update(|n| *n = n.wrapping_add(1));
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = search.get_untracked();
        let text = text.trim();
        query.set(UserQuery {
            page: 0,
            search: (!text.is_empty()).then(|| text.to_owned()),
            ..query.get_untracked()
        });
        selection.set(Vec::new());
    };

    let delete_one = Callback::new({
        let http = http.clone();
        move |id: i64| {
            if !confirm(&delete_rows_prompt(1)) {
                return;
            }
            let http = http.clone();
            leptos::task::spawn_local(async move {
                if api::delete_user(&http, id).await.is_ok() {
                    messages.success("删除成功");
                    reload();
                }
            });
        }
    });

    let on_batch_delete = {
        let http = http.clone();
        move |_| {
            let ids = selection.get_untracked();
            if ids.is_empty() {
                messages.info("请先选择要删除的记录");
                return;
            }
            if !confirm(&delete_rows_prompt(ids.len())) {
                return;
            }
            let http = http.clone();
            leptos::task::spawn_local(async move {
                if api::batch_delete_users(&http, &ids).await.is_ok() {
                    messages.success("批量删除成功");
                    reload();
                }
            });
        }
    };

    let on_save = Callback::new({
        let http = http.clone();
        move |form: UserForm| {
            let user = match form.to_user() {
                Ok(u) => u,
                Err(e) => {
                    messages.info(e.to_string());
                    return;
                }
            };
            let http = http.clone();
            leptos::task::spawn_local(async move {
                let saved = match form.id {
                    Some(id) => api::update_user(&http, id, &user).await,
                    None => api::create_user(&http, &user).await,
                };
                if saved.is_ok() {
                    messages.success(if form.is_new() { "添加成功" } else { "更新成功" });
                    editing.set(None);
                    reload();
                }
            });
        }
    });

    // Edit the server's current copy; fall back to the listed row only when
    // the row has no id.
    let on_edit = Callback::new({
        let http = http.clone();
        move |user: User| {
            let Some(id) = user.id else {
                editing.set(Some(UserForm::from_user(&user)));
                return;
            };
            let http = http.clone();
            leptos::task::spawn_local(async move {
                if let Ok(fresh) = api::get_user(&http, id).await {
                    editing.set(Some(UserForm::from_user(&fresh)));
                }
            });
        }
    });

    let export_href = {
        let http = http.clone();
        move || query.with(|q| api::user_export_href(&http, q.search.as_deref()))
    };

    let on_import = {
        let http = http.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "csr")]
            {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    return;
                };
                // Allow picking the same file again after this upload.
                input.set_value("");
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    if let Ok(summary) = api::import_users(&http, &file).await {
                        messages.success(summary);
                        reload();
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (ev, &http);
            }
        }
    };
    let on_cancel = Callback::new(move |()| editing.set(None));

    let toggle = Callback::new(move |id: i64| {
        selection.update(|ids| {
            if let Some(pos) = ids.iter().position(|&x| x == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    });

    let go_to = move |page: u32| {
        query.update(|q| q.page = page);
        selection.set(Vec::new());
    };

    view! {
        <div class="user-page">
            <header class="user-page__header">
                <h1>"用户管理"</h1>
                <form class="user-page__search" on:submit=on_search>
                    <input
                        class="input"
                        placeholder="搜索姓名 / 手机号 / 地区"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"搜索"</button>
                </form>
                <button class="btn btn--primary" on:click=move |_| editing.set(Some(UserForm::default()))>
                    "新增"
                </button>
                <button class="btn btn--danger" on:click=on_batch_delete>
                    "批量删除"
                </button>
                <a class="btn" href=export_href download="">
                    "导出 Excel"
                </a>
                <label class="btn">
                    "导入 Excel"
                    <input class="user-page__file" type="file" accept=".xlsx" on:change=on_import/>
                </label>
            </header>

            <Suspense fallback=move || view! { <p>"加载中..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|page| {
                            let page = page.unwrap_or_default();
                            view! {
                                <UserTable
                                    page=page.clone()
                                    selection=selection
                                    on_toggle=toggle
                                    on_edit=on_edit
                                    on_delete=delete_one
                                />
                                <Pager page=page on_go=Callback::new(go_to)/>
                            }
                        })
                }}
            </Suspense>

            {move || {
                editing
                    .get()
                    .map(|form| view! { <UserDialog form=form on_save=on_save on_cancel=on_cancel/> })
            }}
        </div>
    }
}

#[component]
fn UserTable(
    page: Page<User>,
    selection: RwSignal<Vec<i64>>,
    on_toggle: Callback<i64>,
    on_edit: Callback<User>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    if page.content.is_empty() {
        return view! { <p class="user-page__empty">"暂无数据"</p> }.into_any();
    }

    let rows = page
        .content
        .into_iter()
        .map(|user| {
            let id = user.id;
            let edit_user = user.clone();
            let checked = move || id.is_some_and(|id| selection.with(|s| s.contains(&id)));
            let show = |v: &Option<String>| v.clone().unwrap_or_default();
            view! {
                <tr>
                    <td>
                        <input
                            type="checkbox"
                            disabled=id.is_none()
                            prop:checked=checked
                            on:change=move |_| {
                                if let Some(id) = id {
                                    on_toggle.run(id);
                                }
                            }
                        />
                    </td>
                    <td>{id.map(|id| id.to_string()).unwrap_or_default()}</td>
                    <td>{show(&user.name)}</td>
                    <td>{show(&user.mobile)}</td>
                    <td>{show(&user.sex)}</td>
                    <td>{show(&user.age)}</td>
                    <td>{user.birthday.as_deref().map(birthday_date).unwrap_or_default().to_owned()}</td>
                    <td>{show(&user.area)}</td>
                    <td>{user.score.map(|s| s.to_string()).unwrap_or_default()}</td>
                    <td class="data-table__actions">
                        <button class="btn btn--small" on:click=move |_| on_edit.run(edit_user.clone())>
                            "编辑"
                        </button>
                        <button
                            class="btn btn--small btn--danger"
                            disabled=id.is_none()
                            on:click=move |_| {
                                if let Some(id) = id {
                                    on_delete.run(id);
                                }
                            }
                        >
                            "删除"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th></th>
                    <th>"ID"</th>
                    <th>"姓名"</th>
                    <th>"手机号"</th>
                    <th>"性别"</th>
                    <th>"年龄"</th>
                    <th>"生日"</th>
                    <th>"地区"</th>
                    <th>"分数"</th>
                    <th>"操作"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}

#[component]
fn Pager(page: Page<User>, on_go: Callback<u32>) -> impl IntoView {
    let current = page.number;
    let has_previous = page.has_previous();
    let has_next = page.has_next();

    view! {
        <div class="pager">
            <button class="btn btn--small" disabled={!has_previous} on:click=move |_| on_go.run(current.saturating_sub(1))>
                "上一页"
            </button>
            <span class="pager__info">
                {format!("第 {} / {} 页，共 {} 条", current + 1, page.total_pages.max(1), page.total_elements)}
            </span>
            <button class="btn btn--small" disabled={!has_next} on:click=move |_| on_go.run(current + 1)>
                "下一页"
            </button>
        </div>
    }
}

/// Create/edit modal. Edits a local copy; nothing is saved until submit.
#[component]
fn UserDialog(form: UserForm, on_save: Callback<UserForm>, on_cancel: Callback<()>) -> impl IntoView {
    let title = if form.is_new() { "新增用户" } else { "编辑用户" };
    let draft = RwSignal::new(form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_save.run(draft.get_untracked());
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" on:submit=on_submit>
                <h2>{title}</h2>
                {field("姓名", "text", draft, |f| &f.name, |f, v| f.name = v)}
                {field("手机号", "tel", draft, |f| &f.mobile, |f, v| f.mobile = v)}
                {field("密码", "password", draft, |f| &f.passwd, |f, v| f.passwd = v)}
                {field("性别", "text", draft, |f| &f.sex, |f, v| f.sex = v)}
                {field("年龄", "text", draft, |f| &f.age, |f, v| f.age = v)}
                {field("生日", "date", draft, |f| &f.birthday, |f, v| f.birthday = v)}
                {field("地区", "text", draft, |f| &f.area, |f, v| f.area = v)}
                {field("分数", "text", draft, |f| &f.score, |f, v| f.score = v)}
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "取消"
                    </button>
                    <button class="btn btn--primary" type="submit">"保存"</button>
                </div>
            </form>
        </div>
    }
}

/// One labelled text input bound to a field of the draft.
fn field(
    label: &'static str,
    kind: &'static str,
    draft: RwSignal<UserForm>,
    get: fn(&UserForm) -> &String,
    set: fn(&mut UserForm, String),
) -> impl IntoView {
    view! {
        <div class="form-row">
            <label>{label}</label>
            <input
                class="input"
                type=kind
                prop:value=move || draft.with(|f| get(f).clone())
                on:input=move |ev| draft.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}
