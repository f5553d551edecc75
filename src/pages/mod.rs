//! Route pages.
//!
//! Pages are referenced from the route table by `Page` and only constructed
//! when their route matches.

pub mod code_generator;
pub mod home;
pub mod table_list;
pub mod user_management;

use leptos::prelude::*;

use code_generator::CodeGeneratorPage;
use home::HomePage;
use table_list::TableListPage;
use user_management::UserManagementPage;

/// Lazily-rendered page reference held by each route record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    TableList,
    CodeGenerator,
    UserManagement,
}

impl Page {
    pub fn render(self) -> AnyView {
        match self {
            Self::Home => view! { <HomePage/> }.into_any(),
            Self::TableList => view! { <TableListPage/> }.into_any(),
            Self::CodeGenerator => view! { <CodeGeneratorPage/> }.into_any(),
            Self::UserManagement => view! { <UserManagementPage/> }.into_any(),
        }
    }
}
