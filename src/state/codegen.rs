//! Code-generator form model.
//!
//! Holds the raw text inputs of the generator page and turns them into
//! request bodies, rejecting incomplete forms before anything is sent.

#[cfg(test)]
#[path = "codegen_test.rs"]
mod codegen_test;

use crate::net::types::{BatchGenerateOptions, DeleteOptions, GenerateOptions, GenerationKind};

/// Validation failures of the generator form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("请输入数据库名称")]
    MissingSchema,
    #[error("请输入表名")]
    MissingTable,
    #[error("请至少选择一张表")]
    NoTables,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodegenForm {
    pub schema: String,
    pub table: String,
    /// Comma or whitespace separated table names for batch generation.
    pub batch_tables: String,
    pub kind: GenerationKind,
    pub output_path: String,
    pub base_package: String,
    pub overwrite: bool,
}

/// Link to the generator page with schema and table prefilled.
pub fn generator_href(schema: &str, table: &str) -> String {
    format!(
        "{}?schema={}&table={}",
        crate::router::CODE_GENERATOR.path,
        urlencoding::encode(schema),
        urlencoding::encode(table)
    )
}

/// A validated single-table target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub schema: String,
    pub table: String,
}

impl CodegenForm {
    /// Prefill schema and table, e.g. from the table list's query string.
    pub fn for_table(schema: Option<&str>, table: Option<&str>) -> Self {
        Self {
            schema: schema.unwrap_or_default().to_owned(),
            table: table.unwrap_or_default().to_owned(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns `FormError` when schema or table is blank.
    pub fn target(&self) -> Result<Target, FormError> {
        let schema = self.schema.trim();
        if schema.is_empty() {
            return Err(FormError::MissingSchema);
        }
        let table = self.table.trim();
        if table.is_empty() {
            return Err(FormError::MissingTable);
        }
        Ok(Target {
            schema: schema.to_owned(),
            table: table.to_owned(),
        })
    }

    pub fn generate_options(&self) -> GenerateOptions {
        let base_package = self.kind.uses_base_package().then(|| self.base_package.trim().to_owned());
        GenerateOptions {
            output_path: self.output_path.trim().to_owned(),
            base_package,
            overwrite: self.overwrite,
        }
    }

    /// Table names of the batch input, deduplicated in input order.
    pub fn batch_table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.batch_tables.split(|c: char| c == ',' || c == '，' || c.is_whitespace()) {
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_owned());
            }
        }
        names
    }

    /// # Errors
    ///
    /// Returns `FormError` when the schema is blank or no table is listed.
    pub fn batch_options(&self) -> Result<(String, BatchGenerateOptions), FormError> {
        let schema = self.schema.trim();
        if schema.is_empty() {
            return Err(FormError::MissingSchema);
        }
        let table_names = self.batch_table_names();
        if table_names.is_empty() {
            return Err(FormError::NoTables);
        }
        Ok((
            schema.to_owned(),
            BatchGenerateOptions {
                table_names,
                output_path: self.output_path.trim().to_owned(),
                base_package: self.base_package.trim().to_owned(),
                overwrite: self.overwrite,
            },
        ))
    }

    pub fn delete_options(&self) -> DeleteOptions {
        DeleteOptions {
            delete_type: self.kind,
            output_path: self.output_path.trim().to_owned(),
        }
    }
}
