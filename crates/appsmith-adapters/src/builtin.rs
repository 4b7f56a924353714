//! Built-in template set.
//!
//! Seeds a [`MemoryCatalog`] with the templates that ship with the binary,
//! used whenever no templates directory is configured. The set mirrors the
//! on-disk layout `DirCatalog` expects: a `base` environment, the two
//! template-type override environments, the `optional/endpoints` environment,
//! and one feature module (`database`) that demonstrates hooks plus the
//! meta-template escape hatch.

use appsmith_core::application::ports::EnvironmentKind;
use appsmith_core::domain::TemplateType;
use appsmith_core::META_TEMPLATE;

use crate::template_source::MemoryCatalog;

/// Load every built-in template into `catalog`.
pub fn seed(catalog: &MemoryCatalog) {
    seed_base(catalog);
    seed_type_overrides(catalog);
    seed_endpoints(catalog);
    seed_database_module(catalog);
}

fn seed_base(catalog: &MemoryCatalog) {
    let base = EnvironmentKind::Base;

    catalog.insert(
        &base,
        "{{application.module_name}}/__init__.py.tpl",
        r#""""{{application.raw_name}} application package."""

__version__ = "0.1.0"
"#,
    );

    catalog.insert(
        &base,
        "{{application.module_name}}/app.py.tpl",
        r#""""Application assembly for {{application.raw_name}}."""

from {{application.module_name}}.endpoints import application


def build_app():
    """Wire up the application and its endpoints."""
    return application.create()
"#,
    );

    catalog.insert(
        &base,
        "{{application.module_name}}/endpoints/__init__.py.tpl",
        "",
    );

    catalog.insert(
        &base,
        "{{application.module_name}}/endpoints/application.py.tpl",
        r#""""Root endpoint for {{application.raw_name}}."""


def create():
    return {"name": "{{application.url_path_name}}"}
"#,
    );

    catalog.insert(
        &base,
        "README.md.tpl",
        r#"# {{application.raw_name}}

Generated by appsmith{{#if template_type}} ({{template_type}} template){{/if}}.
"#,
    );
}

fn seed_type_overrides(catalog: &MemoryCatalog) {
    // The basic variant overrides app assembly; same logical path as base,
    // so it replaces the base output when it renders after it.
    catalog.insert(
        &EnvironmentKind::Type(TemplateType::Basic),
        "{{application.module_name}}/app.py.tpl",
        r#""""Application assembly for {{application.raw_name}} (basic)."""

from {{application.module_name}}.endpoints import application


def build_app():
    return application.create()
"#,
    );

    let openapi = EnvironmentKind::Type(TemplateType::OpenApi);
    catalog.insert(
        &openapi,
        "{{application.module_name}}/app.py.tpl",
        r#""""Application assembly for {{application.raw_name}} (OpenAPI-first)."""

from {{application.module_name}}.endpoints import application


def build_app():
    app = application.create()
    app["spec"] = "openapi.yaml"
    return app
"#,
    );
    catalog.insert(
        &openapi,
        "{{application.module_name}}/openapi.yaml.tpl",
        r#"openapi: "3.0.3"
info:
  title: {{application.raw_name}}
  version: "0.1.0"
paths: {}
"#,
    );
}

fn seed_endpoints(catalog: &MemoryCatalog) {
    catalog.insert(
        &EnvironmentKind::Optional("endpoints".into()),
        "{{application.module_name}}/endpoints/{{operation.module_name}}.py.tpl",
        r#""""'{{operation.raw_name}}' endpoint.

Served at {{endpoint.hostname}}/{{operation.url_path_name}}
"""


def get():
    return {"endpoint": "{{operation.url_path_name}}"}
"#,
    );
}

fn seed_database_module(catalog: &MemoryCatalog) {
    let database = EnvironmentKind::Optional("database".into());

    // Meta template: the module controls which siblings render. The session
    // template only renders when the database hook injected a URL.
    catalog.insert(
        &database,
        META_TEMPLATE,
        r#"# database module manifest
__init__.py.tpl
{{#if module.database.url}}session.py.tpl{{/if}}
"#,
    );

    catalog.insert(&database, "__init__.py.tpl", "");

    catalog.insert(
        &database,
        "session.py.tpl",
        r#""""Database session for {{application.raw_name}}."""

DATABASE_URL = "{{module.database.url}}"
"#,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use appsmith_core::application::ports::TemplateCatalog as _;

    #[test]
    fn every_environment_seeds() {
        let catalog = MemoryCatalog::new();
        seed(&catalog);
        // base, basic, openapi, optional/endpoints, optional/database
        assert_eq!(catalog.environment_count(), 5);
    }

    #[test]
    fn database_module_is_meta_controlled() {
        let catalog = MemoryCatalog::with_builtin();
        let source = catalog
            .open(&EnvironmentKind::Optional("database".into()))
            .unwrap()
            .unwrap();
        assert!(
            source
                .list_templates()
                .unwrap()
                .contains(&META_TEMPLATE.to_string())
        );
    }
}
