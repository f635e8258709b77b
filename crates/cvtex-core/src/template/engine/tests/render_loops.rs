//! Loop rendering tests for template engine

use super::helpers::cv_context;
use super::*;
use toml::{toml, Value};

#[test]
fn test_render_each_loop() {
    let context = cv_context();
    let template = r#"{{each jobs |job|}}
Job: {{job.company}}
{{/each}}"#;
    let result = render(template, &context).unwrap();
    assert_eq!(result, "\nJob: Acme\n\nJob: Globex\n");
}

#[test]
fn test_render_each_loop_with_spaces() {
    let context = cv_context();
    let template = "{{ each jobs |job| }}{{ job.title }};{{ /each }}";
    let result = render(template, &context).unwrap();
    assert_eq!(result, "Engineer;Lead;");
}

#[test]
fn test_render_loop_position() {
    let context = cv_context();
    let template = "{{each jobs |job|}}{{loop.index}}/{{loop.length}} {{job.company}}{{if not loop.last}}, {{/if}}{{/each}}";
    let result = render(template, &context).unwrap();
    assert_eq!(result, "1/2 Acme, 2/2 Globex");
}

#[test]
fn test_render_nested_each_loops() {
    let context = cv_context();
    let template = "{{each jobs |job|}}{{job.company}}:{{each job.tags |tag|}}[{{tag}}]{{/each}};{{/each}}";
    let result = render(template, &context).unwrap();
    assert_eq!(result, "Acme:[CI/CD][Kubernetes];Globex:;");
}

#[test]
fn test_render_outer_loop_restored_after_inner() {
    let data = toml! {
        [[groups]]
        items = ["a", "b"]
        [[groups]]
        items = ["c"]
    };
    let context = TemplateContext::new(Value::Table(data));
    let template =
        "{{each groups |g|}}{{each g.items |i|}}{{i}}{{/each}}@{{loop.index}} {{/each}}";
    let result = render(template, &context).unwrap();
    assert_eq!(result, "ab@1 c@2 ");
}

#[test]
fn test_render_empty_array() {
    let data = toml! {
        items = []
    };
    let context = TemplateContext::new(Value::Table(data));
    let template = "{{each items |item|}}{{item}}{{/each}}";
    let result = render(template, &context).unwrap();
    assert_eq!(result, "");
}
