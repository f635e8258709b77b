//! Include and named-template tests for template engine

use super::helpers::cv_context;
use super::*;
use cvtex_testkit::temp_dir_in_workspace;
use std::fs;

#[test]
fn test_render_include_shares_context() {
    let temp = temp_dir_in_workspace();
    fs::create_dir_all(temp.path().join("sections")).unwrap();
    fs::write(
        temp.path().join("sections/header.tex"),
        "<VAR>profile.name</VAR>",
    )
    .unwrap();

    let engine =
        TemplateEngine::with_syntax(Syntax::latex()).with_loader(TemplateLoader::new(temp.path()));
    let context = cv_context();
    let result = engine
        .render("[<BLOCK>include \"sections/header.tex\"</BLOCK>]", &context)
        .unwrap();
    assert_eq!(result, "[Ada Lovelace]");
}

#[test]
fn test_render_include_inside_loop_sees_loop_variable() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("job.tex"), "{{job.company}};").unwrap();

    let engine = TemplateEngine::new().with_loader(TemplateLoader::new(temp.path()));
    let context = cv_context();
    let result = engine
        .render("{{each jobs |job|}}{{include 'job.tex'}}{{/each}}", &context)
        .unwrap();
    assert_eq!(result, "Acme;Globex;");
}

#[test]
fn test_render_named_template() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("base.tex"), "Hi {{profile.name}}").unwrap();

    let engine = TemplateEngine::new().with_loader(TemplateLoader::new(temp.path()));
    let result = engine.render_named("base.tex", &cv_context()).unwrap();
    assert_eq!(result, "Hi Ada Lovelace");
}

#[test]
fn test_render_include_without_loader() {
    let context = cv_context();
    let result = render("{{include \"x.tex\"}}", &context);
    match result {
        Err(TemplateError::MalformedSyntax { message, line }) => {
            assert!(message.contains("no template directory"));
            assert_eq!(line, 1);
        }
        other => panic!("Expected MalformedSyntax, got {:?}", other),
    }
}

#[test]
fn test_render_include_missing_template() {
    let temp = temp_dir_in_workspace();
    let engine = TemplateEngine::new().with_loader(TemplateLoader::new(temp.path()));
    let result = engine.render("{{include \"missing.tex\"}}", &cv_context());
    assert_eq!(
        result,
        Err(TemplateError::TemplateNotFound {
            name: "missing.tex".to_string()
        })
    );
}

#[test]
fn test_render_include_cycle_is_bounded() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("loop.tex"), "x{{include \"loop.tex\"}}").unwrap();

    let engine = TemplateEngine::new().with_loader(TemplateLoader::new(temp.path()));
    let result = engine.render_named("loop.tex", &cv_context());
    assert!(matches!(
        result,
        Err(TemplateError::IncludeDepthExceeded { max_depth: 16, .. })
    ));
}

#[test]
fn test_render_include_path_escape() {
    let temp = temp_dir_in_workspace();
    let engine = TemplateEngine::new().with_loader(TemplateLoader::new(temp.path()));
    let result = engine.render("{{include \"../secret.tex\"}}", &cv_context());
    assert!(matches!(
        result,
        Err(TemplateError::TemplatePathEscape { .. })
    ));
}
