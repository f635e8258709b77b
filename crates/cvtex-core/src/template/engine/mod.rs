//! Template engine implementation

mod blocks;
mod helpers;
mod tokenize;

use crate::format::FilterValue;
use crate::template::error::TemplateError;
use crate::template::filters::FilterRegistry;
use crate::template::loader::TemplateLoader;
use crate::template::syntax::Syntax;
use toml::Value;

use blocks::{Node, Parser};
use helpers::{
    create_loop_context, is_truthy, resolve_array, resolve_key, stringify_value, to_filter_value,
    LoopPosition,
};
use tokenize::tokenize;

/// Maximum nesting depth for `include`
const MAX_INCLUDE_DEPTH: usize = 16;

/// Template context holding TOML data for rendering
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from TOML value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Get the underlying TOML value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// A parsed template, ready to render any number of times
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

/// Template engine for rendering templates with TOML data
///
/// Carries the tag syntax, the filter registry and an optional loader used
/// to resolve `include` tags.
#[derive(Debug)]
pub struct TemplateEngine {
    syntax: Syntax,
    filters: FilterRegistry,
    loader: Option<TemplateLoader>,
}

impl TemplateEngine {
    /// Create a new template engine with `{{ }}` syntax and the LaTeX filters
    pub fn new() -> Self {
        Self::with_syntax(Syntax::default())
    }

    /// Create an engine using the given syntax and the LaTeX filters
    pub fn with_syntax(syntax: Syntax) -> Self {
        Self {
            syntax,
            filters: FilterRegistry::latex(),
            loader: None,
        }
    }

    /// Replace the filter registry
    pub fn with_filters(mut self, filters: FilterRegistry) -> Self {
        self.filters = filters;
        self
    }

    /// Resolve `include` tags and named templates through `loader`
    pub fn with_loader(mut self, loader: TemplateLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterRegistry {
        &mut self.filters
    }

    pub fn loader(&self) -> Option<&TemplateLoader> {
        self.loader.as_ref()
    }

    /// Parse template source into a reusable [`Template`]
    pub fn compile(&self, source: &str) -> Result<Template, TemplateError> {
        let tokens = tokenize(source, &self.syntax)?;
        let nodes = Parser::new(tokens, &self.filters).parse()?;
        Ok(Template { nodes })
    }

    /// Render a template with the given context
    pub fn render(&self, source: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        let template = self.compile(source)?;
        self.render_compiled(&template, context)
    }

    /// Render an already compiled template
    pub fn render_compiled(
        &self,
        template: &Template,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        let mut output = String::new();
        self.render_nodes(&template.nodes, context.data(), &mut output, 0)?;
        Ok(output)
    }

    /// Load a template by name through the loader and render it
    pub fn render_named(
        &self,
        name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        let template = self.compile_named(name, 1)?;
        let mut output = String::new();
        self.render_nodes(&template.nodes, context.data(), &mut output, 0)?;
        Ok(output)
    }

    fn compile_named(&self, name: &str, line: usize) -> Result<Template, TemplateError> {
        let loader = self
            .loader
            .as_ref()
            .ok_or_else(|| TemplateError::MalformedSyntax {
                message: format!("Cannot load '{}': no template directory configured", name),
                line,
            })?;
        let source = loader.load(name)?;
        let template = self.compile(&source)?;
        tracing::debug!("Compiled template '{}' ({} nodes)", name, template.nodes.len());
        Ok(template)
    }

    fn render_nodes(
        &self,
        nodes: &[Node],
        data: &Value,
        output: &mut String,
        depth: usize,
    ) -> Result<(), TemplateError> {
        for node in nodes {
            match node {
                Node::Text(text) => output.push_str(text),
                Node::Placeholder { key, filters, line } => {
                    self.render_placeholder(key, filters, data, output, *line)?;
                }
                Node::Each {
                    key,
                    var_name,
                    body,
                    line,
                } => self.render_each(key, var_name, body, data, output, *line, depth)?,
                Node::If {
                    key,
                    negated,
                    then_branch,
                    else_branch,
                    ..
                } => {
                    let branch = if is_truthy(resolve_key(data, key)) != *negated {
                        then_branch
                    } else {
                        else_branch
                    };
                    self.render_nodes(branch, data, output, depth)?;
                }
                Node::Include { name, line } => {
                    if depth >= MAX_INCLUDE_DEPTH {
                        return Err(TemplateError::IncludeDepthExceeded {
                            name: name.clone(),
                            max_depth: MAX_INCLUDE_DEPTH,
                        });
                    }
                    let template = self.compile_named(name, *line)?;
                    self.render_nodes(&template.nodes, data, output, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    /// Render `{{key}}` or `{{key | filter | ...}}`
    ///
    /// A missing key renders nothing unless `strict_undefined` is set.
    fn render_placeholder(
        &self,
        key: &str,
        filters: &[String],
        data: &Value,
        output: &mut String,
        line: usize,
    ) -> Result<(), TemplateError> {
        let value = resolve_key(data, key);

        let Some((first, rest)) = filters.split_first() else {
            match value {
                Some(value) => output.push_str(&stringify_value(value, key)?),
                None if self.syntax.strict_undefined => {
                    return Err(TemplateError::UndefinedKey {
                        key: key.to_string(),
                        line,
                    });
                }
                None => {}
            }
            return Ok(());
        };

        let input = value.map(|v| to_filter_value(v, key)).transpose()?;
        let mut current = self.filters.apply(first, input.as_ref(), line)?;
        for name in rest {
            let piped = FilterValue::Scalar(current);
            current = self.filters.apply(name, Some(&piped), line)?;
        }

        output.push_str(&current);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_each(
        &self,
        key: &str,
        var_name: &str,
        body: &[Node],
        data: &Value,
        output: &mut String,
        line: usize,
        depth: usize,
    ) -> Result<(), TemplateError> {
        let items = resolve_array(data, key, line, self.syntax.strict_undefined)?;
        let length = items.len();

        for (index0, item) in items.iter().enumerate() {
            let position = LoopPosition { index0, length };
            let loop_context = create_loop_context(data, var_name, item.clone(), position);
            self.render_nodes(body, loop_context.data(), output, depth)?;
        }

        Ok(())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a template
pub fn render(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
