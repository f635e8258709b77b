//! Block matching: turns the token stream into a node tree

use crate::template::error::TemplateError;
use crate::template::filters::FilterRegistry;

use super::tokenize::{Token, TokenKind};

/// A compiled template node
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Text(String),
    Placeholder {
        key: String,
        filters: Vec<String>,
        line: usize,
    },
    Each {
        key: String,
        var_name: String,
        body: Vec<Node>,
        line: usize,
    },
    If {
        key: String,
        negated: bool,
        then_branch: Vec<Node>,
        else_branch: Vec<Node>,
        line: usize,
    },
    Include {
        name: String,
        line: usize,
    },
}

/// Why a node sequence stopped
enum Stop {
    Eof,
    Else { line: usize },
    End { keyword: String, line: usize },
}

/// Recursive-descent parser over tokens
pub(crate) struct Parser<'a> {
    tokens: std::vec::IntoIter<Token>,
    filters: &'a FilterRegistry,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, filters: &'a FilterRegistry) -> Self {
        Self {
            tokens: tokens.into_iter(),
            filters,
        }
    }

    /// Parse the whole template
    pub fn parse(mut self) -> Result<Vec<Node>, TemplateError> {
        let (nodes, stop) = self.parse_sequence()?;
        match stop {
            Stop::Eof => Ok(nodes),
            Stop::Else { line } => Err(TemplateError::MalformedSyntax {
                message: "Unexpected 'else' without matching 'if'".to_string(),
                line,
            }),
            Stop::End { keyword, line } => Err(TemplateError::MalformedSyntax {
                message: format!(
                    "Unexpected '/{}' without matching '{}'",
                    keyword, keyword
                ),
                line,
            }),
        }
    }

    /// Parse nodes until end of input, `else`, or a closing tag
    fn parse_sequence(&mut self) -> Result<(Vec<Node>, Stop), TemplateError> {
        let mut nodes = Vec::new();

        while let Some(token) = self.tokens.next() {
            let line = token.line;
            match token.kind {
                TokenKind::Text(text) => {
                    if !text.is_empty() {
                        nodes.push(Node::Text(text));
                    }
                }
                TokenKind::Comment => {}
                TokenKind::Placeholder { expr } => {
                    nodes.push(self.parse_placeholder(&expr, line)?);
                }
                TokenKind::BlockStart { keyword, args } => {
                    nodes.push(self.parse_block(&keyword, &args, line)?);
                }
                TokenKind::Block { keyword, args } => match keyword.as_str() {
                    "else" => return Ok((nodes, Stop::Else { line })),
                    "include" => nodes.push(Node::Include {
                        name: parse_include_name(&args, line)?,
                        line,
                    }),
                    other => {
                        return Err(TemplateError::MalformedSyntax {
                            message: format!("Unknown block tag '{}'", other),
                            line,
                        });
                    }
                },
                TokenKind::BlockEnd { keyword } => {
                    return Ok((nodes, Stop::End { keyword, line }));
                }
            }
        }

        Ok((nodes, Stop::Eof))
    }

    /// Parse the body of a block opened at `line` up to its `/keyword`
    fn parse_body(&mut self, keyword: &str, line: usize) -> Result<Vec<Node>, TemplateError> {
        let (nodes, stop) = self.parse_sequence()?;
        close_block(keyword, line, stop)?;
        Ok(nodes)
    }

    fn parse_block(
        &mut self,
        keyword: &str,
        args: &str,
        line: usize,
    ) -> Result<Node, TemplateError> {
        match keyword {
            "each" => {
                let (key, var_name) = parse_each_syntax(args, line)?;
                let body = self.parse_body("each", line)?;
                Ok(Node::Each {
                    key: key.to_string(),
                    var_name: var_name.to_string(),
                    body,
                    line,
                })
            }
            "if" => {
                let (key, negated) = parse_condition(args, line)?;
                let (then_branch, stop) = self.parse_sequence()?;
                let else_branch = match stop {
                    Stop::Else { .. } => self.parse_body("if", line)?,
                    other => {
                        close_block("if", line, other)?;
                        Vec::new()
                    }
                };
                Ok(Node::If {
                    key: key.to_string(),
                    negated,
                    then_branch,
                    else_branch,
                    line,
                })
            }
            "raw" => {
                let body = self.parse_body("raw", line)?;
                let text = body
                    .into_iter()
                    .filter_map(|node| match node {
                        Node::Text(text) => Some(text),
                        _ => None,
                    })
                    .collect();
                Ok(Node::Text(text))
            }
            other => Err(TemplateError::MalformedSyntax {
                message: format!("Unknown block tag '{}'", other),
                line,
            }),
        }
    }

    /// Parse "key | filter | filter" and check every filter is registered
    fn parse_placeholder(&self, expr: &str, line: usize) -> Result<Node, TemplateError> {
        let mut parts = expr.split('|').map(str::trim);
        let key = parts.next().unwrap_or_default();

        if key.is_empty() {
            return Err(TemplateError::MalformedSyntax {
                message: "Empty placeholder".to_string(),
                line,
            });
        }

        let mut filters = Vec::new();
        for name in parts {
            if name.is_empty() {
                return Err(TemplateError::MalformedSyntax {
                    message: format!("Empty filter name in '{}'", expr),
                    line,
                });
            }
            if !self.filters.contains(name) {
                return Err(TemplateError::UnknownFilter {
                    name: name.to_string(),
                    line,
                });
            }
            filters.push(name.to_string());
        }

        Ok(Node::Placeholder {
            key: key.to_string(),
            filters,
            line,
        })
    }
}

/// Check that `stop` is the `/keyword` closing a block opened at `line`
fn close_block(keyword: &str, line: usize, stop: Stop) -> Result<(), TemplateError> {
    match stop {
        Stop::End { keyword: found, .. } if found == keyword => Ok(()),
        Stop::End {
            keyword: found,
            line: end_line,
        } => Err(TemplateError::MalformedSyntax {
            message: format!(
                "Expected '/{}' to close '{}' from line {}, found '/{}'",
                keyword, keyword, line, found
            ),
            line: end_line,
        }),
        Stop::Else { line: else_line } => Err(TemplateError::MalformedSyntax {
            message: format!("Unexpected 'else' inside '{}'", keyword),
            line: else_line,
        }),
        Stop::Eof => Err(TemplateError::MalformedSyntax {
            message: format!("Unclosed {} block", keyword),
            line,
        }),
    }
}

/// Parse each loop syntax: "items |item|" → (key, var_name)
fn parse_each_syntax(rest: &str, line: usize) -> Result<(&str, &str), TemplateError> {
    let pipe_pos = rest
        .find('|')
        .ok_or_else(|| TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: expected |var| in 'each {}'", rest),
            line,
        })?;

    let key = rest[..pipe_pos].trim();
    let var_end = rest[pipe_pos + 1..]
        .find('|')
        .ok_or_else(|| TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: unclosed |var| in 'each {}'", rest),
            line,
        })?;

    let var_name = rest[pipe_pos + 1..pipe_pos + 1 + var_end].trim();
    if key.is_empty() || var_name.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: missing key or variable in 'each {}'", rest),
            line,
        });
    }
    Ok((key, var_name))
}

/// Parse "key" or "not key" → (key, negated)
fn parse_condition(rest: &str, line: usize) -> Result<(&str, bool), TemplateError> {
    let (key, negated) = match rest.strip_prefix("not ") {
        Some(key) => (key.trim(), true),
        None => (rest.trim(), false),
    };

    if key.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: "Invalid if syntax: expected a key after 'if'".to_string(),
            line,
        });
    }
    Ok((key, negated))
}

/// Parse `"name"`, `'name'` or a bare name
fn parse_include_name(args: &str, line: usize) -> Result<String, TemplateError> {
    let trimmed = args.trim();
    let name = ['"', '\'']
        .iter()
        .find_map(|&quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(trimmed);

    if name.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: "Invalid include syntax: expected a template name".to_string(),
            line,
        });
    }
    Ok(name.to_string())
}
