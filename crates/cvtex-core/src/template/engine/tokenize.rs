//! Tokenization for template engine
//!
//! Splits a template into text runs and tags in a single forward pass.

use crate::template::error::TemplateError;
use crate::template::syntax::{Delimiters, Syntax};

/// Block keywords that open a body closed by `/keyword`
const OPENING_KEYWORDS: &[&str] = &["each", "if", "raw"];

/// Block keywords that stand alone
const STANDALONE_KEYWORDS: &[&str] = &["else", "include"];

/// Which delimiter pair opened a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Variable,
    Block,
    Comment,
}

impl TagKind {
    const ALL: [TagKind; 3] = [TagKind::Variable, TagKind::Block, TagKind::Comment];

    fn index(self) -> usize {
        match self {
            TagKind::Variable => 0,
            TagKind::Block => 1,
            TagKind::Comment => 2,
        }
    }

    fn delimiters(self, syntax: &Syntax) -> &Delimiters {
        match self {
            TagKind::Variable => &syntax.variable,
            TagKind::Block => &syntax.block,
            TagKind::Comment => &syntax.comment,
        }
    }
}

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// Literal text between tags
    Text(String),

    /// `key` or `nested.key | filter`
    Placeholder { expr: String },

    /// `each items |var|`, `if key`, `raw`
    BlockStart { keyword: String, args: String },

    /// `else`, `include "name"`
    Block { keyword: String, args: String },

    /// `/each`, `/if`, `/raw`
    BlockEnd { keyword: String },

    /// Discarded comment
    Comment,
}

impl TokenKind {
    /// Tags subject to whitespace control
    fn is_block_like(&self) -> bool {
        matches!(
            self,
            TokenKind::BlockStart { .. }
                | TokenKind::Block { .. }
                | TokenKind::BlockEnd { .. }
                | TokenKind::Comment
        )
    }
}

/// A single token with its classification and line
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Line number where token starts (for error messages)
    pub line: usize,
}

/// Scanner state
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Regular template text
    Normal,
    /// Inside a `raw` block; only its closing tag is recognized
    Raw {
        /// Line of the opening `raw` tag
        line: usize,
    },
    /// An error was reported, iteration is over
    Done,
}

/// Iterator over tokens in a template string
///
/// The next opening position of each delimiter kind is cached and only
/// searched again once the scanner has moved past it, so the template is
/// scanned forward without rescanning the same bytes.
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    syntax: &'a Syntax,
    /// Current byte position
    pos: usize,
    /// Current line number (for error messages)
    line: usize,
    state: ScanState,
    /// Next occurrence per tag kind; `None` once the opener no longer occurs
    next_open: [Option<usize>; 3],
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream from template text
    pub fn new(text: &'a str, syntax: &'a Syntax) -> Self {
        let mut stream = Self {
            text,
            syntax,
            pos: 0,
            line: 1,
            state: ScanState::Normal,
            next_open: [None; 3],
        };
        for kind in TagKind::ALL {
            stream.next_open[kind.index()] = stream.find_from(kind, 0);
        }
        stream
    }

    fn find_from(&self, kind: TagKind, from: usize) -> Option<usize> {
        let open = &kind.delimiters(self.syntax).open;
        if open.is_empty() {
            return None;
        }
        self.text[from..].find(open.as_str()).map(|rel| from + rel)
    }

    /// Earliest tag opening at or after `pos`; ties go to the longer opener
    fn next_tag_start(&mut self) -> Option<(TagKind, usize)> {
        let mut best: Option<(TagKind, usize)> = None;

        for kind in TagKind::ALL {
            let idx = kind.index();
            if let Some(found) = self.next_open[idx] {
                if found < self.pos {
                    self.next_open[idx] = self.find_from(kind, self.pos);
                }
            }
            let Some(found) = self.next_open[idx] else {
                continue;
            };

            best = match best {
                None => Some((kind, found)),
                Some((best_kind, best_pos)) => {
                    let longer = kind.delimiters(self.syntax).open.len()
                        > best_kind.delimiters(self.syntax).open.len();
                    if found < best_pos || (found == best_pos && longer) {
                        Some((kind, found))
                    } else {
                        Some((best_kind, best_pos))
                    }
                }
            };
        }

        best
    }

    /// Emit text up to `end` and advance
    fn take_text(&mut self, end: usize) -> Token {
        let text = &self.text[self.pos..end];
        let token = Token {
            kind: TokenKind::Text(text.to_string()),
            line: self.line,
        };
        self.line += count_newlines(text);
        self.pos = end;
        token
    }

    /// Locate the closing delimiter of a tag opened at `start`
    ///
    /// Returns (content, end position after the closing delimiter)
    fn tag_bounds(&self, kind: TagKind, start: usize) -> Option<(&'a str, usize)> {
        let text = self.text;
        let delimiters = kind.delimiters(self.syntax);
        let content_start = start + delimiters.open.len();
        let close = text[content_start..].find(delimiters.close.as_str())?;
        let content = &text[content_start..content_start + close];
        Some((content, content_start + close + delimiters.close.len()))
    }

    /// Read the tag opened at the current position
    fn read_tag(&mut self, kind: TagKind) -> Result<Token, TemplateError> {
        let start = self.pos;
        let (content, end) =
            self.tag_bounds(kind, start)
                .ok_or_else(|| TemplateError::MalformedSyntax {
                    message: format!("Unclosed tag '{}'", kind.delimiters(self.syntax).open),
                    line: self.line,
                })?;

        let token = Token {
            kind: self.classify(kind, content)?,
            line: self.line,
        };

        if matches!(&token.kind, TokenKind::BlockStart { keyword, .. } if keyword == "raw") {
            self.state = ScanState::Raw { line: self.line };
        }

        self.line += count_newlines(&self.text[start..end]);
        self.pos = end;
        Ok(token)
    }

    /// Classify tag content into TokenKind
    ///
    /// - `each items |var|`, `if key`, `raw` → BlockStart
    /// - `else`, `include "name"` → Block
    /// - `/each` → BlockEnd
    /// - `key` or `nested.key | filter` → Placeholder
    fn classify(&self, kind: TagKind, content: &str) -> Result<TokenKind, TemplateError> {
        match kind {
            TagKind::Comment => Ok(TokenKind::Comment),
            TagKind::Variable if !self.syntax.shared_tags() => Ok(TokenKind::Placeholder {
                expr: content.trim().to_string(),
            }),
            TagKind::Variable => Ok(classify_block(content).unwrap_or_else(|| {
                TokenKind::Placeholder {
                    expr: content.trim().to_string(),
                }
            })),
            TagKind::Block => {
                classify_block(content).ok_or_else(|| TemplateError::MalformedSyntax {
                    message: format!("Unknown block tag '{}'", content.trim()),
                    line: self.line,
                })
            }
        }
    }

    /// Find the `/raw` tag that closes the current raw block
    fn find_raw_end(&self) -> Option<usize> {
        let open = &self.syntax.block.open;
        let mut from = self.pos;

        while let Some(rel) = self.text[from..].find(open.as_str()) {
            let candidate = from + rel;
            if let Some((content, _)) = self.tag_bounds(TagKind::Block, candidate) {
                if let Some(rest) = content.trim().strip_prefix('/') {
                    if rest.trim() == "raw" {
                        return Some(candidate);
                    }
                }
            }
            from = candidate + open.len();
        }

        None
    }

    fn next_normal(&mut self) -> Option<Result<Token, TemplateError>> {
        match self.next_tag_start() {
            Some((_, start)) if start > self.pos => Some(Ok(self.take_text(start))),
            Some((kind, _)) => Some(self.read_tag(kind)),
            None => Some(Ok(self.take_text(self.text.len()))),
        }
    }

    fn next_raw(&mut self, raw_line: usize) -> Option<Result<Token, TemplateError>> {
        let Some(end_tag) = self.find_raw_end() else {
            return Some(Err(TemplateError::MalformedSyntax {
                message: "Unclosed raw block".to_string(),
                line: raw_line,
            }));
        };

        if end_tag > self.pos {
            return Some(Ok(self.take_text(end_tag)));
        }

        self.state = ScanState::Normal;
        Some(self.read_tag(TagKind::Block))
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.state {
            ScanState::Done => return None,
            ScanState::Raw { line } => self.next_raw(line),
            ScanState::Normal if self.pos >= self.text.len() => return None,
            ScanState::Normal => self.next_normal(),
        };

        if matches!(result, Some(Err(_))) {
            self.state = ScanState::Done;
        }
        result
    }
}

/// Classify block tag content; `None` when it is not a block keyword
fn classify_block(content: &str) -> Option<TokenKind> {
    let trimmed = content.trim();

    if let Some(rest) = trimmed.strip_prefix('/') {
        return Some(TokenKind::BlockEnd {
            keyword: rest.trim().to_string(),
        });
    }

    let (keyword, args) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args.trim()),
        None => (trimmed, ""),
    };

    if OPENING_KEYWORDS.contains(&keyword) {
        Some(TokenKind::BlockStart {
            keyword: keyword.to_string(),
            args: args.to_string(),
        })
    } else if STANDALONE_KEYWORDS.contains(&keyword) {
        Some(TokenKind::Block {
            keyword: keyword.to_string(),
            args: args.to_string(),
        })
    } else {
        None
    }
}

/// Tokenize a whole template and apply whitespace control
pub(crate) fn tokenize(text: &str, syntax: &Syntax) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = TokenStream::new(text, syntax).collect::<Result<Vec<_>, _>>()?;
    apply_whitespace_control(&mut tokens, syntax);
    Ok(tokens)
}

/// Strip whitespace around block and comment tags
///
/// `lstrip_blocks` runs first so that it sees line starts as they are in the
/// source, before `trim_blocks` removes newlines.
pub(crate) fn apply_whitespace_control(tokens: &mut [Token], syntax: &Syntax) {
    if syntax.lstrip_blocks {
        for i in 1..tokens.len() {
            if !tokens[i].kind.is_block_like() {
                continue;
            }
            let at_template_start = i == 1;
            if let TokenKind::Text(prev) = &mut tokens[i - 1].kind {
                lstrip_line_tail(prev, at_template_start);
            }
        }
    }

    if syntax.trim_blocks {
        for i in 0..tokens.len().saturating_sub(1) {
            if !tokens[i].kind.is_block_like() {
                continue;
            }
            if let TokenKind::Text(next) = &mut tokens[i + 1].kind {
                trim_leading_newline(next);
            }
        }
    }
}

/// Remove spaces/tabs between the last line start and the end of `text`
fn lstrip_line_tail(text: &mut String, at_template_start: bool) {
    let line_start = match text.rfind('\n') {
        Some(newline) => newline + 1,
        None if at_template_start => 0,
        None => return,
    };

    if text[line_start..].chars().all(|c| c == ' ' || c == '\t') {
        text.truncate(line_start);
    }
}

/// Remove one leading `\n` or `\r\n`
fn trim_leading_newline(text: &mut String) {
    if text.starts_with("\r\n") {
        text.drain(..2);
    } else if text.starts_with('\n') {
        text.remove(0);
    }
}

/// Count newlines in text
pub(crate) fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
