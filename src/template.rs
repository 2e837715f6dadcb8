//! Placeholder templates for generated project files.
//!
//! A template is plain text with tags in double braces:
//!
//! ```text
//! module {{ module_name }}
//! {{ if with_redis }}
//! redis: {{ redis_version }}
//! {{ else }}
//! # redis disabled
//! {{ end }}
//! ```
//!
//! `{{ name }}` interpolates a context field, `{{ if name }}` / `{{ if not name }}` open a
//! block guarded by a boolean field, `{{ else }}` and `{{ end }}` continue and close it.
//! A block tag that is alone on its line removes the whole line from the output.
//!
//! Parsing yields a small [`Node`] tree which [`Template::render`] evaluates against a
//! JSON object, so the evaluator can be exercised without any file I/O.

use serde_json::Value;
use thiserror::Error;

/// Failures while parsing or evaluating a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed tag opened on line {line}")]
    UnclosedTag { line: usize },

    #[error("invalid placeholder '{tag}' on line {line}")]
    InvalidPlaceholder { tag: String, line: usize },

    #[error("'{tag}' on line {line} has no matching 'if'")]
    UnexpectedTag { tag: String, line: usize },

    #[error("duplicate 'else' on line {line}")]
    DuplicateElse { line: usize },

    #[error("'if' on line {line} is never closed with 'end'")]
    UnterminatedBlock { line: usize },

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{0}' is not a boolean")]
    NotABoolean(String),
}

/// One element of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text copied to the output.
    Text(String),
    /// Value of the named context field.
    Field(String),
    /// Region included only when the named boolean field matches.
    Conditional {
        field: String,
        negated: bool,
        then_branch: Vec<Node>,
        else_branch: Vec<Node>,
    },
}

/// A parsed template, ready to be rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

#[derive(Debug)]
enum Tag {
    Field(String),
    If { field: String, negated: bool },
    Else,
    End,
}

#[derive(Debug)]
enum Token {
    Text(String),
    Tag { tag: Tag, line: usize },
}

impl Token {
    fn is_block(&self) -> bool {
        matches!(self, Token::Tag { tag: Tag::If { .. } | Tag::Else | Tag::End, .. })
    }
}

impl Template {
    /// Parses template text.
    ///
    /// # Errors
    /// Any malformed tag or unbalanced block yields a [`TemplateError`] naming the line.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let tokens = strip_standalone_lines(tokenize(source)?);
        let nodes = build_tree(tokens)?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Evaluates the template against a JSON object.
    ///
    /// # Errors
    /// * `TemplateError::UnknownField` if a referenced field is absent
    /// * `TemplateError::NotABoolean` if a block is guarded by a non-boolean field
    pub fn render(&self, context: &Value) -> Result<String, TemplateError> {
        let mut out = String::new();
        render_nodes(&self.nodes, context, &mut out)?;
        Ok(out)
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders template text with the given context.
    fn render(&self, template: &str, context: &Value) -> Result<String, TemplateError>;
}

/// Renderer for the placeholder syntax described in the module documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String, TemplateError> {
        Template::parse(template)?.render(context)
    }
}

fn line_at(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_tag(raw: &str, line: usize) -> Result<Tag, TemplateError> {
    let invalid = || TemplateError::InvalidPlaceholder { tag: raw.trim().to_string(), line };
    let words: Vec<&str> = raw.split_whitespace().collect();

    let tag = match words.as_slice() {
        ["else"] => Tag::Else,
        ["end"] => Tag::End,
        ["if", field] if is_identifier(field) => {
            Tag::If { field: field.to_string(), negated: false }
        }
        ["if", "not", field] if is_identifier(field) => {
            Tag::If { field: field.to_string(), negated: true }
        }
        [field] if is_identifier(field) => Tag::Field(field.to_string()),
        _ => return Err(invalid()),
    };
    Ok(tag)
}

fn tokenize(source: &str) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(start) = source[cursor..].find("{{").map(|i| cursor + i) {
        if start > cursor {
            tokens.push(Token::Text(source[cursor..start].to_string()));
        }
        let line = line_at(source, start);
        let inner_start = start + 2;
        let end = source[inner_start..]
            .find("}}")
            .map(|i| inner_start + i)
            .ok_or(TemplateError::UnclosedTag { line })?;

        let tag = parse_tag(&source[inner_start..end], line)?;
        tokens.push(Token::Tag { tag, line });
        cursor = end + 2;
    }

    if cursor < source.len() {
        tokens.push(Token::Text(source[cursor..].to_string()));
    }
    Ok(tokens)
}

/// Removes the surrounding indentation and line break of block tags that are alone on
/// their line.
fn strip_standalone_lines(mut tokens: Vec<Token>) -> Vec<Token> {
    let text_of = |token: Option<&Token>| match token {
        Some(Token::Text(text)) => Some(text.clone()),
        _ => None,
    };

    let count = tokens.len();
    // (trim_leading_line, trim_trailing_line) per token
    let mut trims = vec![(false, false); count];

    for i in 0..count {
        if !tokens[i].is_block() {
            continue;
        }

        let before = if i == 0 { Some(String::new()) } else { text_of(tokens.get(i - 1)) };
        let starts_line = match &before {
            Some(text) => match text.rfind('\n') {
                Some(pos) => text[pos + 1..].trim().is_empty(),
                None => i <= 1 && text.trim().is_empty(),
            },
            None => false,
        };

        let after = if i + 1 == count { Some(String::new()) } else { text_of(tokens.get(i + 1)) };
        let ends_line = match &after {
            Some(text) => match text.find('\n') {
                Some(pos) => text[..pos].trim().is_empty(),
                None => i + 2 >= count && text.trim().is_empty(),
            },
            None => false,
        };

        if starts_line && ends_line {
            if i > 0 {
                trims[i - 1].1 = true;
            }
            if i + 1 < count {
                trims[i + 1].0 = true;
            }
        }
    }

    for (token, (leading, trailing)) in tokens.iter_mut().zip(trims) {
        if let Token::Text(text) = token {
            let start = if leading { text.find('\n').map_or(text.len(), |p| p + 1) } else { 0 };
            let end = if trailing { text.rfind('\n').map_or(0, |p| p + 1) } else { text.len() };
            *text = if start < end { text[start..end].to_string() } else { String::new() };
        }
    }

    tokens.retain(|token| !matches!(token, Token::Text(text) if text.is_empty()));
    tokens
}

struct OpenBlock {
    field: String,
    negated: bool,
    line: usize,
    then_branch: Vec<Node>,
    else_branch: Option<Vec<Node>>,
}

fn build_tree(tokens: Vec<Token>) -> Result<Vec<Node>, TemplateError> {
    let mut root = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();

    fn current<'a>(root: &'a mut Vec<Node>, stack: &'a mut [OpenBlock]) -> &'a mut Vec<Node> {
        match stack.last_mut() {
            Some(block) => block.else_branch.as_mut().unwrap_or(&mut block.then_branch),
            None => root,
        }
    }

    for token in tokens {
        match token {
            Token::Text(text) => current(&mut root, &mut stack).push(Node::Text(text)),
            Token::Tag { tag: Tag::Field(name), .. } => {
                current(&mut root, &mut stack).push(Node::Field(name))
            }
            Token::Tag { tag: Tag::If { field, negated }, line } => stack.push(OpenBlock {
                field,
                negated,
                line,
                then_branch: Vec::new(),
                else_branch: None,
            }),
            Token::Tag { tag: Tag::Else, line } => match stack.last_mut() {
                Some(block) if block.else_branch.is_some() => {
                    return Err(TemplateError::DuplicateElse { line })
                }
                Some(block) => block.else_branch = Some(Vec::new()),
                None => return Err(TemplateError::UnexpectedTag { tag: "else".into(), line }),
            },
            Token::Tag { tag: Tag::End, line } => {
                let block = stack
                    .pop()
                    .ok_or(TemplateError::UnexpectedTag { tag: "end".into(), line })?;
                current(&mut root, &mut stack).push(Node::Conditional {
                    field: block.field,
                    negated: block.negated,
                    then_branch: block.then_branch,
                    else_branch: block.else_branch.unwrap_or_default(),
                });
            }
        }
    }

    match stack.pop() {
        Some(block) => Err(TemplateError::UnterminatedBlock { line: block.line }),
        None => Ok(root),
    }
}

fn lookup<'a>(context: &'a Value, field: &str) -> Result<&'a Value, TemplateError> {
    context.get(field).ok_or_else(|| TemplateError::UnknownField(field.to_string()))
}

fn render_nodes(nodes: &[Node], context: &Value, out: &mut String) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Field(field) => match lookup(context, field)? {
                Value::String(s) => out.push_str(s),
                Value::Null => {}
                other => out.push_str(&other.to_string()),
            },
            Node::Conditional { field, negated, then_branch, else_branch } => {
                let flag = lookup(context, field)?
                    .as_bool()
                    .ok_or_else(|| TemplateError::NotABoolean(field.clone()))?;
                let branch = if flag != *negated { then_branch } else { else_branch };
                render_nodes(branch, context, out)?;
            }
        }
    }
    Ok(())
}
