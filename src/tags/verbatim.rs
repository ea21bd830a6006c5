//! Verbatim regions: client-side `{{ }}` syntax passes through untouched
//! while host tags inside the region still run.
use tracing::debug;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::node::{unquote, Node};
use crate::parser::Parser;
use crate::reader::{Token, TokenKind};


/// One compiled piece of a verbatim region.
#[derive(Debug)]
pub enum Item {
    Literal(String),
    Node(Box<dyn Node>),
}


/// The compiled content of a verbatim region, in render order.
#[derive(Debug)]
pub struct VerbatimBlock {
    items: Vec<Item>
}

impl VerbatimBlock {
    /// Consume tokens up to the `end_tag` block.
    ///
    /// Variables are turned back into literal `{{...}}` text, comments are
    /// dropped and block tags are compiled through the parser.
    pub fn scan(parser: &mut Parser<'_>, token: &Token<'_>, end_tag: &str) -> Result<Self> {
        let mut items = Vec::new();
        loop {
            let next = parser.next_token().ok_or_else(|| Error::UnterminatedBlock {
                end_tag: end_tag.to_owned(),
                line: token.line
            })?;
            match next.kind {
                TokenKind::Block if next.contents() == end_tag => break,
                TokenKind::Text => push_literal(&mut items, next.raw),
                TokenKind::Variable => {
                    push_literal(&mut items, "{{");
                    push_literal(&mut items, next.raw);
                    push_literal(&mut items, "}}");
                },
                TokenKind::Comment => {},
                TokenKind::Block => items.push(Item::Node(parser.compile_block(&next)?))
            }
        }
        debug!(tag = token.command(), items = items.len(), "compiled verbatim block");
        Ok(VerbatimBlock { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Render the items in order, then hand the result to `wrap` if any.
    pub fn render_wrapped(
        &self, context: &Context, wrap: Option<&dyn Fn(String) -> String>
    ) -> Result<String> {
        let body = self.items.iter().try_fold(String::new(), |mut output, item| {
            match item {
                Item::Literal(text) => output.push_str(text),
                Item::Node(node) => output.push_str(&node.render(context)?)
            }
            Ok::<_, Error>(output)
        })?;
        Ok(match wrap {
            Some(wrap) => wrap(body),
            None => body
        })
    }
}

fn push_literal(items: &mut Vec<Item>, text: &str) {
    match items.last_mut() {
        Some(Item::Literal(literal)) => literal.push_str(text),
        _ => items.push(Item::Literal(text.to_owned()))
    }
}


impl Node for VerbatimBlock {
    fn render(&self, context: &Context) -> Result<String> {
        self.render_wrapped(context, None)
    }
}

/// `{% verbatim %}...{% endverbatim %}`
pub(crate) fn verbatim(parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    Ok(Box::new(VerbatimBlock::scan(parser, token, "endverbatim")?))
}


/// A verbatim block inside a Handlebars `<script>` element.
#[derive(Debug)]
struct HandlebarsNode {
    template_id: Option<String>,
    block: VerbatimBlock
}

impl HandlebarsNode {
    fn wrap(&self, body: String) -> String {
        let head_script = match &self.template_id {
            Some(id) => format!(r#"<script type="text/x-handlebars" data-template-name="{}">"#, id),
            None => r#"<script type="text/x-handlebars">"#.to_owned()
        };
        format!("{}\n{}\n</script>", head_script, body)
    }
}

impl Node for HandlebarsNode {
    fn render(&self, context: &Context) -> Result<String> {
        self.block.render_wrapped(context, Some(&|body: String| self.wrap(body)))
    }
}

/// `{% handlebars "template-id" %}...{% endhandlebars %}`, id optional.
///
/// An empty id is the same as no id.
pub(crate) fn handlebars(parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    let template_id = match token.split_contents().as_slice() {
        [_] => None,
        [_, id] => Some(unquote(id).unwrap_or_else(|| id.to_string())).filter(|id| !id.is_empty()),
        _ => return Err(Error::InvalidArguments {
            tag: "handlebars".to_owned(),
            message: "takes at most one argument".to_owned(),
            line: token.line
        })
    };
    let block = VerbatimBlock::scan(parser, token, "endhandlebars")?;
    Ok(Box::new(HandlebarsNode { template_id, block }))
}
