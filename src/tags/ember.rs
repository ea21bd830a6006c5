use crate::context::Context;
use crate::error::{Error, Result};
use crate::node::{unquote, Node, Nodes};
use crate::parser::Parser;
use crate::reader::Token;


#[derive(Debug)]
struct LinkToNode {
    args: String,
    children: Nodes
}

impl Node for LinkToNode {
    fn render(&self, context: &Context) -> Result<String> {
        Ok(format!(
            "{{{{#linkTo {}}}}}{}{{{{/linkTo}}}}",
            self.args,
            self.children.render(context)?
        ))
    }
}

/// `{% linkto "route" model %}...{% endlinkto %}`
///
/// The body is an ordinary template: its variables and tags are
/// rendered server side, the arguments are kept as written.
pub(crate) fn linkto(parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    let bits = token.split_contents();
    if bits.len() < 2 {
        return Err(Error::MissingArguments {
            tag: "linkto".to_owned(),
            line: token.line
        });
    }
    let children = parser.parse(token, &["endlinkto"])?;
    parser.next_token();
    Ok(Box::new(LinkToNode {
        args: bits[1..].join(" "),
        children
    }))
}


#[derive(Debug)]
struct EscapeNode {
    expression: String
}

impl Node for EscapeNode {
    fn render(&self, _context: &Context) -> Result<String> {
        Ok(format!("{{{{{}}}}}", self.expression))
    }
}

/// `{% ember #if user.isAdmin %}` renders `{{#if user.isAdmin}}`.
pub(crate) fn ember(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    let expression = token.arguments();
    if expression.is_empty() {
        return Err(Error::MissingArguments {
            tag: "ember".to_owned(),
            line: token.line
        });
    }
    Ok(Box::new(EscapeNode {
        expression: expression.to_owned()
    }))
}


/// Whether a library stack starts with jQuery.
#[derive(Debug, Clone, PartialEq, Eq)]
enum JqueryFlag {
    Never,
    Literal(bool),
    Variable(String),
}

impl JqueryFlag {
    fn parse(value: &str) -> Self {
        match value {
            "true" | "True" => JqueryFlag::Literal(true),
            "false" | "False" => JqueryFlag::Literal(false),
            _ => match unquote(value) {
                Some(text) => JqueryFlag::Literal(!text.is_empty()),
                None => JqueryFlag::Variable(value.to_owned())
            }
        }
    }

    fn is_set(&self, context: &Context) -> bool {
        match self {
            JqueryFlag::Never => false,
            JqueryFlag::Literal(b) => *b,
            JqueryFlag::Variable(path) => context.is_truthy(path)
        }
    }
}


/// One `<script>` element per library, one per line.
#[derive(Debug)]
struct JsLibsNode {
    jquery: JqueryFlag,
    libs: &'static [&'static str]
}

impl Node for JsLibsNode {
    fn render(&self, context: &Context) -> Result<String> {
        let settings = context.settings();
        let jquery = if self.jquery.is_set(context) {
            Some("jquery")
        } else {
            None
        };
        Ok(jquery.into_iter()
            .chain(self.libs.iter().copied())
            .map(|name| settings.js_lib(name))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn js_libs(token: &Token<'_>, libs: &'static [&'static str]) -> Result<Box<dyn Node>> {
    if !token.arguments().is_empty() {
        return Err(Error::InvalidArguments {
            tag: token.command().to_owned(),
            message: "takes no arguments".to_owned(),
            line: token.line
        });
    }
    Ok(Box::new(JsLibsNode { jquery: JqueryFlag::Never, libs }))
}

// accepts `jquery=false` or a single positional flag, jQuery included by default
fn js_stack(token: &Token<'_>, libs: &'static [&'static str]) -> Result<Box<dyn Node>> {
    let jquery = match token.split_contents().as_slice() {
        [_] => JqueryFlag::Literal(true),
        [_, arg] => {
            let value = arg.strip_prefix("jquery=").unwrap_or(*arg);
            if value.contains('=') {
                return Err(Error::InvalidArguments {
                    tag: token.command().to_owned(),
                    message: format!("received unexpected keyword argument '{}'", arg),
                    line: token.line
                });
            }
            JqueryFlag::parse(value)
        },
        _ => return Err(Error::InvalidArguments {
            tag: token.command().to_owned(),
            message: "takes at most one argument".to_owned(),
            line: token.line
        })
    };
    Ok(Box::new(JsLibsNode { jquery, libs }))
}

pub(crate) fn jquery_js(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    js_libs(token, &["jquery"])
}

pub(crate) fn handlebars_js(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    js_libs(token, &["handlebars"])
}

pub(crate) fn ember_js(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    js_libs(token, &["ember"])
}

pub(crate) fn ember_data_js(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    js_libs(token, &["ember-data"])
}

pub(crate) fn tastypie_adapter_js(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    js_libs(token, &["tastypie_adapter"])
}

/// jQuery, Handlebars and Ember.
pub(crate) fn ember_full_js(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    js_stack(token, &["handlebars", "ember"])
}

/// The full Ember stack plus Ember Data and its Tastypie adapter.
pub(crate) fn emberpie_js(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    js_stack(token, &["handlebars", "ember", "ember-data", "tastypie_adapter"])
}
