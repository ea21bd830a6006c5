use tracing::debug;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::node::{Argument, EmptyNode, Node};
use crate::parser::Parser;
use crate::reader::Token;


/// `{% load i18n ember %}`
pub(crate) fn load(parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    let libraries = parser.libraries();
    for name in token.split_contents().into_iter().skip(1) {
        let library = libraries.get(name).ok_or_else(
            || Error::UnknownLibrary { name: name.to_owned(), line: token.line }
        )?;
        debug!(library = name, "loading tag library");
        parser.add_library(library);
    }
    Ok(Box::new(EmptyNode))
}

/// `{% comment %}...{% endcomment %}`, the body is never compiled.
pub(crate) fn comment(parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    parser.skip_past(token, "endcomment")?;
    Ok(Box::new(EmptyNode))
}


#[derive(Debug)]
struct UrlNode {
    name: Argument,
    args: Vec<Argument>
}

impl Node for UrlNode {
    fn render(&self, context: &Context) -> Result<String> {
        let name = self.name.resolve(context);
        let args = self.args.iter()
            .map(|arg| arg.resolve(context))
            .collect::<Vec<_>>();
        context.settings().reverse(&name, &args)
    }
}

/// `{% url "user-detail" user.id %}`
pub(crate) fn url(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    let bits = token.split_contents();
    let (name, args) = match bits.get(1..) {
        Some([name, args @ ..]) => (name, args),
        _ => return Err(Error::MissingArguments {
            tag: "url".to_owned(),
            line: token.line
        })
    };
    Ok(Box::new(UrlNode {
        name: Argument::parse(name),
        args: args.iter().map(|arg| Argument::parse(arg)).collect()
    }))
}
