use tracing::debug;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::node::{Argument, Node};
use crate::parser::Parser;
use crate::reader::Token;


#[derive(Debug)]
struct TransNode {
    message: Argument,
    noop: bool
}

impl Node for TransNode {
    fn render(&self, context: &Context) -> Result<String> {
        let message = self.message.resolve(context);
        if self.noop {
            return Ok(message);
        }
        let settings = context.settings();
        let translated = settings.translate(&message);
        if translated == message {
            debug!(message = %message, language = %settings.language_code, "no translation");
        }
        Ok(translated.to_owned())
    }
}

/// `{% trans "message" %}` or `{% trans "message" noop %}`
pub(crate) fn trans(_parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
    let bits = token.split_contents();
    match bits.as_slice() {
        [_, message] => Ok(Box::new(TransNode {
            message: Argument::parse(message),
            noop: false
        })),
        [_, message, "noop"] => Ok(Box::new(TransNode {
            message: Argument::parse(message),
            noop: true
        })),
        [_] => Err(Error::MissingArguments {
            tag: "trans".to_owned(),
            line: token.line
        }),
        _ => Err(Error::InvalidArguments {
            tag: "trans".to_owned(),
            message: "takes a message and an optional 'noop'".to_owned(),
            line: token.line
        })
    }
}
