use std::fmt::Debug;
use crate::context::Context;
use crate::error::Result;


/// A compiled piece of template, rendered against a [Context].
///
/// Nodes are immutable once compiled so a template can be rendered
/// from several threads at once.
pub trait Node: Debug + Send + Sync {
    fn render(&self, context: &Context) -> Result<String>;
}

pub type Nodes = Vec<Box<dyn Node>>;

impl Node for Nodes {
    fn render(&self, context: &Context) -> Result<String> {
        self.iter()
            .map(|child| child.render(context))
            .collect::<Result<Vec<_>>>()
            .map(|parts| parts.concat())
    }
}


#[derive(Debug)]
pub(crate) struct TextNode {
    text: String
}

impl TextNode {
    pub(crate) fn new(text: &str) -> Self {
        TextNode {
            text: text.to_owned()
        }
    }
}

impl Node for TextNode {
    fn render(&self, _context: &Context) -> Result<String> {
        Ok(self.text.clone())
    }
}


#[derive(Debug)]
pub(crate) struct VariableNode {
    expression: Argument
}

impl VariableNode {
    pub(crate) fn new(contents: &str) -> Self {
        VariableNode {
            expression: Argument::parse(contents)
        }
    }
}

impl Node for VariableNode {
    fn render(&self, context: &Context) -> Result<String> {
        Ok(html_escape(&self.expression.resolve(context)))
    }
}


/// Renders nothing; what `load` and `comment` compile to.
#[derive(Debug)]
pub(crate) struct EmptyNode;

impl Node for EmptyNode {
    fn render(&self, _context: &Context) -> Result<String> {
        Ok(String::new())
    }
}


/// A tag argument: a quoted string literal or a variable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Argument {
    Literal(String),
    Variable(String),
}

impl Argument {
    pub(crate) fn parse(word: &str) -> Self {
        match unquote(word) {
            Some(text) => Argument::Literal(text),
            None => Argument::Variable(word.to_owned())
        }
    }

    pub(crate) fn resolve(&self, context: &Context) -> String {
        match self {
            Argument::Literal(text) => text.clone(),
            Argument::Variable(path) => context.resolve_or_invalid(path)
        }
    }
}

/// The inside of a single or double quoted word, with `\"`, `\'` and
/// `\\` unescaped.
pub(crate) fn unquote(word: &str) -> Option<String> {
    let quote = word.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    if word.len() < 2 || !word.ends_with(quote) {
        return None;
    }
    let escaped_quote = format!("\\{}", quote);
    Some(word[1..word.len() - 1]
        .replace(&escaped_quote, &quote.to_string())
        .replace("\\\\", "\\"))
}

fn html_escape(input: &str) -> String {
    input.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::settings::Settings;

    #[test]
    fn variable_is_escaped() {
        let settings = Settings::default();
        let context = Context::with_data(&settings, json!({"name": "<b>Tom & 'Jerry'</b>"}));
        let node = VariableNode::new("name");
        assert_eq!(
            node.render(&context).unwrap(),
            "&lt;b&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn literal_variable() {
        let settings = Settings::default();
        let context = Context::new(&settings);
        assert_eq!(VariableNode::new("\"hi\"").render(&context).unwrap(), "hi");
    }

    #[test]
    fn nodes_render_in_order() {
        let settings = Settings::default();
        let context = Context::with_data(&settings, json!({"x": 1}));
        let nodes: Nodes = vec![
            Box::new(TextNode::new("a")),
            Box::new(VariableNode::new("x")),
            Box::new(EmptyNode),
            Box::new(TextNode::new("b")),
        ];
        assert_eq!(nodes.render(&context).unwrap(), "a1b");
    }

    #[test]
    fn unquote_words() {
        assert_eq!(unquote("\"about\""), Some("about".to_owned()));
        assert_eq!(unquote("'about'"), Some("about".to_owned()));
        assert_eq!(unquote("''"), Some(String::new()));
        assert_eq!(unquote("\""), None);
        assert_eq!(unquote("about"), None);
        assert_eq!(unquote("\"about'"), None);
    }

    #[test]
    fn unquote_unescapes() {
        assert_eq!(unquote(r#""say \"hi\" now""#), Some(r#"say "hi" now"#.to_owned()));
        assert_eq!(unquote(r#"'it\'s'"#), Some("it's".to_owned()));
        assert_eq!(unquote(r#"'a\"b'"#), Some(r#"a\"b"#.to_owned()));
        assert_eq!(unquote(r#""back\\slash""#), Some(r#"back\slash"#.to_owned()));
    }
}
