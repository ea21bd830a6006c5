use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;
use crate::error::{Error, Result};
use crate::library::{Libraries, Library, TagCompiler};
use crate::node::{Node, Nodes, TextNode, VariableNode};
use crate::reader::{Reader, Token, TokenKind};


/// Walks the tokens of one template, compiling block tags through
/// the tags active in it.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    tags: HashMap<String, Arc<dyn TagCompiler>>,
    libraries: &'a Libraries,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, libraries: &'a Libraries) -> Self {
        let mut parser = Parser {
            tokens: Reader::new(source).collect(),
            pos: 0,
            tags: HashMap::new(),
            libraries,
        };
        parser.add_library(libraries.builtins());
        parser
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Give back the last token returned by [Parser::next_token].
    pub fn prepend_token(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn libraries(&self) -> &'a Libraries {
        self.libraries
    }

    /// Make the tags of a library available to the rest of the template.
    pub fn add_library(&mut self, library: &Library) {
        for (name, compiler) in library.tags() {
            self.tags.insert(name.clone(), Arc::clone(compiler));
        }
    }

    /// Compile the body of the block tag `token` up to one of the `until`
    /// tags, which is left as the next token.
    pub fn parse(&mut self, token: &Token<'_>, until: &[&str]) -> Result<Nodes> {
        match self.parse_nodes(until)? {
            (nodes, true) => Ok(nodes),
            (_, false) => Err(Error::UnterminatedBlock {
                end_tag: until.join("' or '"),
                line: token.line
            })
        }
    }

    pub(crate) fn parse_template(&mut self) -> Result<Nodes> {
        self.parse_nodes(&[]).map(|(nodes, _)| nodes)
    }

    /// Drop every token up to and including the `end_tag` block.
    pub fn skip_past(&mut self, token: &Token<'_>, end_tag: &str) -> Result<()> {
        while let Some(next) = self.next_token() {
            if next.kind == TokenKind::Block && next.contents() == end_tag {
                return Ok(());
            }
        }
        Err(Error::UnterminatedBlock {
            end_tag: end_tag.to_owned(),
            line: token.line
        })
    }

    /// Look the tag up among the active ones and run its compiler.
    pub fn compile_block(&mut self, token: &Token<'_>) -> Result<Box<dyn Node>> {
        let command = token.command();
        if command.is_empty() {
            return Err(Error::EmptyTag { line: token.line });
        }
        let compiler = self.tags.get(command).cloned().ok_or_else(
            || Error::UnknownTag { name: command.to_owned(), line: token.line }
        )?;
        trace!(tag = command, line = token.line, "compiling tag");
        compiler.compile(self, token)
    }

    fn parse_nodes(&mut self, until: &[&str]) -> Result<(Nodes, bool)> {
        let mut nodes = Nodes::new();
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::Text => {
                    nodes.push(Box::new(TextNode::new(token.raw)))
                },
                TokenKind::Variable if token.contents().is_empty() => {
                    return Err(Error::EmptyVariable { line: token.line });
                },
                TokenKind::Variable => {
                    nodes.push(Box::new(VariableNode::new(token.contents())))
                },
                TokenKind::Comment => {
                },
                TokenKind::Block => {
                    if until.contains(&token.command()) {
                        self.prepend_token();
                        return Ok((nodes, true));
                    }
                    nodes.push(self.compile_block(&token)?)
                }
            }
        }
        Ok((nodes, false))
    }
}
