use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use crate::error::Result;
use crate::node::Node;
use crate::parser::Parser;
use crate::reader::Token;
use crate::tags;


/// Compiles a block tag into a [Node].
///
/// The compiler receives the parser positioned right after the tag token,
/// so block tags can consume tokens up to their end tag.
/// Any `fn(&mut Parser, &Token) -> Result<Box<dyn Node>>` is a compiler.
pub trait TagCompiler: Send + Sync {
    fn compile(&self, parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>>;
}

impl<F> TagCompiler for F
where F: Fn(&mut Parser<'_>, &Token<'_>) -> Result<Box<dyn Node>> + Send + Sync {
    fn compile(&self, parser: &mut Parser<'_>, token: &Token<'_>) -> Result<Box<dyn Node>> {
        self(parser, token)
    }
}


/// A named set of tags, activated in a template with `{% load name %}`.
#[derive(Clone, Default)]
pub struct Library {
    tags: HashMap<String, Arc<dyn TagCompiler>>
}

impl Library {
    pub fn new() -> Self {
        Library::default()
    }

    pub fn tag<C>(&mut self, name: &str, compiler: C) -> &mut Self
    where C: TagCompiler + 'static {
        self.tags.insert(name.to_owned(), Arc::new(compiler));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn TagCompiler>> {
        self.tags.get(name)
    }

    pub(crate) fn tags(&self) -> impl Iterator<Item = (&String, &Arc<dyn TagCompiler>)> {
        self.tags.iter()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.tags.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Library").field("tags", &names).finish()
    }
}


/// Every library an engine knows, plus the builtins active everywhere.
#[derive(Debug, Clone)]
pub struct Libraries {
    builtins: Library,
    libraries: HashMap<String, Library>
}

impl Libraries {
    /// Builtins (`load`, `comment`, `url`) only.
    pub fn empty() -> Self {
        Libraries {
            builtins: tags::builtins(),
            libraries: HashMap::new()
        }
    }

    pub fn register(&mut self, name: &str, library: Library) -> &mut Self {
        self.libraries.insert(name.to_owned(), library);
        self
    }

    pub fn builtins(&self) -> &Library {
        &self.builtins
    }

    pub fn get(&self, name: &str) -> Option<&Library> {
        self.libraries.get(name)
    }
}

impl Default for Libraries {
    /// Builtins plus the `i18n` and `ember` libraries.
    fn default() -> Self {
        let mut libraries = Libraries::empty();
        libraries
            .register("i18n", tags::i18n())
            .register("ember", tags::ember());
        libraries
    }
}
