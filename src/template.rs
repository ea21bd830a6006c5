use std::collections::HashMap;
use crate::context::Context;
use crate::engine::Engine;
use crate::error::Result;
use crate::library::Libraries;
use crate::node::{Node, Nodes};
use crate::parser::Parser;


/// A compiled template; immutable and shareable between threads.
#[derive(Debug)]
pub struct Template {
    nodes: Nodes
}

impl Template {
    pub(crate) fn compile(input: &str, libraries: &Libraries) -> Result<Self> {
        let mut parser = Parser::new(input, libraries);
        let nodes = parser.parse_template()?;
        Ok(Template { nodes })
    }

    pub fn render(&self, context: &Context) -> Result<String> {
        self.nodes.render(context)
    }
}


/// Compiled templates by name.
#[derive(Debug, Default)]
pub struct TemplateMap {
    templates: HashMap<String, Template>
}

impl TemplateMap {
    pub fn new() -> Self {
        TemplateMap::default()
    }

    /// Compile `input` with the engine's libraries and store it as `name`.
    /// On error nothing is stored.
    pub fn load(&mut self, engine: &Engine, name: &str, input: &str) -> Result<()> {
        let template = engine.compile(input)?;
        self.templates.insert(name.to_owned(), template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_map_load_and_get() {
        let engine = Engine::default();
        let mut templates = TemplateMap::new();
        templates.load(&engine, "greeting", "{% load ember %}{% ember greeting %}").unwrap();
        assert!(templates.load(&engine, "broken", "{% nope %}").is_err());
        assert!(templates.get("broken").is_none());

        let template = templates.get("greeting").unwrap();
        assert_eq!(template.render(&Context::new(engine.settings())).unwrap(), "{{greeting}}");
    }

    #[test]
    fn template_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Template>();
    }
}
