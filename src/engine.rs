use crate::context::Context;
use crate::error::Result;
use crate::json::JsonValue;
use crate::library::{Libraries, Library};
use crate::settings::Settings;
use crate::template::Template;


/// Settings plus the tag libraries templates can load.
#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    libraries: Libraries
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        Engine {
            settings,
            libraries: Libraries::default()
        }
    }

    pub fn with_libraries(settings: Settings, libraries: Libraries) -> Self {
        Engine {
            settings,
            libraries
        }
    }

    /// Register an extra library, loadable with `{% load name %}`.
    pub fn register(&mut self, name: &str, library: Library) -> &mut Self {
        self.libraries.register(name, library);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn libraries(&self) -> &Libraries {
        &self.libraries
    }

    pub fn compile(&self, input: &str) -> Result<Template> {
        Template::compile(input, &self.libraries)
    }

    pub fn render(&self, template: &Template, data: JsonValue) -> Result<String> {
        template.render(&Context::with_data(&self.settings, data))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(Settings::default())
    }
}
