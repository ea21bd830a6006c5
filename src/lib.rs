//! Django-style template tags for writing Ember.js and Handlebars templates
//! inside server-side templates.
//!
//! Both engines use `{{ }}`. Inside a verbatim region such as
//! `{% handlebars %}...{% endhandlebars %}` the client-side syntax is kept
//! as written while server-side tags (`trans`, `url`, comments) still run.
//!
//! A [Template] is compiled by an [Engine] and rendered against a [Context].
//! Tags come from [Library] instances activated with `{% load %}`; the
//! default engine knows `i18n` and `ember`.
//!
//!
//! # Samples
//!
//! ## Named Handlebars template
//!
//! ```
//! use ember::{Engine, Settings};
//! use serde_json::json;
//!
//! let text = r#"{% load i18n ember %}{% handlebars "tpl-popup" %}
//! <h1>{% trans "Ranges" %}</h1>{{#ranges}}<li>{{min}} < {{max}}</li>{{/ranges}}
//! {% endhandlebars %}"#;
//!
//! let engine = Engine::new(Settings::default());
//! let template = engine.compile(text).unwrap();
//! let result = engine.render(&template, json!({"min": 1})).unwrap();
//!
//! assert_eq!(result, r#"<script type="text/x-handlebars" data-template-name="tpl-popup">
//!
//! <h1>Ranges</h1>{{#ranges}}<li>{{min}} < {{max}}</li>{{/ranges}}
//!
//! </script>"#);
//! ```
//!
//! ## Helpers and libraries
//!
//! ```
//! use ember::{Engine, Settings};
//! use serde_json::json;
//!
//! let text = r#"{% load ember %}{% ember_js %}
//! {% linkto "about" %}About{% endlinkto %} {% ember #if user.isAdmin %}"#;
//!
//! let engine = Engine::new(Settings::from_yaml("debug: true").unwrap());
//! let template = engine.compile(text).unwrap();
//! let result = engine.render(&template, json!({})).unwrap();
//!
//! assert_eq!(result, r#"<script type="text/javascript" src="/static/js/libs/ember.js"></script>
//! {{#linkTo "about"}}About{{/linkTo}} {{#if user.isAdmin}}"#);
//! ```
mod error;
mod reader;
mod parser;
mod node;
mod library;
mod settings;
mod context;
mod json;
mod yaml;
mod template;
mod engine;
pub mod tags;

pub use self::error::{Error, Result};
pub use self::reader::{Token, TokenKind};
pub use self::parser::Parser;
pub use self::node::{Node, Nodes};
pub use self::library::{Library, Libraries, TagCompiler};
pub use self::settings::Settings;
pub use self::context::Context;
pub use self::json::JsonValue;
pub use self::yaml::YamlValue;
pub use self::template::{Template, TemplateMap};
pub use self::engine::Engine;
