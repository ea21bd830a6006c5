use std::collections::HashMap;
use serde::Deserialize;
use crate::error::{Error, Result};


/// Engine configuration, usually deserialized from YAML or JSON.
///
/// ```
/// use ember::Settings;
///
/// let settings = Settings::from_yaml(r#"
///   static_url: https://cdn.example.com/
///   debug: true
/// "#).unwrap();
///
/// assert_eq!(settings.static_url, "https://cdn.example.com/");
/// assert_eq!(settings.js_libs_path, "js/libs/");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub static_url: String,
    pub debug: bool,
    pub js_libs_path: String,
    pub language_code: String,
    /// language code -> message id -> translated message
    pub translations: HashMap<String, HashMap<String, String>>,
    /// url name -> path, `{}` placeholders filled by position
    pub urls: HashMap<String, String>,
    pub string_if_invalid: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            static_url: "/static/".to_owned(),
            debug: false,
            js_libs_path: "js/libs/".to_owned(),
            language_code: "en-us".to_owned(),
            translations: HashMap::new(),
            urls: HashMap::new(),
            string_if_invalid: String::new(),
        }
    }
}

impl Settings {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(
            |err| Error::Settings(format!("yaml: {}", err))
        )
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(
            |err| Error::Settings(format!("json: {}", err))
        )
    }

    pub(crate) fn translate<'s>(&'s self, message: &'s str) -> &'s str {
        self.translations
            .get(&self.language_code)
            .and_then(|catalog| catalog.get(message))
            .map(String::as_str)
            .unwrap_or(message)
    }

    pub(crate) fn reverse(&self, name: &str, args: &[String]) -> Result<String> {
        let pattern = self.urls.get(name).ok_or_else(
            || Error::NoReverseMatch { name: name.to_owned() }
        )?;
        let parts = pattern.split("{}").collect::<Vec<_>>();
        if parts.len() != args.len() + 1 {
            return Err(Error::NoReverseMatch { name: name.to_owned() });
        }
        let mut path = parts[0].to_owned();
        for (arg, part) in args.iter().zip(&parts[1..]) {
            path.push_str(arg);
            path.push_str(part);
        }
        Ok(path)
    }

    /// Script tag for a javascript library, minified unless in debug mode.
    pub(crate) fn js_lib(&self, name: &str) -> String {
        let file = if self.debug {
            format!("{}.js", name)
        } else {
            format!("{}.min.js", name)
        };
        format!(
            r#"<script type="text/javascript" src="{}{}{}"></script>"#,
            self.static_url, self.js_libs_path, file
        )
    }
}
