use tracing::debug;
use crate::json::JsonValue;
use crate::settings::Settings;


/// Navigation over render data, implemented for [JsonValue].
pub(crate) trait Lookup {
    fn child(&self, name: &str) -> Option<&Self>;
    fn value(&self) -> Option<String>;
    fn is_truthy(&self) -> bool;
}


/// What a template is rendered against: the engine settings and the data
/// variables are resolved in.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    settings: &'a Settings,
    data: JsonValue,
}

impl<'a> Context<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Context {
            settings,
            data: JsonValue::Null,
        }
    }

    pub fn with_data(settings: &'a Settings, data: JsonValue) -> Self {
        Context {
            settings,
            data,
        }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn data(&self) -> &JsonValue {
        &self.data
    }

    /// Resolve a dotted path such as `user.name` or `items.0`.
    pub fn resolve(&self, path: &str) -> Option<String> {
        self.lookup(path).and_then(|value| value.value())
    }

    pub(crate) fn is_truthy(&self, path: &str) -> bool {
        self.lookup(path).map_or(false, |value| value.is_truthy())
    }

    pub(crate) fn resolve_or_invalid(&self, path: &str) -> String {
        match self.resolve(path) {
            Some(value) => value,
            None => {
                debug!(path, "unresolved variable");
                self.settings.string_if_invalid.clone()
            }
        }
    }

    fn lookup(&self, path: &str) -> Option<&JsonValue> {
        if path.is_empty() {
            return None;
        }
        path.split('.').try_fold(&self.data, |value, name| value.child(name))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_dotted_path() {
        let settings = Settings::default();
        let context = Context::with_data(&settings, json!({
            "user": {"name": "john", "age": 42, "tags": ["a", "b"]}
        }));
        assert_eq!(context.resolve("user.name"), Some("john".to_owned()));
        assert_eq!(context.resolve("user.age"), Some("42".to_owned()));
        assert_eq!(context.resolve("user.tags.1"), Some("b".to_owned()));
        assert_eq!(context.resolve("user.missing"), None);
        assert_eq!(context.resolve("user"), None);
    }

    #[test]
    fn data_is_kept_as_given() {
        let settings = Settings::default();
        let data = json!({"user": {"name": "john"}});
        assert_eq!(Context::with_data(&settings, data.clone()).data(), &data);
        assert_eq!(Context::new(&settings).data(), &JsonValue::Null);
    }

    #[test]
    fn unresolved_uses_string_if_invalid() {
        let settings = Settings {
            string_if_invalid: "INVALID".to_owned(),
            ..Settings::default()
        };
        let context = Context::new(&settings);
        assert_eq!(context.resolve_or_invalid("nothing"), "INVALID");
    }

    #[test]
    fn truthiness() {
        let settings = Settings::default();
        let context = Context::with_data(&settings, json!({
            "yes": true, "no": false, "empty": [], "text": "x"
        }));
        assert!(context.is_truthy("yes"));
        assert!(context.is_truthy("text"));
        assert!(!context.is_truthy("no"));
        assert!(!context.is_truthy("empty"));
        assert!(!context.is_truthy("missing"));
    }
}
