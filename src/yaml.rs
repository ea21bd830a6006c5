use crate::context::Context;
use crate::error::{Error, Result};
use crate::settings::Settings;
pub use serde_yaml::Value as YamlValue;


impl<'a> Context<'a> {
    /// Build a context from YAML data; mapping keys must be strings.
    pub fn from_yaml(settings: &'a Settings, data: &YamlValue) -> Result<Self> {
        let data = serde_json::to_value(data).map_err(
            |err| Error::Data(err.to_string())
        )?;
        Ok(Context::with_data(settings, data))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_data_is_resolvable() {
        let settings = Settings::default();
        let data = serde_yaml::from_str::<YamlValue>(r#"
          team:
            - name: john
              address: little
        "#).unwrap();
        let context = Context::from_yaml(&settings, &data).unwrap();
        assert_eq!(context.resolve("team.0.address"), Some("little".to_owned()));
    }

    #[test]
    fn non_string_keys_are_rejected() {
        let settings = Settings::default();
        let data = serde_yaml::from_str::<YamlValue>("[1, 2]: x").unwrap();
        assert!(matches!(Context::from_yaml(&settings, &data), Err(Error::Data(_))));
    }
}
