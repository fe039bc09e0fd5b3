use serde::de::DeserializeOwned;

/// Deserialize with JSON-path context in error messages, e.g.
/// `at JSON path props.onChange.docs.params[0] → missing field `name``.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(describe)
}

/// Same, for an already-parsed document (e.g. after a JSON pointer selection).
pub fn from_value_with_path<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, String> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(describe)
}

fn describe<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> String {
    let path = err.path().to_string();
    format!("at JSON path {path} → {}", err.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Outer {
        #[allow(unused)]
        inner: Vec<Inner>,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Inner {
        #[allow(unused)]
        name: String,
    }

    #[test]
    fn errors_carry_the_path() {
        let err = from_str_with_path::<Outer>(r#"{ "inner": [{ "name": "a" }, { "name": 3 }] }"#).unwrap_err();
        assert!(err.starts_with("at JSON path inner[1].name"), "{err}");
    }
}
