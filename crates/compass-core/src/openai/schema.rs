use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

/// Hand-built JSON schema fragment for function-call parameters. Covers
/// exactly the subset of keywords the assessment schema needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField<'a> {
    pub r#type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<&'a str, SchemaField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaField<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<&'a str>,
}

impl<'a> SchemaField<'a> {
    #[must_use]
    pub fn new(r#type: &'a str) -> Self {
        SchemaField {
            r#type,
            description: None,
            properties: HashMap::new(),
            items: None,
            min_items: None,
            max_items: None,
            required: vec![],
        }
    }

    #[must_use]
    pub fn object() -> Self {
        SchemaField::new("object")
    }

    #[must_use]
    pub fn description<D: Into<Cow<'a, str>>>(mut self, description: D) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn properties<I: Into<HashMap<&'a str, SchemaField<'a>>>>(mut self, properties: I) -> Self {
        self.properties = properties.into();
        self
    }

    #[must_use]
    pub fn items(mut self, items: SchemaField<'a>) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    #[must_use]
    pub fn min_items(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }

    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    #[must_use]
    pub fn required<I: Into<Vec<&'a str>>>(mut self, required: I) -> Self {
        self.required = required.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_schema_keywords() {
        let field = SchemaField::object()
            .properties(HashMap::from([(
                "items",
                SchemaField::new("array")
                    .items(SchemaField::new("string").description("an entry"))
                    .min_items(3)
                    .max_items(3),
            )]))
            .required(vec!["items"]);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "object");
        assert_eq!(json["properties"]["items"]["minItems"], 3);
        assert_eq!(json["properties"]["items"]["items"]["type"], "string");
        assert_eq!(json["required"][0], "items");
    }
}
