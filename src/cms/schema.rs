//! Declarative description of a CMS collection: its fields, admin labels,
//! select options, defaults and slug hooks.
//!
//! Definitions are `const` data built with the `const fn` helpers on
//! [`Field`], e.g. `Field::text("titulo").required().label("Título")`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub slug: &'static str,
    /// Field shown as the document title in the admin list.
    pub use_as_title: &'static str,
    pub default_columns: &'static [&'static str],
    pub description: Option<&'static str>,
    pub access: Access,
    pub fields: &'static [Field],
}

impl Collection {
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Reads are either public or require a signed-in editor; writes always do.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    PublicRead,
    EditorsOnly,
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub label: Option<&'static str>,
    pub required: bool,
    pub unique: bool,
    pub read_only: bool,
    pub default_value: Option<DefaultValue>,
    pub placeholder: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Slug hook: derive this field from the named source field.
    pub slug_from: Option<&'static str>,
    /// The field only applies when this holds for the surrounding document.
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Textarea,
    RichText,
    Email,
    Number { min: Option<i64> },
    Checkbox,
    Date,
    Select { options: &'static [SelectOption] },
    #[serde(rename_all = "camelCase")]
    Upload { relation_to: &'static str },
    #[serde(rename_all = "camelCase")]
    Relationship { relation_to: &'static str },
    Group { fields: &'static [Field] },
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl SelectOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone)]
pub enum DefaultValue {
    Bool(bool),
    Number(i64),
    Text(&'static str),
    /// Current time, ISO 8601; serialized as the marker `"now"`.
    Now,
}

impl Serialize for DefaultValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DefaultValue::Bool(b) => serializer.serialize_bool(*b),
            DefaultValue::Number(n) => serializer.serialize_i64(*n),
            DefaultValue::Text(s) => serializer.serialize_str(s),
            DefaultValue::Now => serializer.serialize_str("now"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    NotEquals {
        field: &'static str,
        value: &'static str,
    },
}

impl Field {
    const fn base(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            label: None,
            required: false,
            unique: false,
            read_only: false,
            default_value: None,
            placeholder: None,
            description: None,
            slug_from: None,
            condition: None,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::base(name, FieldKind::Text)
    }

    pub const fn textarea(name: &'static str) -> Self {
        Self::base(name, FieldKind::Textarea)
    }

    pub const fn rich_text(name: &'static str) -> Self {
        Self::base(name, FieldKind::RichText)
    }

    pub const fn email(name: &'static str) -> Self {
        Self::base(name, FieldKind::Email)
    }

    pub const fn number(name: &'static str) -> Self {
        Self::base(name, FieldKind::Number { min: None })
    }

    pub const fn checkbox(name: &'static str) -> Self {
        Self::base(name, FieldKind::Checkbox)
    }

    pub const fn date(name: &'static str) -> Self {
        Self::base(name, FieldKind::Date)
    }

    pub const fn select(name: &'static str, options: &'static [SelectOption]) -> Self {
        Self::base(name, FieldKind::Select { options })
    }

    pub const fn upload(name: &'static str, relation_to: &'static str) -> Self {
        Self::base(name, FieldKind::Upload { relation_to })
    }

    pub const fn relationship(name: &'static str, relation_to: &'static str) -> Self {
        Self::base(name, FieldKind::Relationship { relation_to })
    }

    pub const fn group(name: &'static str, fields: &'static [Field]) -> Self {
        Self::base(name, FieldKind::Group { fields })
    }

    /// A read-only, unique slug derived from `source`.
    pub const fn slug(source: &'static str) -> Self {
        let mut field = Self::base("slug", FieldKind::Text);
        field.required = true;
        field.unique = true;
        field.read_only = true;
        field.slug_from = Some(source);
        field
    }

    pub const fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub const fn default_value(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn min(mut self, min: i64) -> Self {
        if let FieldKind::Number { .. } = self.kind {
            self.kind = FieldKind::Number { min: Some(min) };
        }
        self
    }

    pub const fn unless_equals(mut self, field: &'static str, value: &'static str) -> Self {
        self.condition = Some(Condition::NotEquals { field, value });
        self
    }
}
