use serde::Serialize;

use crate::utils::camel_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldStyle {
    Optional,
    Required,
    Repeated,
}

/// How a field's declared type resolved: directly representable, or a
/// reference to another generated message that needs its own wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldKind {
    BuiltIn,
    Message { wrapper: String },
}

/// A fully resolved field, ready to render. `accessor` is the sanitized
/// lower-camel accessor name; `attr` is the upper-camel attribute name the
/// raw message exposes as `has<attr>` / `get<attr>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessorSpec {
    pub accessor: String,
    pub attr:     String,
    pub style:    FieldStyle,
    pub kind:     FieldKind,
    pub line:     usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDescriptor {
    pub name:         String,
    pub full_name:    String,
    pub wrapper_name: String,
    pub accessors:    Vec<AccessorSpec>,
    pub line:         usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeserializerDescriptor {
    pub key:       String,
    pub full_name: String,
}

impl DeserializerDescriptor {
    pub fn for_message(message: &MessageDescriptor) -> Self {
        DeserializerDescriptor {
            key:       camel_case(&message.name),
            full_name: message.full_name.clone(),
        }
    }
}

/// Insertion-ordered descriptor collection with keyed overwrite. Inserting
/// an already-registered key replaces the earlier descriptor in place and
/// hands it back so the caller can report the collision.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct DeserializerRegistry {
    entries: Vec<DeserializerDescriptor>,
}

impl DeserializerRegistry {
    pub fn insert(&mut self, descriptor: DeserializerDescriptor) -> Option<DeserializerDescriptor> {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.key == descriptor.key) {
            Some(std::mem::replace(existing, descriptor))
        } else {
            self.entries.push(descriptor);
            None
        }
    }

    pub fn entries(&self) -> &[DeserializerDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything one schema file contributed. `path` uses `/` separators
/// regardless of platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScan {
    pub path:        String,
    pub package:     String,
    pub outer_class: Option<String>,
    pub messages:    Vec<MessageDescriptor>,
}
