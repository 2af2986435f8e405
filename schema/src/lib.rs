//! The schema model handed to the JSONPB Haskell generator.
//!
//! These types are read-only projections of the protobuf descriptors a
//! schema-compiling host supplies. Nesting is strictly tree-shaped: every
//! message owns its nested messages and enums.
//!
//! ```
//! use jsonpb_haskell_schema::*;
//!
//! let person = Message {
//!     name: "Person".to_owned(),
//!     fields: vec![
//!         Field::new("full_name", FieldKind::String, Label::Singular),
//!         Field::new("address", FieldKind::Message, Label::Singular)
//!             .with_type_name(".example.Address"),
//!     ],
//!     ..Message::default()
//! };
//!
//! assert!(!person.fields[0].is_presence_wrapped());
//! assert!(person.fields[1].is_presence_wrapped());
//! ```

use serde::Serialize;

/// The wire kind of a field, mirroring `FieldDescriptorProto.Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Double,
    Float,
    Int64,
    UInt64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Group,
    Message,
    Bytes,
    UInt32,
    Enum,
    SFixed32,
    SFixed64,
    SInt32,
    SInt64,
    /// A type number this model does not know about.
    Unknown(i32),
}

impl FieldKind {
    /// Maps a descriptor type number (1..=18) onto a kind.
    pub fn from_type_number(n: i32) -> Self {
        match n {
            1  => FieldKind::Double,
            2  => FieldKind::Float,
            3  => FieldKind::Int64,
            4  => FieldKind::UInt64,
            5  => FieldKind::Int32,
            6  => FieldKind::Fixed64,
            7  => FieldKind::Fixed32,
            8  => FieldKind::Bool,
            9  => FieldKind::String,
            10 => FieldKind::Group,
            11 => FieldKind::Message,
            12 => FieldKind::Bytes,
            13 => FieldKind::UInt32,
            14 => FieldKind::Enum,
            15 => FieldKind::SFixed32,
            16 => FieldKind::SFixed64,
            17 => FieldKind::SInt32,
            18 => FieldKind::SInt64,
            other => FieldKind::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Label {
    #[default]
    Singular,
    Repeated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name:      String,
    pub kind:      FieldKind,
    pub label:     Label,
    /// Index into the owning message's `oneofs`, if this field is a member.
    pub oneof:     Option<usize>,
    /// Dotted type reference for MESSAGE and ENUM kinds.
    pub type_name: Option<String>,
}

impl Field {
    pub fn new(name: &str, kind: FieldKind, label: Label) -> Self {
        Field {
            name:      name.to_owned(),
            kind,
            label,
            oneof:     None,
            type_name: None,
        }
    }

    pub fn with_type_name(mut self, type_name: &str) -> Self {
        self.type_name = Some(type_name.to_owned());
        self
    }

    pub fn in_oneof(mut self, index: usize) -> Self {
        self.oneof = Some(index);
        self
    }

    /// Only singular MESSAGE fields can be absent; enums always have a default.
    pub fn is_presence_wrapped(&self) -> bool {
        self.kind == FieldKind::Message && self.label != Label::Repeated
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OneofGroup {
    pub name:    String,
    /// Indices into the owning message's `fields`, in declared order.
    pub members: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Enum {
    pub name:   String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Message {
    pub name:     String,
    pub fields:   Vec<Field>,
    pub oneofs:   Vec<OneofGroup>,
    pub messages: Vec<Message>,
    pub enums:    Vec<Enum>,
}

impl Message {
    /// Members of the `index`th oneof group, in declared order.
    pub fn oneof_members(&self, index: usize) -> impl Iterator<Item = &Field> {
        self.oneofs
            .get(index)
            .into_iter()
            .flat_map(|group| group.members.iter())
            .filter_map(|&i| self.fields.get(i))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SchemaFile {
    pub path:     String,
    pub package:  String,
    pub messages: Vec<Message>,
    pub enums:    Vec<Enum>,
}
