//! Conversion from `prost-types` descriptors into the schema model.

use jsonpb_haskell_schema::{Enum, Field, FieldKind, Label, Message, OneofGroup, SchemaFile};
use prost_types::{
    field_descriptor_proto, DescriptorProto, EnumDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto,
};

pub fn convert_file(file: &FileDescriptorProto) -> SchemaFile {
    SchemaFile {
        path:     file.name().to_string(),
        package:  file.package().to_string(),
        messages: file.message_type.iter().map(convert_message).collect(),
        enums:    file.enum_type.iter().map(convert_enum).collect(),
    }
}

pub fn convert_message(message: &DescriptorProto) -> Message {
    let fields: Vec<Field> = message.field.iter().map(convert_field).collect();

    let oneofs = message
        .oneof_decl
        .iter()
        .enumerate()
        .map(|(index, oneof)| OneofGroup {
            name:    oneof.name().to_string(),
            members: fields
                .iter()
                .enumerate()
                .filter(|(_, f)| f.oneof == Some(index))
                .map(|(i, _)| i)
                .collect(),
        })
        .collect();

    Message {
        name: message.name().to_string(),
        fields,
        oneofs,
        messages: message.nested_type.iter().map(convert_message).collect(),
        enums:    message.enum_type.iter().map(convert_enum).collect(),
    }
}

pub fn convert_field(field: &FieldDescriptorProto) -> Field {
    // `field.type()` silently falls back to DOUBLE on unknown numbers; keep the raw value.
    let kind = field.r#type.map(FieldKind::from_type_number).unwrap_or(FieldKind::Unknown(0));
    let label = match field.label() {
        field_descriptor_proto::Label::Repeated => Label::Repeated,
        _ => Label::Singular,
    };

    Field {
        name: field.name().to_string(),
        kind,
        label,
        oneof: field.oneof_index.and_then(|i| usize::try_from(i).ok()),
        type_name: field.type_name.clone(),
    }
}

pub fn convert_enum(e: &EnumDescriptorProto) -> Enum {
    Enum {
        name:   e.name().to_string(),
        values: e.value.iter().map(|v| v.name().to_string()).collect(),
    }
}
