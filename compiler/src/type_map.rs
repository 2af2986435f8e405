use crate::{error::GenError, utils::to_haskell_type};
use jsonpb_haskell_schema::{Field, FieldKind, Label};

/// Maps a field to the Haskell type proto-lens uses for it.
/// - Repeated fields become `Vector T`.
/// - Singular messages become `Maybe T`; enums are never wrapped.
pub fn map_type(field: &Field) -> Result<String, GenError> {
    let base = match field.kind {
        FieldKind::Int32 | FieldKind::SInt32 => "Int32".to_string(),
        FieldKind::Int64 | FieldKind::SInt64 => "Int64".to_string(),
        FieldKind::UInt32                    => "Word32".to_string(),
        FieldKind::UInt64                    => "Word64".to_string(),
        FieldKind::SFixed32                  => "Signed Int32".to_string(),
        FieldKind::SFixed64                  => "Signed Int64".to_string(),
        FieldKind::Fixed32                   => "Fixed Word32".to_string(),
        FieldKind::Fixed64                   => "Fixed Word64".to_string(),
        FieldKind::String                    => "Text".to_string(),
        FieldKind::Bytes                     => "ByteString".to_string(),
        FieldKind::Bool                      => "Bool".to_string(),
        FieldKind::Float                     => "Float".to_string(),
        FieldKind::Double                    => "Double".to_string(),
        FieldKind::Message | FieldKind::Enum => {
            to_haskell_type(field.type_name.as_deref().unwrap_or_default())
        }
        FieldKind::Group | FieldKind::Unknown(_) => {
            return Err(GenError::UnmappedFieldType {
                field: field.name.clone(),
                kind:  field.kind,
            })
        }
    };

    let mapped = if field.label == Label::Repeated {
        format!("Vector {}", parenthesize(&base))
    } else if field.kind == FieldKind::Message {
        format!("Maybe {}", parenthesize(&base))
    } else {
        base
    };
    Ok(mapped)
}

fn parenthesize(ty: &str) -> String {
    if ty.contains(' ') {
        format!("({})", ty)
    } else {
        ty.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(FieldKind::Int32, "Int32")]
    #[test_case(FieldKind::SInt64, "Int64")]
    #[test_case(FieldKind::UInt32, "Word32")]
    #[test_case(FieldKind::UInt64, "Word64")]
    #[test_case(FieldKind::SFixed32, "Signed Int32")]
    #[test_case(FieldKind::Fixed64, "Fixed Word64")]
    #[test_case(FieldKind::String, "Text")]
    #[test_case(FieldKind::Bytes, "ByteString")]
    #[test_case(FieldKind::Bool, "Bool")]
    #[test_case(FieldKind::Float, "Float")]
    #[test_case(FieldKind::Double, "Double")]
    fn scalars(kind: FieldKind, expected: &str) {
        let field = Field::new("f", kind, Label::Singular);
        assert_eq!(map_type(&field).unwrap(), expected);
    }

    #[test]
    fn repeated_fields_are_vectors() {
        let field = Field::new("f", FieldKind::Fixed32, Label::Repeated);
        assert_eq!(map_type(&field).unwrap(), "Vector (Fixed Word32)");

        let field = Field::new("f", FieldKind::Message, Label::Repeated)
            .with_type_name(".pkg.Item");
        assert_eq!(map_type(&field).unwrap(), "Vector Item");
    }

    #[test]
    fn singular_messages_are_maybe() {
        let field = Field::new("f", FieldKind::Message, Label::Singular)
            .with_type_name("google.protobuf.Timestamp");
        assert_eq!(map_type(&field).unwrap(), "Maybe Google.Protobuf.Timestamp");
    }

    #[test]
    fn enums_are_never_wrapped() {
        let field = Field::new("f", FieldKind::Enum, Label::Singular)
            .with_type_name(".pkg.Color");
        assert_eq!(map_type(&field).unwrap(), "Color");
    }

    #[test]
    fn groups_are_fatal() {
        let field = Field::new("legacy", FieldKind::Group, Label::Singular);
        let err = map_type(&field).unwrap_err();
        assert!(matches!(err, GenError::UnmappedFieldType { ref field, .. } if field == "legacy"));
    }

    #[test]
    fn unknown_kinds_are_fatal() {
        let field = Field::new("f", FieldKind::Unknown(42), Label::Repeated);
        assert!(map_type(&field).is_err());
    }
}
