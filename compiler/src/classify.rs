use crate::{
    error::GenError,
    type_map::map_type,
    types::{ClassifiedField, OneofMember, Separator},
    utils::{to_haskell_field_name, to_pascal_case},
};
use jsonpb_haskell_schema::Message;

/// Builds the emission list for a message's own instances: every field
/// outside a oneof in declared order, then one synthetic field per oneof
/// group. `type_name` is the Haskell name of the message.
pub fn classify_message(message: &Message, type_name: &str) -> Result<Vec<ClassifiedField>, GenError> {
    let mut fields = Vec::with_capacity(message.fields.len() + message.oneofs.len());

    for field in message.fields.iter().filter(|f| f.oneof.is_none()) {
        fields.push(ClassifiedField {
            raw_name:   field.name.clone(),
            field_name: to_haskell_field_name(&field.name),
            is_maybe:   field.is_presence_wrapped(),
            separator:  Separator::for_index(fields.len()),
            type_expr:  map_type(field)?,
        });
    }

    for oneof in &message.oneofs {
        fields.push(ClassifiedField {
            raw_name:   oneof.name.clone(),
            field_name: to_haskell_field_name(&oneof.name),
            is_maybe:   true,
            separator:  Separator::for_index(fields.len()),
            type_expr:  format!("Maybe {}", oneof_type_name(type_name, &oneof.name)),
        });
    }

    Ok(fields)
}

/// Members of the `index`th oneof group of `message`, in declared order.
pub fn classify_oneof(message: &Message, index: usize) -> Result<Vec<OneofMember>, GenError> {
    message
        .oneof_members(index)
        .enumerate()
        .map(|(i, field)| {
            // Members still have to map; a GROUP inside a oneof is as fatal as anywhere else.
            map_type(field)?;
            Ok(OneofMember {
                raw_name:    field.name.clone(),
                constructor: to_pascal_case(&field.name),
                is_maybe:    field.is_presence_wrapped(),
                separator:   Separator::for_index(i),
            })
        })
        .collect()
}

/// `Person` + `contact_info` => `Person'ContactInfo`.
pub fn oneof_type_name(message_type: &str, oneof_name: &str) -> String {
    format!("{}'{}", message_type, to_pascal_case(oneof_name))
}
