//! Emits `FromJSONPB`/`ToJSONPB` instances (plus the `FromJSON`/`ToJSON`
//! bridges) for messages, oneof groups and enums.
//!
//! Every emitter appends lines to the shared `out` buffer; nothing is
//! returned except errors from type mapping.

use crate::{
    classify::{classify_message, classify_oneof, oneof_type_name},
    error::GenError,
    utils::quote,
};
use jsonpb_haskell_schema::{Enum, Message};
use tracing::debug;

/// `Outer` + `Inner` => `Outer'Inner`, the proto-lens name of a nested type.
pub fn qualified_name(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{}'{}", parent, name),
        None => name.to_string(),
    }
}

/// Emits a message's oneof groups, the message itself, then (pre-order) its
/// nested messages and nested enums.
pub fn generate_message(out: &mut Vec<String>, message: &Message, parent: Option<&str>) -> Result<(), GenError> {
    let n = qualified_name(parent, &message.name);
    debug!(message = %n, fields = message.fields.len(), "emitting message");

    for index in 0..message.oneofs.len() {
        generate_oneof(out, message, &n, index)?;
    }

    let fields = classify_message(message, &n)?;

    // FromJSONPB; empty messages ignore their input entirely.
    out.push(String::new());
    out.push(format!("instance FromJSONPB {} where", n));
    if fields.is_empty() {
        out.push(format!("  parseJSONPB = withObject {} $ \\_ -> pure defMessage", quote(&n)));
    } else {
        out.push(format!("  parseJSONPB = withObject {} $ \\obj -> do", quote(&n)));
        for f in &fields {
            let read = if f.is_maybe { "A..:?" } else { ".:" };
            out.push(format!(
                "    {} <- obj {} {} -- {}",
                f.binding(),
                read,
                quote(&f.raw_name),
                f.type_expr
            ));
        }
        out.push("    pure $ defMessage".to_string());
        for f in &fields {
            out.push(format!("      & P.{} .~ {}", f.lens_name(), f.binding()));
        }
    }

    // ToJSONPB; `object` and `pairs` take the same list of key/value pairs.
    out.push(String::new());
    out.push(format!("instance ToJSONPB {} where", n));
    for (method, builder) in [("toJSONPB", "object"), ("toEncodingPB", "pairs")] {
        if fields.is_empty() {
            out.push(format!("  {} _ = {} []", method, builder));
            continue;
        }
        out.push(format!("  {} x = {}", method, builder));
        for f in &fields {
            out.push(format!(
                "    {} {} .= (x^.P.{})",
                f.separator.token("[", ","),
                quote(&f.raw_name),
                f.lens_name()
            ));
        }
        out.push("    ]".to_string());
    }

    generate_bridge_instances(out, &n);

    for nested in &message.messages {
        generate_message(out, nested, Some(&n))?;
    }
    for nested in &message.enums {
        generate_enum(out, nested, Some(&n));
    }

    Ok(())
}

/// Emits the instances for the `index`th oneof group of `message`, whose
/// Haskell name is `message_type`.
pub fn generate_oneof(out: &mut Vec<String>, message: &Message, message_type: &str, index: usize) -> Result<(), GenError> {
    let Some(oneof) = message.oneofs.get(index) else {
        return Ok(());
    };
    let n = oneof_type_name(message_type, &oneof.name);
    let members = classify_oneof(message, index)?;
    debug!(oneof = %n, members = members.len(), "emitting oneof");

    // FromJSONPB: the first member key that is present and parses wins.
    out.push(String::new());
    out.push(format!("instance FromJSONPB {} where", n));
    out.push(format!("  parseJSONPB = A.withObject {} $ \\obj -> msum", quote(&n)));
    for m in &members {
        let parse = if m.is_maybe {
            format!("(obj .: {})", quote(&m.raw_name))
        } else {
            format!("parseField obj {}", quote(&m.raw_name))
        };
        out.push(format!(
            "    {} {}'{} <$> {}",
            m.separator.token("[", ","),
            message_type,
            m.constructor,
            parse
        ));
    }
    if members.is_empty() {
        out.push("    [".to_string());
    }
    out.push("    ]".to_string());

    // ToJSONPB: one single-key object per constructor.
    out.push(String::new());
    out.push(format!("instance ToJSONPB {} where", n));
    for (method, builder) in [("toJSONPB", "object"), ("toEncodingPB", "pairs")] {
        for m in &members {
            let payload = if m.is_maybe { "Just x" } else { "x" };
            out.push(format!(
                "  {} ({}'{} x) = {} [ {} .= {} ]",
                method,
                message_type,
                m.constructor,
                builder,
                quote(&m.raw_name),
                payload
            ));
        }
    }

    generate_bridge_instances(out, &n);
    Ok(())
}

/// Emits the instances for an enum. Values travel as their upper-cased names.
pub fn generate_enum(out: &mut Vec<String>, e: &Enum, parent: Option<&str>) {
    let qualified = qualified_name(parent, &e.name);
    debug!(enum_ = %qualified, values = e.values.len(), "emitting enum");

    out.push(String::new());
    out.push(format!("instance FromJSONPB {} where", qualified));
    for value in &e.values {
        let json = value.to_uppercase();
        let constructor = qualified_name(parent, &json);
        out.push(format!(
            "  parseJSONPB (JSONPB.String {}) = pure {}",
            quote(&json),
            constructor
        ));
    }
    out.push(format!("  parseJSONPB x = typeMismatch {} x", quote(&e.name)));

    out.push(String::new());
    out.push(format!("instance ToJSONPB {} where", qualified));
    out.push("  toJSONPB x _ = A.String . T.toUpper . T.pack $ show x".to_string());
    out.push("  toEncodingPB x _ = E.text . T.toUpper . T.pack $ show x".to_string());

    generate_bridge_instances(out, &qualified);
}

/// Routes aeson's `FromJSON`/`ToJSON` through the JSONPB instances.
fn generate_bridge_instances(out: &mut Vec<String>, n: &str) {
    out.push(String::new());
    out.push(format!("instance FromJSON {} where", n));
    out.push("  parseJSON = parseJSONPB".to_string());

    out.push(String::new());
    out.push(format!("instance ToJSON {} where", n));
    out.push("  toJSON = toAesonValue".to_string());
    out.push("  toEncoding = toAesonEncoding".to_string());
}
