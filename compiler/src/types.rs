/// Position of an entry inside a delimited list literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Opening,
    Continuation,
}

impl Separator {
    pub fn for_index(i: usize) -> Self {
        if i == 0 {
            Separator::Opening
        } else {
            Separator::Continuation
        }
    }

    pub fn token<'a>(self, opening: &'a str, continuation: &'a str) -> &'a str {
        match self {
            Separator::Opening      => opening,
            Separator::Continuation => continuation,
        }
    }
}

/// One entry of a message's emission list: either a plain field or the
/// synthetic field standing for a whole oneof group.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedField {
    /// The protobuf name, used verbatim as the JSON key.
    pub raw_name:   String,
    /// Haskell accessor name without the `maybe'` prefix.
    pub field_name: String,
    pub is_maybe:   bool,
    pub separator:  Separator,
    /// Haskell type of the value read from / written to JSON.
    pub type_expr:  String,
}

impl ClassifiedField {
    /// Lens used to read and set the field on the proto-lens record.
    pub fn lens_name(&self) -> String {
        if self.is_maybe {
            format!("maybe'{}", self.field_name)
        } else {
            self.field_name.clone()
        }
    }

    /// Local name bound while decoding.
    pub fn binding(&self) -> String {
        format!("{}'", self.field_name)
    }
}

/// A member of a oneof group, as seen by the oneof emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct OneofMember {
    pub raw_name:    String,
    /// PascalCase suffix of the constructor, e.g. `Name` in `Person'Name`.
    pub constructor: String,
    pub is_maybe:    bool,
    pub separator:   Separator,
}
