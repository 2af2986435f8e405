use jsonpb_haskell_schema::FieldKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing input proto: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("marshaling response: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("no files to generate")]
    NoFilesToGenerate,

    #[error("no mapping for type {kind:?} of field \"{field}\"")]
    UnmappedFieldType {
        field: String,
        kind:  FieldKind,
    },

    #[error("Invalid plugin parameter: {0}")]
    InvalidParameter(String),
}
