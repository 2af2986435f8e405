//! The protoc plugin convention: a `CodeGeneratorRequest` arrives on stdin,
//! a `CodeGeneratorResponse` leaves on stdout.

use crate::{
    compiler::{generate, GeneratedFile},
    config::GeneratorConfig,
    descriptor::convert_file,
    error::GenError,
};
use jsonpb_haskell_schema::SchemaFile;
use prost::Message;
use prost_types::{
    compiler::{code_generator_response, CodeGeneratorRequest, CodeGeneratorResponse},
    FileDescriptorSet,
};
use std::io::{Read, Write};

/// Reads and decodes the whole request. An empty `file_to_generate` is an error.
pub fn read_request<R: Read>(mut reader: R) -> Result<CodeGeneratorRequest, GenError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let request = CodeGeneratorRequest::decode(data.as_slice())?;
    if request.file_to_generate.is_empty() {
        return Err(GenError::NoFilesToGenerate);
    }
    Ok(request)
}

/// Runs generation for a decoded request. The request's parameter string is
/// layered on top of `config`.
pub fn handle_request(request: &CodeGeneratorRequest, config: &GeneratorConfig) -> Result<CodeGeneratorResponse, GenError> {
    let config = config.clone().apply_parameter(request.parameter.as_deref())?;
    let files: Vec<SchemaFile> = request.proto_file.iter().map(convert_file).collect();
    let generated = generate(&request.file_to_generate, &files, &config)?;
    Ok(to_response(generated))
}

pub fn to_response(generated: Vec<GeneratedFile>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        file: generated
            .into_iter()
            .map(|f| code_generator_response::File {
                name: Some(f.name),
                content: Some(f.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn write_response<W: Write>(mut writer: W, response: &CodeGeneratorResponse) -> Result<(), GenError> {
    let mut data = Vec::with_capacity(response.encoded_len());
    response.encode(&mut data)?;
    writer.write_all(&data)?;
    writer.flush()?;
    Ok(())
}

/// Full plugin run: nothing is written unless every file generated.
pub fn run<R: Read, W: Write>(reader: R, writer: W, config: &GeneratorConfig) -> Result<(), GenError> {
    let request = read_request(reader)?;
    let response = handle_request(&request, config)?;
    write_response(writer, &response)
}

/// Decodes a serialized `FileDescriptorSet` (`protoc --descriptor_set_out`)
/// into schema files.
pub fn read_descriptor_set(data: &[u8]) -> Result<Vec<SchemaFile>, GenError> {
    let set = FileDescriptorSet::decode(data)?;
    Ok(set.file.iter().map(convert_file).collect())
}
