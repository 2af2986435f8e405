use crate::error::GenError;

/// Values stamped into every generated file. Passed explicitly to the
/// generator; nothing here is process-global.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Version printed in the generated banner.
    pub version:     String,
    /// Leading directory and module prefix, `Proto` for proto-lens.
    pub output_dir:  String,
    pub file_suffix: String,
    pub extension:   String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            version:     env!("CARGO_PKG_VERSION").to_string(),
            output_dir:  "Proto".to_string(),
            file_suffix: "_JSON".to_string(),
            extension:   "hs".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Applies a protoc parameter string such as `output_dir=Gen,suffix=_Json`.
    pub fn apply_parameter(mut self, parameter: Option<&str>) -> Result<Self, GenError> {
        let Some(parameter) = parameter else {
            return Ok(self);
        };

        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| GenError::InvalidParameter(format!("expected key=value, got \"{}\"", part)))?;
            let value = value.trim().to_string();
            match key.trim() {
                "output_dir" => self.output_dir = value,
                "suffix"     => self.file_suffix = value,
                "extension"  => self.extension = value,
                other => {
                    return Err(GenError::InvalidParameter(format!("unknown option \"{}\"", other)))
                }
            }
        }
        Ok(self)
    }

    /// Haskell module prefix derived from `output_dir` (`Proto/Gen` => `Proto.Gen`,
    /// `./Proto` => `Proto`).
    pub fn module_prefix(&self) -> String {
        self.output_dir
            .split('/')
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_target_proto_lens_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, "Proto");
        assert_eq!(config.file_suffix, "_JSON");
        assert_eq!(config.extension, "hs");
        assert_eq!(config.module_prefix(), "Proto");
    }

    #[test]
    fn missing_parameter_keeps_defaults() {
        let config = GeneratorConfig::default().apply_parameter(None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        let config = GeneratorConfig::default().apply_parameter(Some("")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn parameter_overrides() {
        let config = GeneratorConfig::default()
            .apply_parameter(Some("output_dir=Gen/Proto, suffix=_Json,extension=hs-boot"))
            .unwrap();
        assert_eq!(config.output_dir, "Gen/Proto");
        assert_eq!(config.module_prefix(), "Gen.Proto");
        assert_eq!(config.file_suffix, "_Json");
        assert_eq!(config.extension, "hs-boot");
    }

    #[test_case("./Proto", "Proto")]
    #[test_case("Gen/", "Gen")]
    #[test_case("../out/Gen", "out.Gen"; "parent directories are dropped")]
    fn module_prefix_ignores_relative_markers(output_dir: &str, expected: &str) {
        let config = GeneratorConfig { output_dir: output_dir.to_string(), ..GeneratorConfig::default() };
        assert_eq!(config.module_prefix(), expected);
    }

    #[test_case("output_dir"; "missing equals")]
    #[test_case("colour=red"; "unknown key")]
    fn bad_parameters(parameter: &str) {
        let err = GeneratorConfig::default().apply_parameter(Some(parameter)).unwrap_err();
        assert!(matches!(err, GenError::InvalidParameter(_)));
    }
}
