//! Shader source and name-based interface lookup.
//!
//! The render pipeline is built against numeric locations and bindings, but
//! the contract with the shader is by name. `ShaderInterface::resolve` reads
//! the WGSL declarations and maps each required name to its slot, failing if
//! any name is missing.

use std::fmt;

/// Embedded WGSL for the box.
pub const SOURCE: &str = include_str!("shaders/tissue_box.wgsl");

pub const POSITION_ATTRIBUTE: &str = "vPosition";
pub const COLOR_ATTRIBUTE: &str = "vColor";
pub const MODEL_VIEW_UNIFORM: &str = "modelViewMatrix";
pub const PROJECTION_UNIFORM: &str = "projectionMatrix";

/// `@group(g) @binding(b)` of a uniform.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformSlot {
    pub group: u32,
    pub binding: u32,
}

/// Resolved slots for every name the renderer relies on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderInterface {
    pub position_location: u32,
    pub color_location: u32,
    pub model_view: UniformSlot,
    pub projection: UniformSlot,
}

impl ShaderInterface {
    pub fn resolve(source: &str) -> Result<Self, ShaderError> {
        let decls = Declarations::scan(source)?;
        Ok(Self {
            position_location: decls.location(POSITION_ATTRIBUTE)?,
            color_location: decls.location(COLOR_ATTRIBUTE)?,
            model_view: decls.uniform(MODEL_VIEW_UNIFORM)?,
            projection: decls.uniform(PROJECTION_UNIFORM)?,
        })
    }
}

/// A shader/code contract violation.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    MissingAttribute(&'static str),
    MissingUniform(&'static str),
    /// A `@location`/`@group`/`@binding` attribute without a numeric argument.
    Malformed { line: usize, message: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::MissingAttribute(name) => {
                write!(f, "shader declares no vertex input named `{name}`")
            }
            ShaderError::MissingUniform(name) => {
                write!(f, "shader declares no uniform named `{name}`")
            }
            ShaderError::Malformed { line, message } => {
                write!(f, "malformed shader declaration at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

// ── declaration scan ──────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Declarations {
    locations: Vec<(String, u32)>,
    uniforms: Vec<(String, UniformSlot)>,
}

impl Declarations {
    /// Collects `@location(n) name:` members and
    /// `@group(g) @binding(b) var<uniform> name:` globals.
    ///
    /// This is a declaration scan, not a WGSL parser: wgpu validates the
    /// module itself when the pipeline is created.
    fn scan(source: &str) -> Result<Self, ShaderError> {
        let mut out = Self::default();
        let mut group = None;
        let mut binding = None;

        for (n, raw) in source.lines().enumerate() {
            let line_no = n + 1;
            let mut rest = strip_comment(raw).trim();

            while !rest.is_empty() {
                if let Some(after) = rest.strip_prefix("@location") {
                    let (index, tail) = numeric_arg(after, line_no, "@location")?;
                    rest = match member_name(tail) {
                        Some((name, after_name)) => {
                            out.locations.push((name.to_string(), index));
                            after_name
                        }
                        None => tail,
                    };
                } else if let Some(after) = rest.strip_prefix("@group") {
                    let (index, tail) = numeric_arg(after, line_no, "@group")?;
                    group = Some(index);
                    rest = tail;
                } else if let Some(after) = rest.strip_prefix("@binding") {
                    let (index, tail) = numeric_arg(after, line_no, "@binding")?;
                    binding = Some(index);
                    rest = tail;
                } else if let Some(after) = rest.strip_prefix("var<uniform>") {
                    let Some((name, tail)) = member_name(after) else {
                        return Err(ShaderError::Malformed {
                            line: line_no,
                            message: "uniform without a name".to_string(),
                        });
                    };
                    let (Some(group), Some(binding)) = (group.take(), binding.take()) else {
                        return Err(ShaderError::Malformed {
                            line: line_no,
                            message: format!("uniform `{name}` lacks @group/@binding"),
                        });
                    };
                    out.uniforms.push((name.to_string(), UniformSlot { group, binding }));
                    rest = tail;
                } else {
                    // Any other global consumes pending @group/@binding.
                    if rest.starts_with("var") && !member_char(rest[3..].chars().next()) {
                        group = None;
                        binding = None;
                    }
                    rest = skip_token(rest);
                }
            }
        }

        Ok(out)
    }

    fn location(&self, name: &'static str) -> Result<u32, ShaderError> {
        self.locations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, l)| *l)
            .ok_or(ShaderError::MissingAttribute(name))
    }

    fn uniform(&self, name: &'static str) -> Result<UniformSlot, ShaderError> {
        self.uniforms
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
            .ok_or(ShaderError::MissingUniform(name))
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Parses `(n)` at the start of `s` (after optional whitespace).
fn numeric_arg<'s>(
    s: &'s str,
    line: usize,
    attr: &str,
) -> Result<(u32, &'s str), ShaderError> {
    let malformed = || ShaderError::Malformed {
        line,
        message: format!("{attr} expects a numeric argument"),
    };

    let s = s.trim_start().strip_prefix('(').ok_or_else(malformed)?;
    let close = s.find(')').ok_or_else(malformed)?;
    let value = s[..close].trim().parse::<u32>().map_err(|_| malformed())?;
    Ok((value, s[close + 1..].trim_start()))
}

/// Reads `ident :` at the start of `s`. Returns `None` when `s` does not begin
/// with an identifier followed by a colon (e.g. `@location(0) vec4<f32>`).
fn member_name(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !member_char(Some(*c)))
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    let (name, tail) = s.split_at(end);
    let tail = tail.trim_start().strip_prefix(':')?;
    Some((name, tail.trim_start()))
}

fn member_char(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Skips one token: an identifier/number run, or a single other character.
fn skip_token(s: &str) -> &str {
    let mut chars = s.char_indices();
    let Some((_, first)) = chars.next() else { return s };

    let end = if member_char(Some(first)) {
        chars
            .find(|(_, c)| !member_char(Some(*c)))
            .map_or(s.len(), |(i, _)| i)
    } else {
        first.len_utf8()
    };
    s[end..].trim_start()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shader_resolves() {
        let iface = ShaderInterface::resolve(SOURCE).unwrap();
        assert_eq!(iface.position_location, 0);
        assert_eq!(iface.color_location, 1);
        assert_eq!(iface.model_view, UniformSlot { group: 0, binding: 0 });
        assert_eq!(iface.projection, UniformSlot { group: 0, binding: 1 });
    }

    #[test]
    fn locations_and_bindings_follow_the_source() {
        let src = "
            @group(1) @binding(3) var<uniform> projectionMatrix: mat4x4<f32>;
            @group(1)
            @binding(2)
            var<uniform> modelViewMatrix: mat4x4<f32>;
            struct In {
                @location(4) vColor: vec4<f32>,
                @location( 7 ) vPosition : vec4<f32>,
            };
        ";
        let iface = ShaderInterface::resolve(src).unwrap();
        assert_eq!(iface.position_location, 7);
        assert_eq!(iface.color_location, 4);
        assert_eq!(iface.model_view, UniformSlot { group: 1, binding: 2 });
        assert_eq!(iface.projection, UniformSlot { group: 1, binding: 3 });
    }

    #[test]
    fn missing_attribute_is_reported() {
        let src = SOURCE.replace("vColor", "vTint");
        assert_eq!(
            ShaderInterface::resolve(&src),
            Err(ShaderError::MissingAttribute(COLOR_ATTRIBUTE))
        );
    }

    #[test]
    fn missing_uniform_is_reported() {
        let src = SOURCE.replace("projectionMatrix", "proj");
        assert_eq!(
            ShaderInterface::resolve(&src),
            Err(ShaderError::MissingUniform(PROJECTION_UNIFORM))
        );
    }

    #[test]
    fn commented_out_declarations_do_not_count() {
        let src = SOURCE.replace(
            "@location(0) vPosition",
            "// @location(0) vPosition: vec4<f32>,\n@location(0) pos",
        );
        assert_eq!(
            ShaderInterface::resolve(&src),
            Err(ShaderError::MissingAttribute(POSITION_ATTRIBUTE))
        );
    }

    #[test]
    fn non_numeric_location_is_malformed() {
        let err = ShaderInterface::resolve("@location(x) vPosition: vec4<f32>").unwrap_err();
        assert!(matches!(err, ShaderError::Malformed { line: 1, .. }));
    }

    #[test]
    fn uniform_without_binding_is_malformed() {
        let err = ShaderInterface::resolve("var<uniform> modelViewMatrix: mat4x4<f32>;").unwrap_err();
        assert!(matches!(err, ShaderError::Malformed { line: 1, .. }));
    }

    #[test]
    fn other_bindings_do_not_leak_into_uniforms() {
        let src = "
            @group(0) @binding(5) var tex: texture_2d<f32>;
            var<uniform> modelViewMatrix: mat4x4<f32>;
        ";
        assert!(matches!(
            ShaderInterface::resolve(src),
            Err(ShaderError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn fragment_output_location_is_not_a_name() {
        let d = Declarations::scan("fn fs() -> @location(0) vec4<f32> { }").unwrap();
        assert!(d.locations.is_empty());
    }

    #[test]
    fn error_messages_name_the_missing_item() {
        assert_eq!(
            ShaderError::MissingUniform(MODEL_VIEW_UNIFORM).to_string(),
            "shader declares no uniform named `modelViewMatrix`"
        );
    }
}
