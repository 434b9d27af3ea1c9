mod quad;
mod triangle;

use crate::{
    application::Application,
    config::DemoConfig,
    error::{GlObjectError, Result},
    shader_object::{PixShader, VtxShader},
};
use log::info;
use std::path::PathBuf;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

pub const USAGE: &str = "usage: gl_objects [triangle|quad] [--config <file.json>]";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Demo {
    #[default]
    Triangle,
    Quad,
}

#[derive(Debug, Default, PartialEq)]
pub struct DemoArgs {
    pub demo: Demo,
    pub config: Option<PathBuf>,
}

impl DemoArgs {
    /// Parses the arguments after the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut demo_seen = false;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().ok_or_else(|| {
                        GlObjectError::Usage(format!("--config needs a path\n{USAGE}"))
                    })?;
                    parsed.config = Some(PathBuf::from(path));
                }
                name if !demo_seen => {
                    parsed.demo = name.parse().map_err(|_| {
                        let known: Vec<String> = Demo::iter().map(|d| d.to_string()).collect();
                        GlObjectError::Usage(format!(
                            "unknown demo `{name}`, expected one of: {}\n{USAGE}",
                            known.join(", ")
                        ))
                    })?;
                    demo_seen = true;
                }
                other => {
                    return Err(GlObjectError::Usage(format!(
                        "unexpected argument `{other}`\n{USAGE}"
                    )))
                }
            }
        }
        Ok(parsed)
    }
}

/// Loads the demo's shader pair, from SPIR-V when configured.
fn load_shaders(
    config: &DemoConfig,
    glsl_vertex: &str,
    glsl_fragment: &str,
) -> Result<(VtxShader, PixShader)> {
    match &config.spirv {
        Some(spirv) => {
            info!(
                "Loading SPIR-V shaders {} and {}",
                spirv.vertex.display(),
                spirv.fragment.display()
            );
            Ok((
                VtxShader::from_spirv_file(&spirv.vertex, "main")?,
                PixShader::from_spirv_file(&spirv.fragment, "main")?,
            ))
        }
        None => Ok((
            VtxShader::from_source(glsl_vertex)?,
            PixShader::from_source(glsl_fragment)?,
        )),
    }
}

pub fn run(demo: Demo, config: &DemoConfig) -> Result<()> {
    let mut app = Application::new(config)?;
    info!("Running {} demo", demo);
    match demo {
        Demo::Triangle => triangle::run(&mut app, config),
        Demo::Quad => quad::run(&mut app, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_run_the_triangle() {
        assert_eq!(DemoArgs::parse(args(&[])).unwrap(), DemoArgs::default());
        assert_eq!(DemoArgs::default().demo, Demo::Triangle);
    }

    #[test]
    fn demo_and_config_in_any_order() {
        let parsed = DemoArgs::parse(args(&["--config", "demo.json", "quad"])).unwrap();
        assert_eq!(parsed.demo, Demo::Quad);
        assert_eq!(parsed.config, Some(PathBuf::from("demo.json")));
    }

    #[test]
    fn unknown_demo_lists_the_known_ones() {
        let err = DemoArgs::parse(args(&["cube"])).unwrap_err();
        assert!(matches!(err, GlObjectError::Usage(_)));
        assert!(err.to_string().contains("expected one of: triangle, quad"));
    }

    #[test]
    fn config_flag_needs_a_value() {
        assert!(matches!(
            DemoArgs::parse(args(&["-c"])),
            Err(GlObjectError::Usage(_))
        ));
        assert!(DemoArgs::parse(args(&["quad", "triangle"])).is_err());
    }
}
