use crate::{
    error::{GlObjectError, Result},
    gl_call,
    gl_kinds::{FragmentStage, ShaderStage, VertexStage},
    object::GlObject,
};
use gl::types::{GLchar, GLint, GLsizei, GLuint};
use log::{debug, info};
use std::{ffi::CString, fs, marker::PhantomData, path::Path, ptr};

/// A handle to a [Shader
/// Object](https://www.khronos.org/opengl/wiki/GLSL_Object#Shader_objects)
/// of the stage `S`.
pub struct ShaderObject<S: ShaderStage> {
    id: GLuint,
    _p: PhantomData<S>,
}

pub type VtxShader = ShaderObject<VertexStage>;
pub type PixShader = ShaderObject<FragmentStage>;

impl<S: ShaderStage> ShaderObject<S> {
    fn new() -> Result<Self> {
        let id = gl_call!(gl::CreateShader(S::STAGE));
        if id == 0 {
            return Err(GlObjectError::Allocation("shader object"));
        }
        debug!("Allocated {:?} shader ID: {}", S::KIND, id);
        Ok(Self {
            id,
            _p: PhantomData,
        })
    }

    /// Uploads a SPIR-V module and specializes it at `entry_point`.
    pub fn from_spirv(binary: &[u8], entry_point: &str) -> Result<Self> {
        let entry_point = CString::new(entry_point)?;
        let shader = Self::new()?;
        gl_call!(gl::ShaderBinary(
            1,
            &shader.id,
            gl::SHADER_BINARY_FORMAT_SPIR_V,
            binary.as_ptr().cast(),
            binary.len() as GLsizei,
        ));
        gl_call!(gl::SpecializeShader(
            shader.id,
            entry_point.as_ptr(),
            0,
            ptr::null(),
            ptr::null(),
        ));
        if !shader.compile_success() {
            return Err(GlObjectError::Specialization {
                stage: S::KIND,
                log: shader.info_log(),
            });
        }
        Ok(shader)
    }

    /// Compiles GLSL source text.
    pub fn from_source(source: &str) -> Result<Self> {
        let shader = Self::new()?;
        let src_ptr = source.as_ptr() as *const GLchar;
        let src_len = source.len() as GLint;
        gl_call!(gl::ShaderSource(shader.id, 1, &src_ptr, &src_len));
        gl_call!(gl::CompileShader(shader.id));

        let log = shader.info_log();
        if !shader.compile_success() {
            return Err(GlObjectError::Compilation {
                stage: S::KIND,
                log,
            });
        }
        if !log.is_empty() {
            info!("{:?} shader compilation log: {}", S::KIND, log);
        }
        Ok(shader)
    }

    pub fn from_spirv_file(path: impl AsRef<Path>, entry_point: &str) -> Result<Self> {
        let path = path.as_ref();
        let binary = fs::read(path).map_err(|source| GlObjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_spirv(&binary, entry_point)
    }

    pub fn from_source_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| GlObjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(&source)
    }

    fn compile_success(&self) -> bool {
        let mut compiled = 0;
        gl_call!(gl::GetShaderiv(self.id, gl::COMPILE_STATUS, &mut compiled));
        compiled == GLint::from(gl::TRUE)
    }

    /// Gets the log data for this shader.
    ///
    /// This is usually used to check the message when a shader failed to compile.
    pub fn info_log(&self) -> String {
        let mut needed_len = 0;
        gl_call!(gl::GetShaderiv(self.id, gl::INFO_LOG_LENGTH, &mut needed_len));
        let mut v: Vec<u8> = vec![0; needed_len.max(0) as usize];
        let mut len_written: GLsizei = 0;
        gl_call!(gl::GetShaderInfoLog(
            self.id,
            v.len() as GLsizei,
            &mut len_written,
            v.as_mut_ptr().cast(),
        ));
        v.truncate(len_written.max(0) as usize);
        String::from_utf8_lossy(&v).into_owned()
    }
}

impl<S: ShaderStage> GlObject for ShaderObject<S> {
    fn id(&self) -> GLuint {
        self.id
    }
}

impl<S: ShaderStage> Drop for ShaderObject<S> {
    fn drop(&mut self) {
        debug!("Dropping {:?} shader ID: {}", S::KIND, self.id);
        gl_call!(gl::DeleteShader(self.id));
    }
}
