use crate::{
    error::{GlObjectError, Result},
    gl_call,
    object::{binding_id, GlObject},
    shader_object::{PixShader, VtxShader},
};
use gl::types::{GLint, GLsizei, GLuint};
use log::debug;
use std::ffi::CString;

pub type UniformLocation = GLint;

/// Values that can be written to a uniform of the currently used program.
pub trait UniformValue {
    fn set_uniform(location: UniformLocation, value: &Self);
}

macro_rules! define_uniform(
    ($type:ty, $binding:expr) => {
        impl UniformValue for $type {
            #[inline(always)]
            fn set_uniform(location: UniformLocation, value: &Self) {
                gl_call!($binding(location, value));
            }
        }
    }
);

#[rustfmt::skip]
mod uniforms {
    use super::{UniformLocation, UniformValue};
    use crate::gl_call;
    use nalgebra_glm as glm;

    define_uniform!(f32, |l, v: &f32| gl::Uniform1f(l, *v));
    define_uniform!(i32, |l, v: &i32| gl::Uniform1i(l, *v));
    define_uniform!(u32, |l, v: &u32| gl::Uniform1ui(l, *v));
    define_uniform!(glm::Vec2, |l, v: &glm::Vec2| gl::Uniform2f(l, v.x, v.y));
    define_uniform!(glm::Vec3, |l, v: &glm::Vec3| gl::Uniform3f(l, v.x, v.y, v.z));
    define_uniform!(glm::Vec4, |l, v: &glm::Vec4| gl::Uniform4f(l, v.x, v.y, v.z, v.w));
    define_uniform!(glm::Mat4, |l, v: &glm::Mat4| gl::UniformMatrix4fv(l, 1, gl::FALSE, glm::value_ptr(v).as_ptr()));
}

/// A handle to a [Program
/// Object](https://www.khronos.org/opengl/wiki/GLSL_Object#Program_objects)
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Creates a program, attaches every shader in `shader_ids` and links it.
    pub fn new(shader_ids: &[GLuint]) -> Result<Self> {
        let id = gl_call!(gl::CreateProgram());
        if id == 0 {
            return Err(GlObjectError::Allocation("program object"));
        }
        debug!("Allocated shader program ID: {}", id);
        let program = Self { id };

        for &shader in shader_ids {
            gl_call!(gl::AttachShader(program.id, shader));
        }
        gl_call!(gl::LinkProgram(program.id));

        if !program.link_success() {
            return Err(GlObjectError::Link {
                log: program.info_log(),
            });
        }
        Ok(program)
    }

    /// Links the usual vertex + fragment pair.
    pub fn from_shaders(vertex: &VtxShader, fragment: &PixShader) -> Result<Self> {
        Self::new(&[vertex.id(), fragment.id()])
    }

    fn link_success(&self) -> bool {
        let mut success = 0;
        gl_call!(gl::GetProgramiv(self.id, gl::LINK_STATUS, &mut success));
        success == GLint::from(gl::TRUE)
    }

    /// Gets the log data for this program.
    pub fn info_log(&self) -> String {
        let mut needed_len = 0;
        gl_call!(gl::GetProgramiv(self.id, gl::INFO_LOG_LENGTH, &mut needed_len));
        let mut v: Vec<u8> = vec![0; needed_len.max(0) as usize];
        let mut len_written: GLsizei = 0;
        gl_call!(gl::GetProgramInfoLog(
            self.id,
            v.len() as GLsizei,
            &mut len_written,
            v.as_mut_ptr().cast(),
        ));
        v.truncate(len_written.max(0) as usize);
        String::from_utf8_lossy(&v).into_owned()
    }

    /// Sets the program as the program to use when drawing.
    pub fn bind(&self) {
        self.set_bound(true);
    }

    pub fn unbind(&self) {
        self.set_bound(false);
    }

    pub fn set_bound(&self, state: bool) {
        gl_call!(gl::UseProgram(binding_id(self.id, state)));
    }

    pub fn uniform_location(&self, name: &str) -> Result<UniformLocation> {
        let c_name = CString::new(name)?;
        let location = gl_call!(gl::GetUniformLocation(self.id, c_name.as_ptr()));
        if location == -1 {
            Err(GlObjectError::UnknownUniform(name.to_string()))
        } else {
            Ok(location)
        }
    }

    /// Writes `value` to `location`. The program must be bound.
    #[inline(always)]
    pub fn set_uniform<T: UniformValue>(&self, location: UniformLocation, value: &T) {
        T::set_uniform(location, value);
    }
}

impl GlObject for ShaderProgram {
    fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        debug!("Dropping shader program ID: {}", self.id);
        gl_call!(gl::DeleteProgram(self.id));
    }
}

