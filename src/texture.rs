use crate::{
    error::{GlObjectError, Result},
    gl_call,
    gl_kinds::TextureTarget,
    object::{binding_id, GlObject},
};
use gl::types::{GLenum, GLint, GLuint};
use log::debug;
use std::marker::PhantomData;

/// A texture handle bound to the dimension `D`. Image upload is left to the
/// caller; this type only owns the handle.
pub struct TextureObject<D: TextureTarget> {
    id: GLuint,
    _p: PhantomData<D>,
}

impl<D: TextureTarget> TextureObject<D> {
    pub fn new() -> Result<Self> {
        let mut id = 0;
        gl_call!(gl::GenTextures(1, &mut id));
        if id == 0 {
            return Err(GlObjectError::Allocation("texture object"));
        }
        debug!("Allocated {:?} texture ID: {}", D::KIND, id);
        Ok(Self {
            id,
            _p: PhantomData,
        })
    }

    pub fn bind(&self) {
        self.set_bound(true);
    }

    pub fn bind_to_unit(&self, unit: GLenum) {
        gl_call!(gl::ActiveTexture(unit));
        self.bind();
        gl_call!(gl::ActiveTexture(gl::TEXTURE0));
    }

    pub fn unbind(&self) {
        self.set_bound(false);
    }

    pub fn set_bound(&self, state: bool) {
        gl_call!(gl::BindTexture(D::TARGET, binding_id(self.id, state)));
    }

    /// Sets an integer parameter. The texture must be bound.
    pub fn parameter(&self, pname: GLenum, param: GLenum) {
        gl_call!(gl::TexParameteri(D::TARGET, pname, param as GLint));
    }
}

impl<D: TextureTarget> GlObject for TextureObject<D> {
    fn id(&self) -> GLuint {
        self.id
    }
}

impl<D: TextureTarget> Drop for TextureObject<D> {
    fn drop(&mut self) {
        debug!("Dropping {:?} texture ID: {}", D::KIND, self.id);
        gl_call!(gl::DeleteTextures(1, &self.id));
    }
}
