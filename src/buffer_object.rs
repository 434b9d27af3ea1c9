use crate::{
    error::{GlObjectError, Result},
    gl_call,
    gl_kinds::{ArrayTarget, BufferTarget, BufferUsage, ElementArrayTarget, GlElement},
    object::{binding_id, GlObject},
};
use gl::types::{GLsizeiptr, GLuint};
use log::debug;
use std::{marker::PhantomData, mem::size_of_val};

/// Basic wrapper for a [Buffer
/// Object](https://www.khronos.org/opengl/wiki/Buffer_Object).
///
/// The binding point and the element type are part of the type, so a buffer
/// knows where it binds without the caller repeating the target.
pub struct BufferObject<T: BufferTarget, E: GlElement> {
    id: GLuint,
    len: usize,
    _p: PhantomData<(T, E)>,
}

pub type VtxBuffer = BufferObject<ArrayTarget, f32>;
pub type IdxBuffer = BufferObject<ElementArrayTarget, u32>;

impl<T: BufferTarget, E: GlElement> BufferObject<T, E> {
    /// Generates a buffer, binds it and uploads `data`.
    ///
    /// The buffer stays bound afterwards.
    pub fn new(data: &[E], usage: BufferUsage) -> Result<Self> {
        let mut id = 0;
        gl_call!(gl::GenBuffers(1, &mut id));
        if id == 0 {
            return Err(GlObjectError::Allocation("buffer object"));
        }
        debug!("Allocated {:?} buffer ID: {}", T::KIND, id);

        gl_call!(gl::BindBuffer(T::TARGET, id));
        gl_call!(gl::BufferData(
            T::TARGET,
            size_of_val(data) as GLsizeiptr,
            data.as_ptr().cast(),
            usage.gl_enum(),
        ));

        Ok(Self {
            id,
            len: data.len(),
            _p: PhantomData,
        })
    }

    pub fn bind(&self) {
        self.set_bound(true);
    }

    pub fn unbind(&self) {
        self.set_bound(false);
    }

    /// Binds this buffer to its target, or clears the target.
    pub fn set_bound(&self, state: bool) {
        gl_call!(gl::BindBuffer(T::TARGET, binding_id(self.id, state)));
    }

    /// Number of elements uploaded at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: BufferTarget, E: GlElement> GlObject for BufferObject<T, E> {
    fn id(&self) -> GLuint {
        self.id
    }
}

impl<T: BufferTarget, E: GlElement> Drop for BufferObject<T, E> {
    fn drop(&mut self) {
        debug!("Dropping {:?} buffer ID: {}", T::KIND, self.id);
        gl_call!(gl::DeleteBuffers(1, &self.id));
    }
}
