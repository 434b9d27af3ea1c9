use crate::{
    error::{GlObjectError, Result},
    gl_call,
    gl_kinds::GlElement,
    object::{binding_id, GlObject},
};
use gl::types::{GLboolean, GLint, GLsizei, GLuint};
use log::debug;

/// Byte layout of one attribute, derived from element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribPointer {
    pub stride_bytes: usize,
    pub offset_bytes: usize,
}

impl AttribPointer {
    pub fn byte_layout<E: GlElement>(stride: u32, offset: usize) -> Self {
        Self {
            stride_bytes: stride as usize * E::SIZE,
            offset_bytes: offset * E::SIZE,
        }
    }
}

/// Attribute indices handed out by a vertex array, as a stack.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AttribStack {
    next_index: GLuint,
}

impl AttribStack {
    /// Reserves the next index for an attribute of `dim` components.
    pub fn push(&mut self, dim: u32) -> Result<GLuint> {
        if !(1..=4).contains(&dim) {
            return Err(GlObjectError::InvalidAttribDimension(dim));
        }
        let index = self.next_index;
        self.next_index += 1;
        Ok(index)
    }

    /// Releases the most recently reserved index.
    pub fn pop(&mut self) -> Result<GLuint> {
        if self.next_index == 0 {
            return Err(GlObjectError::AttribStackEmpty);
        }
        self.next_index -= 1;
        Ok(self.next_index)
    }

    pub fn len(&self) -> u32 {
        self.next_index
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }
}

/// Basic wrapper for a [Vertex Array
/// Object](https://www.khronos.org/opengl/wiki/Vertex_Specification#Vertex_Array_Object).
///
/// Attributes are configured as a stack: each push takes the next free index.
pub struct VtxArray {
    id: GLuint,
    attribs: AttribStack,
}

impl VtxArray {
    /// Generates a vertex array and binds it.
    pub fn new() -> Result<Self> {
        let mut id = 0;
        gl_call!(gl::GenVertexArrays(1, &mut id));
        if id == 0 {
            return Err(GlObjectError::Allocation("vertex array object"));
        }
        debug!("Allocated vertex array ID: {}", id);
        gl_call!(gl::BindVertexArray(id));
        Ok(Self {
            id,
            attribs: AttribStack::default(),
        })
    }

    /// Describes the next attribute as `dim` components of `E`.
    ///
    /// `stride` and `offset` are counted in elements, not bytes. The currently
    /// bound array buffer is captured as the attribute's source.
    pub fn push_attrib_pointer<E: GlElement>(
        &mut self,
        dim: u32,
        normalized: bool,
        stride: u32,
        offset: usize,
    ) -> Result<()> {
        let index = self.attribs.push(dim)?;
        let layout = AttribPointer::byte_layout::<E>(stride, offset);
        gl_call!(gl::VertexAttribPointer(
            index,
            dim as GLint,
            E::GL_TYPE,
            normalized as GLboolean,
            layout.stride_bytes as GLsizei,
            layout.offset_bytes as *const _,
        ));
        gl_call!(gl::EnableVertexAttribArray(index));
        debug!(
            "Vertex array {}: attribute {} = {} x {:?}",
            self.id,
            index,
            dim,
            E::KIND
        );
        Ok(())
    }

    /// Disables the most recently pushed attribute.
    pub fn pop_attrib_pointer(&mut self) -> Result<()> {
        let index = self.attribs.pop()?;
        gl_call!(gl::DisableVertexAttribArray(index));
        Ok(())
    }

    /// How many attributes are currently enabled.
    pub fn attrib_count(&self) -> u32 {
        self.attribs.len()
    }

    pub fn bind(&self) {
        self.set_bound(true);
    }

    pub fn unbind(&self) {
        self.set_bound(false);
    }

    pub fn set_bound(&self, state: bool) {
        gl_call!(gl::BindVertexArray(binding_id(self.id, state)));
    }
}

impl GlObject for VtxArray {
    fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for VtxArray {
    fn drop(&mut self) {
        debug!("Dropping vertex array ID: {}", self.id);
        gl_call!(gl::DeleteVertexArrays(1, &self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_layout_is_scaled_by_four_bytes() {
        // position (3) followed by colour (3), interleaved
        let colour = AttribPointer::byte_layout::<f32>(6, 3);
        assert_eq!(
            colour,
            AttribPointer {
                stride_bytes: 24,
                offset_bytes: 12
            }
        );
    }

    #[test]
    fn attributes_take_consecutive_indices() {
        let mut attribs = AttribStack::default();
        assert_eq!(attribs.push(3).unwrap(), 0);
        assert_eq!(attribs.push(4).unwrap(), 1);
        assert_eq!(attribs.len(), 2);
        assert_eq!(attribs.pop().unwrap(), 1);
        assert_eq!(attribs.push(2).unwrap(), 1);
    }

    #[test]
    fn popping_an_empty_stack_fails() {
        let mut attribs = AttribStack::default();
        assert!(matches!(attribs.pop(), Err(GlObjectError::AttribStackEmpty)));
        assert!(attribs.is_empty());

        attribs.push(1).unwrap();
        attribs.pop().unwrap();
        assert!(matches!(attribs.pop(), Err(GlObjectError::AttribStackEmpty)));
        assert_eq!(attribs.len(), 0);
    }

    #[test]
    fn dimensions_outside_one_to_four_are_rejected() {
        let mut attribs = AttribStack::default();
        for dim in [0, 5, 16] {
            assert!(matches!(
                attribs.push(dim),
                Err(GlObjectError::InvalidAttribDimension(d)) if d == dim
            ));
        }
        assert_eq!(attribs.len(), 0);
    }

    #[test]
    fn vertex_array_checks_run_before_any_gl_call() {
        let mut vao = VtxArray {
            id: 0,
            attribs: AttribStack::default(),
        };
        assert!(matches!(
            vao.push_attrib_pointer::<f32>(5, false, 0, 0),
            Err(GlObjectError::InvalidAttribDimension(5))
        ));
        assert!(matches!(
            vao.pop_attrib_pointer(),
            Err(GlObjectError::AttribStackEmpty)
        ));
        assert_eq!(vao.attrib_count(), 0);
        // no context is loaded, so Drop must not reach glDeleteVertexArrays
        std::mem::forget(vao);
    }

    #[test]
    fn tightly_packed_attribute_has_zero_offset() {
        let layout = AttribPointer::byte_layout::<u32>(0, 0);
        assert_eq!(layout.stride_bytes, 0);
        assert_eq!(layout.offset_bytes, 0);
    }
}
