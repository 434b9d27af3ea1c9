use crate::{
    gl_call,
    gl_kinds::{GlIndex, Primitive},
};
use gl::types::{GLbitfield, GLsizei};
use log::error;
use std::ptr;

pub fn clear_color(rgba: [f32; 4]) {
    let [r, g, b, a] = rgba;
    gl_call!(gl::ClearColor(r, g, b, a));
}

pub fn clear(mask: GLbitfield) {
    gl_call!(gl::Clear(mask));
}

pub fn viewport(width: i32, height: i32) {
    gl_call!(gl::Viewport(0, 0, width, height));
}

/// Converts a host count to the driver's signed size type.
fn gl_size(value: usize, what: &str) -> Option<GLsizei> {
    match GLsizei::try_from(value) {
        Ok(size) => Some(size),
        Err(_) => {
            error!("{} {} exceeds the GL size range, draw skipped", what, value);
            None
        }
    }
}

/// Draws `count` vertices from the bound vertex array.
pub fn draw_arrays(primitive: Primitive, first: usize, count: usize) {
    let (Some(first), Some(count)) = (
        gl_size(first, "first vertex"),
        gl_size(count, "vertex count"),
    ) else {
        return;
    };
    gl_call!(gl::DrawArrays(primitive.gl_enum(), first, count));
}

/// Draws `count` indices of type `E` from the bound index buffer.
pub fn draw_elements<E: GlIndex>(primitive: Primitive, count: usize) {
    let Some(count) = gl_size(count, "index count") else {
        return;
    };
    gl_call!(gl::DrawElements(
        primitive.gl_enum(),
        count,
        E::GL_TYPE,
        ptr::null()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_range_pass_through() {
        assert_eq!(gl_size(0, "vertex count"), Some(0));
        assert_eq!(gl_size(6, "index count"), Some(6));
        assert_eq!(gl_size(i32::MAX as usize, "index count"), Some(i32::MAX));
    }

    #[test]
    fn oversized_counts_are_refused() {
        assert_eq!(gl_size(i32::MAX as usize + 1, "index count"), None);
        assert_eq!(gl_size(usize::MAX, "vertex count"), None);
    }

    #[test]
    fn oversized_draws_return_before_any_gl_call() {
        // no context is loaded, so reaching the driver would panic
        draw_arrays(Primitive::Triangles, 0, usize::MAX);
        draw_arrays(Primitive::Triangles, usize::MAX, 3);
        draw_elements::<u32>(Primitive::Triangles, usize::MAX);
    }
}
