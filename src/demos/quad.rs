use super::load_shaders;
use crate::{
    application::Application,
    buffer_object::{IdxBuffer, VtxBuffer},
    config::DemoConfig,
    error::Result,
    gl_kinds::{BufferUsage, Primitive},
    rendering,
    shader_program::ShaderProgram,
    shaders_src::{TRANSFORMED_VERT_SHDR_SRC, VERTEX_COLOR_FRAG_SHDR_SRC},
    vertex_array_object::VtxArray,
};
use nalgebra_glm as glm;

const STRIDE: u32 = 6;

/// Radians per second.
const SPIN_SPEED: f32 = 0.8;

#[rustfmt::skip]
const VERTICES: [f32; 24] = [
    // position         // color
     0.5,  0.5, 0.0,    1.0, 0.5, 0.2,
     0.5, -0.5, 0.0,    0.2, 1.0, 0.5,
    -0.5, -0.5, 0.0,    0.5, 0.2, 1.0,
    -0.5,  0.5, 0.0,    1.0, 1.0, 1.0,
];

#[rustfmt::skip]
const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

/// Rotation about z, squashed so the quad keeps its shape in a non-square
/// framebuffer.
fn transform(time: f64, framebuffer_size: (i32, i32)) -> glm::Mat4 {
    let (width, height) = framebuffer_size;
    let aspect = if width > 0 && height > 0 {
        width as f32 / height as f32
    } else {
        1.0
    };
    let scale = glm::scaling(&glm::vec3(1.0 / aspect.max(1.0), aspect.min(1.0), 1.0));
    let rotation = glm::rotation(time as f32 * SPIN_SPEED, &glm::vec3(0.0, 0.0, 1.0));
    scale * rotation
}

pub(super) fn run(app: &mut Application, config: &DemoConfig) -> Result<()> {
    let program = {
        let (vertex, fragment) =
            load_shaders(config, TRANSFORMED_VERT_SHDR_SRC, VERTEX_COLOR_FRAG_SHDR_SRC)?;
        ShaderProgram::from_shaders(&vertex, &fragment)?
    };
    let transform_location = program.uniform_location("transform")?;

    let mut vao = VtxArray::new()?;
    let vbo = VtxBuffer::new(&VERTICES, BufferUsage::StaticDraw)?;
    let ibo = IdxBuffer::new(&INDICES, BufferUsage::StaticDraw)?;
    vao.push_attrib_pointer::<f32>(3, false, STRIDE, 0)?;
    vao.push_attrib_pointer::<f32>(3, false, STRIDE, 3)?;
    // The index buffer binding belongs to the vertex array, so release the
    // array first.
    vao.unbind();
    vbo.unbind();
    ibo.unbind();

    app.run(|frame| {
        rendering::clear(gl::COLOR_BUFFER_BIT);
        program.bind();
        program.set_uniform(
            transform_location,
            &transform(frame.time, frame.framebuffer_size),
        );
        vao.bind();
        rendering::draw_elements::<u32>(Primitive::Triangles, ibo.len());
        vao.unbind();
        program.unbind();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_address_existing_vertices() {
        let vertex_count = (VERTICES.len() / STRIDE as usize) as u32;
        assert_eq!(vertex_count, 4);
        assert!(INDICES.iter().all(|&i| i < vertex_count));
        assert_eq!(INDICES.len() % 3, 0);
    }

    #[test]
    fn transform_starts_as_identity_on_square_framebuffers() {
        let m = transform(0.0, (600, 600));
        let diff = m - glm::Mat4::identity();
        assert!(diff.iter().all(|v| v.abs() < 1e-6));
    }

    #[test]
    fn wide_framebuffers_squash_x() {
        let m = transform(0.0, (800, 400));
        assert!((m[(0, 0)] - 0.5).abs() < 1e-6);
        assert!((m[(1, 1)] - 1.0).abs() < 1e-6);
        // degenerate sizes fall back to a square aspect
        let m = transform(0.0, (0, 0));
        assert!((m[(0, 0)] - 1.0).abs() < 1e-6);
    }
}
