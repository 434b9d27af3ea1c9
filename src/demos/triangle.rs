use super::load_shaders;
use crate::{
    application::Application,
    buffer_object::VtxBuffer,
    config::DemoConfig,
    error::Result,
    gl_kinds::{BufferUsage, Primitive},
    rendering,
    shader_program::ShaderProgram,
    shaders_src::{COLORED_VERT_SHDR_SRC, VERTEX_COLOR_FRAG_SHDR_SRC},
    vertex_array_object::VtxArray,
};

/// Floats per vertex: position then colour.
pub(super) const STRIDE: u32 = 6;

#[rustfmt::skip]
pub(super) const VERTICES: [f32; 18] = [
    // position         // color
    -0.5, -0.5, 0.0,    1.0, 0.0, 0.0,
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0,
];

pub(super) fn run(app: &mut Application, config: &DemoConfig) -> Result<()> {
    let program = {
        let (vertex, fragment) =
            load_shaders(config, COLORED_VERT_SHDR_SRC, VERTEX_COLOR_FRAG_SHDR_SRC)?;
        ShaderProgram::from_shaders(&vertex, &fragment)?
    };

    let mut vao = VtxArray::new()?;
    let vbo = VtxBuffer::new(&VERTICES, BufferUsage::StaticDraw)?;
    vao.push_attrib_pointer::<f32>(3, false, STRIDE, 0)?;
    vao.push_attrib_pointer::<f32>(3, false, STRIDE, 3)?;
    vao.unbind();
    vbo.unbind();

    let vertex_count = vbo.len() / STRIDE as usize;
    app.run(|_| {
        rendering::clear(gl::COLOR_BUFFER_BIT);
        program.bind();
        vao.bind();
        rendering::draw_arrays(Primitive::Triangles, 0, vertex_count);
        vao.unbind();
        program.unbind();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_hold_whole_vertices() {
        assert_eq!(VERTICES.len() % STRIDE as usize, 0);
        assert_eq!(VERTICES.len() / STRIDE as usize, 3);
    }

    #[test]
    fn positions_stay_in_clip_space() {
        for vertex in VERTICES.chunks(STRIDE as usize) {
            assert!(vertex[..3].iter().all(|c| (-1.0..=1.0).contains(c)));
            assert!(vertex[3..].iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
