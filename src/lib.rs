#![deny(rust_2018_compatibility)]

//! RAII wrappers for OpenGL buffers, shaders, vertex arrays, programs and
//! textures. Constructors create the driver object, `Drop` deletes it.

pub mod error;

pub mod application;
pub mod buffer_object;
pub mod config;
pub mod debug_output;
pub mod demos;
pub mod gl_kinds;
pub mod object;
pub mod rendering;
pub mod shader_object;
pub mod shader_program;
pub mod texture;
pub mod vertex_array_object;

mod shaders_src;

pub use buffer_object::{BufferObject, IdxBuffer, VtxBuffer};
pub use error::{GlErrorCode, GlObjectError, Result};
pub use object::GlObject;
pub use shader_object::{PixShader, ShaderObject, VtxShader};
pub use shader_program::ShaderProgram;
pub use texture::TextureObject;
pub use vertex_array_object::VtxArray;
