//! Closed mappings from logical object kinds to native GL enums.
//!
//! Every mapping exists twice: as a sealed trait with an associated constant,
//! so generic wrappers pick their binding parameters at compile time, and as a
//! plain enum with an exhaustive `match`, for code that only knows the kind at
//! runtime. A type without a mapping simply does not implement the trait.

use gl::types::GLenum;
use std::mem::size_of;
use strum::{EnumCount, EnumIter, IntoStaticStr};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for u32 {}
    impl Sealed for super::ArrayTarget {}
    impl Sealed for super::ElementArrayTarget {}
    impl Sealed for super::VertexStage {}
    impl Sealed for super::FragmentStage {}
    impl Sealed for super::Texture1D {}
    impl Sealed for super::Texture2D {}
    impl Sealed for super::Texture3D {}
}

/// Scalar types that may be stored in a buffer or fed to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, IntoStaticStr)]
pub enum ElementKind {
    Float,
    UnsignedInt,
}

impl ElementKind {
    pub const fn gl_enum(self) -> GLenum {
        match self {
            ElementKind::Float => gl::FLOAT,
            ElementKind::UnsignedInt => gl::UNSIGNED_INT,
        }
    }

    pub const fn size(self) -> usize {
        match self {
            ElementKind::Float => size_of::<f32>(),
            ElementKind::UnsignedInt => size_of::<u32>(),
        }
    }

    pub fn from_gl_enum(value: GLenum) -> Option<Self> {
        match value {
            gl::FLOAT => Some(ElementKind::Float),
            gl::UNSIGNED_INT => Some(ElementKind::UnsignedInt),
            _ => None,
        }
    }
}

/// Scalar types with a native GL type. Only `f32` and `u32` are mapped:
///
/// ```
/// use gl_objects::gl_kinds::GlElement;
///
/// assert_eq!(<f32 as GlElement>::GL_TYPE, 0x1406);
/// assert_eq!(<u32 as GlElement>::GL_TYPE, 0x1405);
/// ```
///
/// Any other scalar is rejected at compile time instead of getting a default:
///
/// ```compile_fail
/// use gl_objects::gl_kinds::GlElement;
///
/// let _ = <i8 as GlElement>::GL_TYPE;
/// ```
///
/// ```compile_fail
/// use gl_objects::{gl_kinds::ArrayTarget, BufferObject};
///
/// let _ = BufferObject::<ArrayTarget, f64>::new(&[1.0], Default::default());
/// ```
pub trait GlElement: Copy + sealed::Sealed + 'static {
    const KIND: ElementKind;
    const GL_TYPE: GLenum = Self::KIND.gl_enum();
    const SIZE: usize = size_of::<Self>();
}

impl GlElement for f32 {
    const KIND: ElementKind = ElementKind::Float;
}

impl GlElement for u32 {
    const KIND: ElementKind = ElementKind::UnsignedInt;
}

/// Element types accepted as draw indices.
///
/// ```compile_fail
/// gl_objects::rendering::draw_elements::<f32>(gl_objects::gl_kinds::Primitive::Triangles, 3);
/// ```
pub trait GlIndex: GlElement {}

impl GlIndex for u32 {}

/// Buffer binding points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, IntoStaticStr)]
pub enum BufferKind {
    /// Holds arrays of vertex data for drawing.
    Vertex,
    /// Holds indexes of what vertexes to use for drawing.
    Index,
}

impl BufferKind {
    pub const fn gl_enum(self) -> GLenum {
        match self {
            BufferKind::Vertex => gl::ARRAY_BUFFER,
            BufferKind::Index => gl::ELEMENT_ARRAY_BUFFER,
        }
    }

    pub fn from_gl_enum(value: GLenum) -> Option<Self> {
        match value {
            gl::ARRAY_BUFFER => Some(BufferKind::Vertex),
            gl::ELEMENT_ARRAY_BUFFER => Some(BufferKind::Index),
            _ => None,
        }
    }
}

/// ```compile_fail
/// use gl_objects::gl_kinds::BufferTarget;
///
/// struct UniformTarget;
/// impl BufferTarget for UniformTarget {
///     const KIND: gl_objects::gl_kinds::BufferKind = gl_objects::gl_kinds::BufferKind::Vertex;
/// }
/// ```
pub trait BufferTarget: sealed::Sealed + 'static {
    const KIND: BufferKind;
    const TARGET: GLenum = Self::KIND.gl_enum();
}

#[derive(Debug)]
pub struct ArrayTarget;

#[derive(Debug)]
pub struct ElementArrayTarget;

impl BufferTarget for ArrayTarget {
    const KIND: BufferKind = BufferKind::Vertex;
}

impl BufferTarget for ElementArrayTarget {
    const KIND: BufferKind = BufferKind::Index;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, IntoStaticStr)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    pub const fn gl_enum(self) -> GLenum {
        match self {
            StageKind::Vertex => gl::VERTEX_SHADER,
            StageKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn from_gl_enum(value: GLenum) -> Option<Self> {
        match value {
            gl::VERTEX_SHADER => Some(StageKind::Vertex),
            gl::FRAGMENT_SHADER => Some(StageKind::Fragment),
            _ => None,
        }
    }
}

/// ```compile_fail
/// use gl_objects::gl_kinds::ShaderStage;
///
/// let _ = <() as ShaderStage>::STAGE;
/// ```
pub trait ShaderStage: sealed::Sealed + 'static {
    const KIND: StageKind;
    const STAGE: GLenum = Self::KIND.gl_enum();
}

#[derive(Debug)]
pub struct VertexStage;

#[derive(Debug)]
pub struct FragmentStage;

impl ShaderStage for VertexStage {
    const KIND: StageKind = StageKind::Vertex;
}

impl ShaderStage for FragmentStage {
    const KIND: StageKind = StageKind::Fragment;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, IntoStaticStr)]
pub enum TextureKind {
    OneDimensional,
    TwoDimensional,
    ThreeDimensional,
}

impl TextureKind {
    pub const fn gl_enum(self) -> GLenum {
        match self {
            TextureKind::OneDimensional => gl::TEXTURE_1D,
            TextureKind::TwoDimensional => gl::TEXTURE_2D,
            TextureKind::ThreeDimensional => gl::TEXTURE_3D,
        }
    }

    pub fn from_gl_enum(value: GLenum) -> Option<Self> {
        match value {
            gl::TEXTURE_1D => Some(TextureKind::OneDimensional),
            gl::TEXTURE_2D => Some(TextureKind::TwoDimensional),
            gl::TEXTURE_3D => Some(TextureKind::ThreeDimensional),
            _ => None,
        }
    }
}

/// ```compile_fail
/// use gl_objects::{gl_kinds::StageKind, TextureObject};
///
/// let _ = TextureObject::<StageKind>::new();
/// ```
pub trait TextureTarget: sealed::Sealed + 'static {
    const KIND: TextureKind;
    const TARGET: GLenum = Self::KIND.gl_enum();
}

#[derive(Debug)]
pub struct Texture1D;

#[derive(Debug)]
pub struct Texture2D;

#[derive(Debug)]
pub struct Texture3D;

impl TextureTarget for Texture1D {
    const KIND: TextureKind = TextureKind::OneDimensional;
}

impl TextureTarget for Texture2D {
    const KIND: TextureKind = TextureKind::TwoDimensional;
}

impl TextureTarget for Texture3D {
    const KIND: TextureKind = TextureKind::ThreeDimensional;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumCount)]
pub enum BufferUsage {
    #[default]
    StaticDraw,
    DynamicDraw,
    StreamDraw,
}

impl BufferUsage {
    pub const fn gl_enum(self) -> GLenum {
        match self {
            BufferUsage::StaticDraw => gl::STATIC_DRAW,
            BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
            BufferUsage::StreamDraw => gl::STREAM_DRAW,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Primitive {
    pub const fn gl_enum(self) -> GLenum {
        match self {
            Primitive::Points => gl::POINTS,
            Primitive::Lines => gl::LINES,
            Primitive::LineStrip => gl::LINE_STRIP,
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
            Primitive::TriangleFan => gl::TRIANGLE_FAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn assert_distinct<T: Copy>(iter: impl Iterator<Item = T>, f: impl Fn(T) -> GLenum, n: usize) {
        let values: HashSet<GLenum> = iter.map(f).collect();
        assert_eq!(values.len(), n);
    }

    #[test]
    fn element_kinds_map_to_native_scalars() {
        for kind in ElementKind::iter() {
            let expected = match kind {
                ElementKind::Float => 0x1406,
                ElementKind::UnsignedInt => 0x1405,
            };
            assert_eq!(kind.gl_enum(), expected, "{}", <&str>::from(kind));
            assert_eq!(ElementKind::from_gl_enum(expected), Some(kind));
        }
        assert_distinct(ElementKind::iter(), ElementKind::gl_enum, ElementKind::COUNT);
    }

    #[test]
    fn element_traits_agree_with_runtime_kinds() {
        assert_eq!(<f32 as GlElement>::GL_TYPE, ElementKind::Float.gl_enum());
        assert_eq!(<u32 as GlElement>::GL_TYPE, ElementKind::UnsignedInt.gl_enum());
        assert_eq!(<f32 as GlElement>::SIZE, ElementKind::Float.size());
        assert_eq!(<u32 as GlElement>::SIZE, 4);
    }

    #[test]
    fn buffer_kinds_map_to_native_targets() {
        for kind in BufferKind::iter() {
            let expected = match kind {
                BufferKind::Vertex => 0x8892,
                BufferKind::Index => 0x8893,
            };
            assert_eq!(kind.gl_enum(), expected);
            assert_eq!(BufferKind::from_gl_enum(expected), Some(kind));
        }
        assert_distinct(BufferKind::iter(), BufferKind::gl_enum, BufferKind::COUNT);
        assert_eq!(ArrayTarget::TARGET, 0x8892);
        assert_eq!(ElementArrayTarget::TARGET, 0x8893);
    }

    #[test]
    fn stage_kinds_map_to_native_stages() {
        for kind in StageKind::iter() {
            let expected = match kind {
                StageKind::Vertex => 0x8b31,
                StageKind::Fragment => 0x8b30,
            };
            assert_eq!(kind.gl_enum(), expected);
            assert_eq!(StageKind::from_gl_enum(expected), Some(kind));
        }
        assert_distinct(StageKind::iter(), StageKind::gl_enum, StageKind::COUNT);
        assert_eq!(VertexStage::STAGE, 0x8b31);
        assert_eq!(FragmentStage::STAGE, 0x8b30);
    }

    #[test]
    fn texture_kinds_map_to_native_targets() {
        for kind in TextureKind::iter() {
            let expected = match kind {
                TextureKind::OneDimensional => 0x0de0,
                TextureKind::TwoDimensional => 0x0de1,
                TextureKind::ThreeDimensional => 0x806f,
            };
            assert_eq!(kind.gl_enum(), expected);
            assert_eq!(TextureKind::from_gl_enum(expected), Some(kind));
        }
        assert_distinct(TextureKind::iter(), TextureKind::gl_enum, TextureKind::COUNT);
        assert_eq!(Texture2D::TARGET, gl::TEXTURE_2D);
    }

    #[test]
    fn unmapped_values_have_no_kind() {
        assert_eq!(ElementKind::from_gl_enum(gl::UNSIGNED_BYTE), None);
        assert_eq!(BufferKind::from_gl_enum(gl::UNIFORM_BUFFER), None);
        assert_eq!(StageKind::from_gl_enum(gl::GEOMETRY_SHADER), None);
        assert_eq!(TextureKind::from_gl_enum(gl::TEXTURE_CUBE_MAP), None);
    }

    #[test]
    fn static_draw_is_the_default_usage() {
        assert_eq!(BufferUsage::default().gl_enum(), 0x88e4);
        assert_distinct(BufferUsage::iter(), BufferUsage::gl_enum, BufferUsage::COUNT);
        assert_distinct(Primitive::iter(), Primitive::gl_enum, Primitive::COUNT);
    }
}
