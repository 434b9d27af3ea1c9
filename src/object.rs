use gl::types::GLuint;

/// Anything backed by a driver-side handle.
pub trait GlObject {
    fn id(&self) -> GLuint;
}

/// Maps a bind/unbind flag to the handle that should be made current.
#[inline(always)]
pub(crate) fn binding_id(id: GLuint, state: bool) -> GLuint {
    if state {
        id
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbinding_selects_the_null_handle() {
        assert_eq!(binding_id(7, true), 7);
        assert_eq!(binding_id(7, false), 0);
    }
}
