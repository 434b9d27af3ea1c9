use crate::gl_kinds::StageKind;
use gl::types::GLenum;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlObjectError>;

#[derive(Debug, Error)]
pub enum GlObjectError {
    #[error("Couldn't allocate {0}")]
    Allocation(&'static str),
    #[error("{stage:?} shader compilation error: {log}")]
    Compilation { stage: StageKind, log: String },
    #[error("{stage:?} shader specialization error: {log}")]
    Specialization { stage: StageKind, log: String },
    #[error("Program link error: {log}")]
    Link { log: String },
    #[error("Unknown uniform location: {0}")]
    UnknownUniform(String),
    #[error("Attribute pointer index out of range")]
    AttribStackEmpty,
    #[error("Attribute dimension must be 1..=4, got {0}")]
    InvalidAttribDimension(u32),
    #[error("Failed to create CString: {0}")]
    Nul(#[from] std::ffi::NulError),
    #[error("Couldn't read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Window error: {0}")]
    Window(String),
    #[error("{0}")]
    Usage(String),
}

/// Codes reported by `glGetError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlErrorCode {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,
    Unknown(GLenum),
}

impl GlErrorCode {
    /// `None` for `GL_NO_ERROR`.
    pub fn from_raw(code: GLenum) -> Option<Self> {
        let code = match code {
            gl::NO_ERROR => return None,
            gl::INVALID_ENUM => GlErrorCode::InvalidEnum,
            gl::INVALID_VALUE => GlErrorCode::InvalidValue,
            gl::INVALID_OPERATION => GlErrorCode::InvalidOperation,
            gl::STACK_OVERFLOW => GlErrorCode::StackOverflow,
            gl::STACK_UNDERFLOW => GlErrorCode::StackUnderflow,
            gl::OUT_OF_MEMORY => GlErrorCode::OutOfMemory,
            gl::INVALID_FRAMEBUFFER_OPERATION => GlErrorCode::InvalidFramebufferOperation,
            other => GlErrorCode::Unknown(other),
        };
        Some(code)
    }

    pub fn raw(self) -> GLenum {
        match self {
            GlErrorCode::InvalidEnum => gl::INVALID_ENUM,
            GlErrorCode::InvalidValue => gl::INVALID_VALUE,
            GlErrorCode::InvalidOperation => gl::INVALID_OPERATION,
            GlErrorCode::StackOverflow => gl::STACK_OVERFLOW,
            GlErrorCode::StackUnderflow => gl::STACK_UNDERFLOW,
            GlErrorCode::OutOfMemory => gl::OUT_OF_MEMORY,
            GlErrorCode::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            GlErrorCode::Unknown(code) => code,
        }
    }
}

impl std::fmt::Display for GlErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GlErrorCode::InvalidEnum => "GL_INVALID_ENUM",
            GlErrorCode::InvalidValue => "GL_INVALID_VALUE",
            GlErrorCode::InvalidOperation => "GL_INVALID_OPERATION",
            GlErrorCode::StackOverflow => "GL_STACK_OVERFLOW",
            GlErrorCode::StackUnderflow => "GL_STACK_UNDERFLOW",
            GlErrorCode::OutOfMemory => "GL_OUT_OF_MEMORY",
            GlErrorCode::InvalidFramebufferOperation => "GL_INVALID_FRAMEBUFFER_OPERATION",
            GlErrorCode::Unknown(_) => "GL_UNKNOWN_ERROR",
        };
        write!(f, "{} ({:#06x})", name, self.raw())
    }
}

/// Drains the driver error queue, logging every pending code.
///
/// Returns how many codes were pending. The queue is bounded to avoid
/// spinning forever on a lost context, which keeps reporting errors.
pub fn drain_errors(file: &str, line: u32, column: u32) -> usize {
    const MAX_PENDING: usize = 16;

    let mut count = 0;
    while count < MAX_PENDING {
        let raw = unsafe { gl::GetError() };
        let Some(code) = GlErrorCode::from_raw(raw) else {
            break;
        };
        log::error!("GL_ERROR: {}|{}({},{})", code, file, line, column);
        count += 1;
    }
    count
}

/// Runs an unsafe GL call. Debug builds drain `glGetError` afterwards and log
/// any failure with its call site, then carry on.
#[macro_export]
macro_rules! gl_call {
    ($call:expr) => {{
        #[allow(unused_unsafe)]
        let result = unsafe { $call };
        if cfg!(debug_assertions) {
            $crate::error::drain_errors(file!(), line!(), column!());
        }
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_error_is_not_a_code() {
        assert_eq!(GlErrorCode::from_raw(gl::NO_ERROR), None);
    }

    #[test]
    fn known_codes_are_named() {
        let code = GlErrorCode::from_raw(0x0502).unwrap();
        assert_eq!(code, GlErrorCode::InvalidOperation);
        assert_eq!(code.to_string(), "GL_INVALID_OPERATION (0x0502)");
        assert_eq!(
            GlErrorCode::from_raw(gl::OUT_OF_MEMORY),
            Some(GlErrorCode::OutOfMemory)
        );
    }

    #[test]
    fn unknown_codes_keep_their_value() {
        let code = GlErrorCode::from_raw(0x1234).unwrap();
        assert_eq!(code, GlErrorCode::Unknown(0x1234));
        assert_eq!(code.raw(), 0x1234);
    }

    #[test]
    fn errors_render_their_context() {
        let err = GlObjectError::Compilation {
            stage: StageKind::Fragment,
            log: "0:1: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Fragment shader compilation error: 0:1: syntax error"
        );
        assert_eq!(
            GlObjectError::InvalidAttribDimension(7).to_string(),
            "Attribute dimension must be 1..=4, got 7"
        );
    }
}
