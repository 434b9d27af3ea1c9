//! Forwards `KHR_debug` driver messages to the `log` facade.

use crate::gl_call;
use gl::types::{GLchar, GLenum, GLsizei, GLuint};
use log::{debug, log, warn, Level};
use std::ffi::{c_void, CStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    High,
    Medium,
    Low,
    Notification,
    Other,
}

impl MessageSeverity {
    pub fn new(severity: GLenum) -> Self {
        match severity {
            gl::DEBUG_SEVERITY_HIGH => MessageSeverity::High,
            gl::DEBUG_SEVERITY_MEDIUM => MessageSeverity::Medium,
            gl::DEBUG_SEVERITY_LOW => MessageSeverity::Low,
            gl::DEBUG_SEVERITY_NOTIFICATION => MessageSeverity::Notification,
            _ => MessageSeverity::Other,
        }
    }

    pub fn log_level(self) -> Level {
        match self {
            MessageSeverity::High => Level::Error,
            MessageSeverity::Medium => Level::Warn,
            MessageSeverity::Low => Level::Info,
            MessageSeverity::Notification | MessageSeverity::Other => Level::Debug,
        }
    }
}

pub fn source_name(source: GLenum) -> &'static str {
    match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
        gl::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    }
}

pub fn type_name(type_: GLenum) -> &'static str {
    match type_ {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
        gl::DEBUG_TYPE_PORTABILITY => "Portability",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        _ => "Other",
    }
}

extern "system" fn message_callback(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const GLchar,
    _user_param: *mut c_void,
) {
    if message.is_null() {
        return;
    }
    let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    log!(
        MessageSeverity::new(severity).log_level(),
        "GL [{}/{}] {}: {}",
        source_name(source),
        type_name(type_),
        id,
        message
    );
}

/// Installs the message callback. Needs a 4.3+ context; older contexts only
/// get a warning.
pub fn install(context_version: (u32, u32)) {
    if context_version < (4, 3) {
        warn!(
            "Debug output needs OpenGL 4.3, context is {}.{}",
            context_version.0, context_version.1
        );
        return;
    }
    gl_call!(gl::Enable(gl::DEBUG_OUTPUT));
    gl_call!(gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS));
    gl_call!(gl::DebugMessageCallback(
        Some(message_callback),
        std::ptr::null()
    ));
    debug!("Installed GL debug message callback");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_log_levels() {
        assert_eq!(
            MessageSeverity::new(gl::DEBUG_SEVERITY_HIGH).log_level(),
            Level::Error
        );
        assert_eq!(
            MessageSeverity::new(gl::DEBUG_SEVERITY_MEDIUM).log_level(),
            Level::Warn
        );
        assert_eq!(
            MessageSeverity::new(gl::DEBUG_SEVERITY_LOW).log_level(),
            Level::Info
        );
        assert_eq!(
            MessageSeverity::new(gl::DEBUG_SEVERITY_NOTIFICATION).log_level(),
            Level::Debug
        );
        assert_eq!(MessageSeverity::new(0), MessageSeverity::Other);
    }

    #[test]
    fn sources_and_types_are_named() {
        assert_eq!(source_name(gl::DEBUG_SOURCE_SHADER_COMPILER), "Shader Compiler");
        assert_eq!(type_name(gl::DEBUG_TYPE_PERFORMANCE), "Performance");
        assert_eq!(type_name(0xdead), "Other");
    }
}
