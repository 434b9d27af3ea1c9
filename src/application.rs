use crate::{
    config::DemoConfig,
    debug_output,
    error::{GlObjectError, Result},
    rendering,
};
use glfw::{
    fail_on_errors, Action, Context as _, GlfwReceiver, Key, OpenGlProfileHint, PWindow,
    SwapInterval, WindowEvent, WindowHint, WindowMode,
};
use log::{debug, info};

/// What a frame callback gets to know about the current frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Seconds since the window was opened.
    pub time: f64,
    pub framebuffer_size: (i32, i32),
}

/// Owns the window and the GL context. GL objects must be dropped before it.
pub struct Application {
    receiver: GlfwReceiver<(f64, WindowEvent)>,
    window: PWindow,
}

impl Application {
    pub fn new(config: &DemoConfig) -> Result<Self> {
        let mut glfw = glfw::init(fail_on_errors!())
            .map_err(|err| GlObjectError::Window(format!("{err:?}")))?;
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
        glfw.window_hint(WindowHint::ContextVersion(
            config.context.major,
            config.context.minor,
        ));
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(WindowHint::OpenGlDebugContext(config.debug_output));

        let (mut window, receiver) = glfw
            .create_window(
                config.window.width,
                config.window.height,
                &config.window.title,
                WindowMode::Windowed,
            )
            .ok_or_else(|| GlObjectError::Window("Couldn't create a window".to_string()))?;
        window.make_current();
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);

        if config.window.vsync {
            glfw.set_swap_interval(SwapInterval::Sync(1));
        } else {
            glfw.set_swap_interval(SwapInterval::None);
        }

        init_gl();

        let version = window.get_context_version();
        let context_version = (version.major as u32, version.minor as u32);
        info!(
            "Created {}x{} window with OpenGL {}.{} context",
            config.window.width, config.window.height, context_version.0, context_version.1
        );

        if config.debug_output {
            debug_output::install(context_version);
        }
        rendering::clear_color(config.clear_color);
        let (width, height) = window.get_framebuffer_size();
        rendering::viewport(width, height);

        Ok(Self { receiver, window })
    }

    /// Polls events and calls `frame` until the window is closed or Escape is
    /// pressed. Buffers are swapped after every frame.
    pub fn run(&mut self, mut frame: impl FnMut(Frame) -> Result<()>) -> Result<()> {
        self.window.glfw.set_time(0.0);
        while !self.window.should_close() {
            self.update_events();
            frame(Frame {
                time: self.window.glfw.get_time(),
                framebuffer_size: self.window.get_framebuffer_size(),
            })?;
            self.window.swap_buffers();
        }
        info!("Window closed");
        Ok(())
    }

    fn update_events(&mut self) {
        self.window.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.receiver) {
            match event {
                WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    self.window.set_should_close(true);
                }
                WindowEvent::FramebufferSize(w, h) => {
                    if w == 0 || h == 0 {
                        continue;
                    }
                    debug!("Framebuffer resized to {}x{}", w, h);
                    rendering::viewport(w, h);
                }
                _ => {}
            }
        }
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        gl_loader::end_gl();
    }
}

fn init_gl() {
    gl_loader::init_gl();
    gl::load_with(|symbol| gl_loader::get_proc_address(symbol) as *const _);
}
