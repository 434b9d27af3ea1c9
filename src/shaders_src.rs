pub(crate) const COLORED_VERT_SHDR_SRC: &str = "#version 330 core
layout (location = 0) in vec3 position;
layout (location = 1) in vec3 color;

out vec3 vertex_color;

void main()
{
    vertex_color = color;
    gl_Position = vec4(position, 1.0);
}";

pub(crate) const TRANSFORMED_VERT_SHDR_SRC: &str = "#version 330 core
layout (location = 0) in vec3 position;
layout (location = 1) in vec3 color;

uniform mat4 transform;

out vec3 vertex_color;

void main()
{
    vertex_color = color;
    gl_Position = transform * vec4(position, 1.0);
}";

pub(crate) const VERTEX_COLOR_FRAG_SHDR_SRC: &str = "#version 330 core
in vec3 vertex_color;
out vec4 frag_color;

void main()
{
    frag_color = vec4(vertex_color, 1.0);
}";
