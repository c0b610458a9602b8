//! Rendering backend abstraction
//!
//! The game issues a small immediate-mode command set (bind shader, set
//! uniforms, bind textures, draw). A GPU backend implements [`Renderer`];
//! [`RecordingRenderer`] captures the commands for headless runs and tests.

pub mod material;
pub mod recording;
pub mod vertex;

use glam::{Mat3, Mat4, Vec3};

use crate::assets::{MeshHandle, TextureHandle};

pub use material::{Material, SceneLighting};
pub use recording::{RecordingRenderer, RenderCommand};
pub use vertex::Vertex;

/// A shader uniform value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Mat3(Mat3),
    Mat4(Mat4),
}

/// Uniform names understood by the lit textured shader
pub mod uniforms {
    pub const MODEL_VIEW_PROJECTION: &str = "u_ModelViewProjection";
    pub const MODEL: &str = "u_Model";
    pub const NORMAL_MATRIX: &str = "u_NormalMatrix";
    pub const VIEW: &str = "u_View";
    pub const CAMERA_POS: &str = "u_CamPos";
    pub const DIFFUSE: &str = "s_Diffuse";
    pub const DIFFUSE2: &str = "s_Diffuse2";
    pub const USING_SECOND: &str = "u_usingSecond";
    pub const SHININESS: &str = "u_Shininess";

    pub const LIGHT_POS: &str = "u_LightPos";
    pub const LIGHT_COL: &str = "u_LightCol";
    pub const AMBIENT_LIGHT_STRENGTH: &str = "u_AmbientLightStrength";
    pub const SPECULAR_LIGHT_STRENGTH: &str = "u_SpecularLightStrength";
    pub const AMBIENT_COL: &str = "u_AmbientCol";
    pub const AMBIENT_STRENGTH: &str = "u_AmbientStrength";
    pub const ATTENUATION_CONSTANT: &str = "u_LightAttenuationConstant";
    pub const ATTENUATION_LINEAR: &str = "u_LightAttenuationLinear";
    pub const ATTENUATION_QUADRATIC: &str = "u_LightAttenuationQuadratic";
    pub const TEXTURE_MIX: &str = "u_TextureMix";
}

/// Background clear color
pub const CLEAR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Rendering backend
pub trait Renderer {
    /// Framebuffer size changed
    fn set_viewport(&mut self, width: u32, height: u32);
    fn clear(&mut self, color: [f32; 4]);
    fn bind_shader(&mut self);
    fn set_uniform(&mut self, name: &'static str, value: Uniform);
    fn bind_texture(&mut self, slot: u32, texture: TextureHandle);
    fn draw_mesh(&mut self, mesh: MeshHandle);
    /// Present the frame
    fn swap_buffers(&mut self);
}
