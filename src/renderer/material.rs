//! Per-object materials and scene-wide light values

use glam::Vec3;

use super::{Renderer, Uniform, uniforms};
use crate::assets::TextureHandle;

/// Two albedo textures and a blend selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub albedo: TextureHandle,
    /// Shown instead of `albedo` when `using_second` is 1.0
    pub albedo2: TextureHandle,
    pub shininess: f32,
    pub using_second: f32,
}

impl Material {
    /// Same texture in both slots
    pub fn single(texture: TextureHandle) -> Self {
        Self::pair(texture, texture)
    }

    pub fn pair(albedo: TextureHandle, albedo2: TextureHandle) -> Self {
        Self {
            albedo,
            albedo2,
            shininess: 64.0,
            using_second: 0.0,
        }
    }

    pub fn with_second(mut self, using_second: bool) -> Self {
        self.using_second = if using_second { 1.0 } else { 0.0 };
        self
    }

    /// Upload uniforms and bind textures to slots 0 and 1
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_uniform(uniforms::USING_SECOND, Uniform::Float(self.using_second));
        renderer.set_uniform(uniforms::SHININESS, Uniform::Float(self.shininess));
        renderer.bind_texture(0, self.albedo);
        renderer.bind_texture(1, self.albedo2);
    }
}

/// Point light and ambient terms, uploaded once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLighting {
    pub light_pos: Vec3,
    pub light_col: Vec3,
    pub light_ambient_pow: f32,
    pub light_specular_pow: f32,
    pub ambient_col: Vec3,
    pub ambient_pow: f32,
    pub shininess: f32,
    pub linear_falloff: f32,
    pub quadratic_falloff: f32,
    pub texture_mix: f32,
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self {
            light_pos: Vec3::new(0.0, 0.0, -5.0),
            light_col: Vec3::new(0.9, 0.85, 0.5),
            light_ambient_pow: 1.0,
            light_specular_pow: 1.0,
            ambient_col: Vec3::ONE,
            ambient_pow: 0.5,
            shininess: 4.0,
            linear_falloff: 0.09,
            quadratic_falloff: 0.032,
            texture_mix: 0.0,
        }
    }
}

impl SceneLighting {
    pub fn upload<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.bind_shader();
        renderer.set_uniform(uniforms::LIGHT_POS, Uniform::Vec3(self.light_pos));
        renderer.set_uniform(uniforms::LIGHT_COL, Uniform::Vec3(self.light_col));
        renderer.set_uniform(
            uniforms::AMBIENT_LIGHT_STRENGTH,
            Uniform::Float(self.light_ambient_pow),
        );
        renderer.set_uniform(
            uniforms::SPECULAR_LIGHT_STRENGTH,
            Uniform::Float(self.light_specular_pow),
        );
        renderer.set_uniform(uniforms::AMBIENT_COL, Uniform::Vec3(self.ambient_col));
        renderer.set_uniform(uniforms::AMBIENT_STRENGTH, Uniform::Float(self.ambient_pow));
        renderer.set_uniform(uniforms::SHININESS, Uniform::Float(self.shininess));
        renderer.set_uniform(uniforms::ATTENUATION_CONSTANT, Uniform::Float(1.0));
        renderer.set_uniform(uniforms::ATTENUATION_LINEAR, Uniform::Float(self.linear_falloff));
        renderer.set_uniform(
            uniforms::ATTENUATION_QUADRATIC,
            Uniform::Float(self.quadratic_falloff),
        );
        renderer.set_uniform(uniforms::TEXTURE_MIX, Uniform::Float(self.texture_mix));
    }
}
