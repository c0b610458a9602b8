//! A renderer that records commands instead of drawing

use super::{Renderer, Uniform};
use crate::assets::{MeshHandle, TextureHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Clear([f32; 4]),
    BindShader,
    SetUniform(&'static str, Uniform),
    BindTexture(u32, TextureHandle),
    Draw(MeshHandle),
}

/// Keeps the commands of the frame in progress and of the last presented one
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    current: Vec<RenderCommand>,
    last_frame: Vec<RenderCommand>,
    frames: u64,
    viewport: (u32, u32),
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Commands recorded since the last swap
    pub fn pending(&self) -> &[RenderCommand] {
        &self.current
    }

    pub fn last_frame(&self) -> &[RenderCommand] {
        &self.last_frame
    }

    /// Meshes drawn in the last presented frame, in order
    pub fn draws(&self) -> Vec<MeshHandle> {
        self.last_frame
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Draw(mesh) => Some(*mesh),
                _ => None,
            })
            .collect()
    }

    /// Every value a uniform was set to in the last presented frame
    pub fn uniform_values(&self, name: &str) -> Vec<Uniform> {
        self.last_frame
            .iter()
            .filter_map(|c| match c {
                RenderCommand::SetUniform(n, value) if *n == name => Some(*value),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.current.push(RenderCommand::Clear(color));
    }

    fn bind_shader(&mut self) {
        self.current.push(RenderCommand::BindShader);
    }

    fn set_uniform(&mut self, name: &'static str, value: Uniform) {
        self.current.push(RenderCommand::SetUniform(name, value));
    }

    fn bind_texture(&mut self, slot: u32, texture: TextureHandle) {
        self.current.push(RenderCommand::BindTexture(slot, texture));
    }

    fn draw_mesh(&mut self, mesh: MeshHandle) {
        self.current.push(RenderCommand::Draw(mesh));
    }

    fn swap_buffers(&mut self) {
        self.last_frame = std::mem::take(&mut self.current);
        self.frames += 1;
        log::trace!(
            "Frame {} presented ({} commands)",
            self.frames,
            self.last_frame.len()
        );
    }
}
