//! Asset loading
//!
//! The game only ever sees opaque [`MeshHandle`]s and [`TextureHandle`]s.
//! `MemoryAssets` hands out handles without touching disk; `FsAssets` reads
//! and parses files under an asset root.

pub mod obj;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use obj::{ObjError, ObjMesh, load_obj, parse_obj};

/// Opaque renderable mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Opaque texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to load mesh {path}: {source}")]
    Mesh {
        path: String,
        #[source]
        source: ObjError,
    },
    #[error("texture not found: {0}")]
    TextureNotFound(String),
}

/// Loads meshes and textures by relative path
pub trait AssetLoader {
    fn load_mesh(&mut self, path: &str) -> Result<MeshHandle, AssetError>;
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError>;
}

/// Asset paths used by the game
pub mod paths {
    pub const CUBE: &str = "models/cube.obj";
    pub const SPHERE: &str = "models/sphere.obj";
    pub const PLANE: &str = "models/plane.obj";

    pub const BRICK_TEXTURE: &str = "images/brick_texture_1.png";
    pub const BRICK_DAMAGED_TEXTURE: &str = "images/brick_texture_2.png";
    pub const PADDLE_TEXTURE: &str = "images/paddle_texture.png";
    pub const BALL_TEXTURE: &str = "images/ball_texture.png";
    pub const TEXT_TEXTURE: &str = "images/black.png";
    pub const BACKGROUND_TEXTURE: &str = "images/background.png";

    /// Digit glyph mesh path
    pub fn digit(d: usize) -> String {
        format!("models/numbers/{}.obj", d)
    }
}

/// Hands out one handle per distinct path, no I/O
#[derive(Debug, Default)]
pub struct MemoryAssets {
    meshes: HashMap<String, MeshHandle>,
    textures: HashMap<String, TextureHandle>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Path a mesh handle was loaded from
    pub fn mesh_path(&self, handle: MeshHandle) -> Option<&str> {
        self.meshes
            .iter()
            .find(|(_, h)| **h == handle)
            .map(|(path, _)| path.as_str())
    }
}

impl AssetLoader for MemoryAssets {
    fn load_mesh(&mut self, path: &str) -> Result<MeshHandle, AssetError> {
        let next = MeshHandle(self.meshes.len() as u32);
        Ok(*self.meshes.entry(path.to_string()).or_insert(next))
    }

    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError> {
        let next = TextureHandle(self.textures.len() as u32);
        Ok(*self.textures.entry(path.to_string()).or_insert(next))
    }
}

/// Reads assets from disk under `root`
///
/// Meshes are parsed and cached by path; textures only need to exist.
#[derive(Debug)]
pub struct FsAssets {
    root: PathBuf,
    meshes: Vec<ObjMesh>,
    mesh_index: HashMap<String, MeshHandle>,
    textures: HashMap<String, TextureHandle>,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            meshes: Vec::new(),
            mesh_index: HashMap::new(),
            textures: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parsed geometry for a handle
    pub fn mesh(&self, handle: MeshHandle) -> Option<&ObjMesh> {
        self.meshes.get(handle.0 as usize)
    }
}

impl AssetLoader for FsAssets {
    fn load_mesh(&mut self, path: &str) -> Result<MeshHandle, AssetError> {
        if let Some(handle) = self.mesh_index.get(path) {
            return Ok(*handle);
        }

        let mesh = load_obj(self.root.join(path)).map_err(|source| AssetError::Mesh {
            path: path.to_string(),
            source,
        })?;
        log::debug!("Loaded {} ({} triangles)", path, mesh.triangle_count());

        let handle = MeshHandle(self.meshes.len() as u32);
        self.meshes.push(mesh);
        self.mesh_index.insert(path.to_string(), handle);
        Ok(handle)
    }

    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError> {
        if let Some(handle) = self.textures.get(path) {
            return Ok(*handle);
        }
        if !self.root.join(path).is_file() {
            return Err(AssetError::TextureNotFound(path.to_string()));
        }
        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.insert(path.to_string(), handle);
        Ok(handle)
    }
}
