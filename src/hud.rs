//! Score and lives display built from digit glyph meshes

use crate::assets::{AssetError, AssetLoader, MeshHandle, paths};

/// One pre-loaded mesh per numeral, indexed by digit
#[derive(Debug, Clone, Copy)]
pub struct DigitMeshes([MeshHandle; 10]);

impl DigitMeshes {
    pub fn load(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let mut meshes = [MeshHandle(0); 10];
        for (digit, slot) in meshes.iter_mut().enumerate() {
            *slot = assets.load_mesh(&paths::digit(digit))?;
        }
        Ok(Self(meshes))
    }

    /// Mesh for the last decimal digit of `value`
    pub fn digit(&self, value: u32) -> MeshHandle {
        self.0[(value % 10) as usize]
    }
}

/// Meshes currently shown for score (two digits) and lives (one digit)
#[derive(Debug, Clone)]
pub struct Hud {
    digits: DigitMeshes,
    pub score_ones: MeshHandle,
    pub score_tens: MeshHandle,
    pub lives: MeshHandle,
}

impl Hud {
    pub fn new(digits: DigitMeshes, score: u32, lives: u32) -> Self {
        let mut hud = Self {
            digits,
            score_ones: digits.digit(0),
            score_tens: digits.digit(0),
            lives: digits.digit(0),
        };
        hud.set_score(score);
        hud.set_lives(lives);
        hud
    }

    pub fn set_score(&mut self, score: u32) {
        self.score_ones = self.digits.digit(score % 10);
        self.score_tens = self.digits.digit(score / 10);
    }

    pub fn set_lives(&mut self, lives: u32) {
        self.lives = self.digits.digit(lives);
    }
}
