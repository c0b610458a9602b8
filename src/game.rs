//! Frame loop
//!
//! Owns the simulation state, the camera and everything needed to draw it.
//! Each frame: poll events, measure dt, read held keys, advance the
//! simulation, refresh the HUD from tick events, draw, present.

use glam::{Vec2, Vec3};

use crate::assets::{AssetError, AssetLoader, MeshHandle, paths};
use crate::camera::Camera;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::hud::{DigitMeshes, Hud};
use crate::platform::{Key, Platform, WindowEvent};
use crate::renderer::{CLEAR_COLOR, Material, Renderer, SceneLighting, Uniform, uniforms};
use crate::settings::Settings;
use crate::sim::{BrickHealth, GameEvent, GameOutcome, GamePhase, GameState, TickInput, tick};
use crate::transform::Transform;

/// Why `Game::run` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished(GameOutcome),
    /// Window closed before the game ended
    Closed,
}

/// Meshes, materials and fixed transforms of the scene
#[derive(Debug, Clone)]
struct Scene {
    brick_mesh: MeshHandle,
    ball_mesh: MeshHandle,
    paddle_mesh: MeshHandle,
    background_mesh: MeshHandle,

    brick_material: Material,
    ball_material: Material,
    paddle_material: Material,
    text_material: Material,
    background_material: Material,

    brick_scale: Vec3,
    ball_scale: Vec3,
    paddle_scale: Vec3,
    score_ones: Transform,
    score_tens: Transform,
    lives: Transform,
    background: Transform,
}

impl Scene {
    fn load(assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let brick = assets.load_texture(paths::BRICK_TEXTURE)?;
        let brick_damaged = assets.load_texture(paths::BRICK_DAMAGED_TEXTURE)?;
        let ball = assets.load_texture(paths::BALL_TEXTURE)?;
        let paddle = assets.load_texture(paths::PADDLE_TEXTURE)?;
        let text = assets.load_texture(paths::TEXT_TEXTURE)?;
        let background = assets.load_texture(paths::BACKGROUND_TEXTURE)?;

        let glyph = Transform::new()
            .with_scale(0.5, 0.5, 0.5)
            .with_rotation(90.0, 0.0, 0.0);

        Ok(Self {
            brick_mesh: assets.load_mesh(paths::CUBE)?,
            ball_mesh: assets.load_mesh(paths::SPHERE)?,
            paddle_mesh: assets.load_mesh(paths::CUBE)?,
            background_mesh: assets.load_mesh(paths::PLANE)?,

            brick_material: Material::pair(brick, brick_damaged),
            ball_material: Material::single(ball),
            paddle_material: Material::single(paddle),
            text_material: Material::single(text),
            background_material: Material::single(background),

            brick_scale: Vec3::new(0.2, 0.1, 0.1),
            ball_scale: Vec3::splat(0.1),
            paddle_scale: Vec3::new(0.5, 0.1, 0.1),
            score_ones: glyph.with_position(2.5, 2.0, 0.0),
            score_tens: glyph.with_position(2.3, 2.0, 0.0),
            lives: glyph.with_position(-2.5, 2.0, 0.0),
            background: Transform::new()
                .with_scale(3.0, 3.0, 3.0)
                .with_rotation(90.0, 0.0, 0.0),
        })
    }
}

fn entity_transform(pos: Vec2, scale: Vec3) -> Transform {
    Transform {
        position: pos.extend(0.0),
        scale,
        ..Default::default()
    }
}

pub struct Game {
    pub state: GameState,
    pub camera: Camera,
    hud: Hud,
    scene: Scene,
    lighting: SceneLighting,
    fixed_timestep: bool,
    accumulator: f32,
    /// Let the paddle follow the ball instead of reading keys
    pub autopilot: bool,
}

impl Game {
    pub fn new(settings: &Settings, assets: &mut dyn AssetLoader) -> Result<Self, AssetError> {
        let state = GameState::new(settings);
        let digits = DigitMeshes::load(assets)?;
        let hud = Hud::new(digits, state.score, state.lives);
        let scene = Scene::load(assets)?;

        log::info!(
            "Game initialized: {} bricks, {} lives",
            state.brick_count(),
            state.lives
        );

        Ok(Self {
            state,
            camera: Camera::new(settings.aspect_ratio()),
            hud,
            scene,
            lighting: SceneLighting::default(),
            fixed_timestep: settings.fixed_timestep,
            accumulator: 0.0,
            autopilot: false,
        })
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Upload scene-wide uniforms that don't change per frame
    pub fn init_renderer<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        self.lighting.upload(renderer);
    }

    /// React to a window event. Resizes reach both the renderer and camera.
    pub fn handle_event<R: Renderer + ?Sized>(&mut self, event: &WindowEvent, renderer: &mut R) {
        match *event {
            WindowEvent::Resized(width, height) => {
                renderer.set_viewport(width, height);
                self.camera.resize(width, height);
            }
            WindowEvent::CloseRequested => log::info!("Close requested"),
        }
    }

    /// Held-key state for this frame
    pub fn read_input<P: Platform + ?Sized>(&self, platform: &P) -> TickInput {
        TickInput {
            left: platform.is_key_down(Key::A) || platform.is_key_down(Key::Left),
            right: platform.is_key_down(Key::D) || platform.is_key_down(Key::Right),
            autopilot: self.autopilot,
        }
    }

    /// Advance the simulation by a frame's worth of time
    pub fn update(&mut self, input: &TickInput, frame_dt: f32) {
        if self.fixed_timestep {
            self.accumulator += frame_dt.min(MAX_FRAME_DT);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Behind schedule: drop the backlog instead of replaying it
                self.accumulator = self.accumulator.min(SIM_DT * 0.5);
            }
        } else {
            tick(&mut self.state, input, frame_dt);
        }

        for event in self.state.drain_events() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::LifeLost { remaining } => self.hud.set_lives(remaining),
            GameEvent::BrickDestroyed { score, .. } => self.hud.set_score(score),
            GameEvent::BrickDamaged { .. } | GameEvent::GameOver(_) => {}
        }
    }

    /// Draw one frame (does not present)
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear(CLEAR_COLOR);
        renderer.bind_shader();
        renderer.set_uniform(uniforms::VIEW, Uniform::Mat4(self.camera.view()));
        renderer.set_uniform(uniforms::CAMERA_POS, Uniform::Vec3(self.camera.position));
        renderer.set_uniform(uniforms::DIFFUSE, Uniform::Int(0));
        renderer.set_uniform(uniforms::DIFFUSE2, Uniform::Int(1));

        let scene = &self.scene;
        for brick in self.state.bricks.iter().filter(|b| b.is_alive()) {
            let material = scene
                .brick_material
                .with_second(brick.health == BrickHealth::Damaged);
            self.draw(
                renderer,
                &material,
                scene.brick_mesh,
                &entity_transform(brick.pos, scene.brick_scale),
            );
        }

        self.draw(
            renderer,
            &scene.ball_material,
            scene.ball_mesh,
            &entity_transform(self.state.ball.pos, scene.ball_scale),
        );
        self.draw(
            renderer,
            &scene.paddle_material,
            scene.paddle_mesh,
            &entity_transform(self.state.paddle.pos, scene.paddle_scale),
        );

        self.draw(renderer, &scene.text_material, self.hud.score_ones, &scene.score_ones);
        self.draw(renderer, &scene.text_material, self.hud.score_tens, &scene.score_tens);
        self.draw(renderer, &scene.text_material, self.hud.lives, &scene.lives);

        self.draw(
            renderer,
            &scene.background_material,
            scene.background_mesh,
            &scene.background,
        );
    }

    fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        material: &Material,
        mesh: MeshHandle,
        transform: &Transform,
    ) {
        material.apply(renderer);
        let model = transform.local_transform();
        renderer.set_uniform(
            uniforms::MODEL_VIEW_PROJECTION,
            Uniform::Mat4(self.camera.view_projection() * model),
        );
        renderer.set_uniform(uniforms::MODEL, Uniform::Mat4(model));
        renderer.set_uniform(uniforms::NORMAL_MATRIX, Uniform::Mat3(transform.normal_matrix()));
        renderer.draw_mesh(mesh);
    }

    /// Run frames until the game ends or the platform closes
    pub fn run<P, R>(&mut self, platform: &mut P, renderer: &mut R) -> RunOutcome
    where
        P: Platform + ?Sized,
        R: Renderer + ?Sized,
    {
        self.init_renderer(renderer);
        let mut last_frame = platform.time();

        loop {
            if platform.should_close() || platform.is_key_down(Key::Escape) {
                log::info!(
                    "Window closed (score {}, lives {})",
                    self.state.score,
                    self.state.lives
                );
                return RunOutcome::Closed;
            }

            for event in platform.poll_events() {
                self.handle_event(&event, renderer);
            }
            let this_frame = platform.time();
            let dt = (this_frame - last_frame) as f32;
            last_frame = this_frame;

            let input = self.read_input(platform);
            self.update(&input, dt);

            if let GamePhase::GameOver(outcome) = self.state.phase {
                return RunOutcome::Finished(outcome);
            }

            self.render(renderer);
            renderer.swap_buffers();
        }
    }
}
