//! Gameplay state and the per-frame transform: player physics, pipe
//! lifecycle, decorations and the Active/Over session machine. The
//! module owns no clock and no RNG; the orchestrator passes in
//! monotonic milliseconds and a generator, which keeps every rule here
//! deterministic under test.

use rand::Rng;

use crate::config::*;
use crate::theme::Theme;

// ── Geometry ────────────────────────────────────────────────────────────────

/// Axis-aligned box in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Strict overlap: boxes that merely share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Player ──────────────────────────────────────────────────────────────────

/// The player avatar. X never changes; gravity and flaps act on y only.
#[derive(Clone, Debug)]
pub struct Player {
    pub y: f64,
    pub vel: f64,
    pub w: f64,
    pub h: f64,
    /// Frames until the fin/ear sprite flips. Cosmetic.
    fin_timer: u32,
    pub fin_up: bool,
}

impl Player {
    pub fn new(size: (f64, f64)) -> Self {
        Player {
            y: HEIGHT / 2.0,
            vel: 0.0,
            w: size.0,
            h: size.1,
            fin_timer: 0,
            fin_up: false,
        }
    }

    /// One frame of physics: accelerate, integrate, clamp at the top.
    /// The ceiling is survivable; it zeroes the velocity and the
    /// session goes on.
    pub fn update(&mut self) {
        self.vel += GRAVITY;
        self.y += self.vel;
        if self.y <= 0.0 {
            self.y = 0.0;
            self.vel = 0.0;
        }
        self.fin_timer += 1;
        if self.fin_timer > 10 {
            self.fin_up = !self.fin_up;
            self.fin_timer = 0;
        }
    }

    /// Overwrites the velocity with the flap impulse, whatever the
    /// current motion is. No cooldown, no stacking.
    pub fn flap(&mut self) {
        self.vel = FLAP_STRENGTH;
        self.fin_up = !self.fin_up;
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: PLAYER_X,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
}

// ── Pipes ───────────────────────────────────────────────────────────────────

/// A pipe pair: two vertical bars spanning the full field except for a
/// fixed gap starting at `gap_top`.
#[derive(Clone, Debug)]
pub struct Pipe {
    pub x: f64,
    pub gap_top: f64,
    /// Set once the player has moved past this pipe; guards the score
    /// from double-counting.
    pub passed: bool,
}

impl Pipe {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Pipe {
            x: WIDTH,
            gap_top: rng.gen_range(GAP_TOP_MIN..=GAP_TOP_MAX),
            passed: false,
        }
    }

    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    pub fn top_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            w: PIPE_WIDTH,
            h: self.gap_top,
        }
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.gap_top + PIPE_GAP,
            w: PIPE_WIDTH,
            h: HEIGHT - self.gap_top - PIPE_GAP,
        }
    }

    pub fn hits(&self, body: &Rect) -> bool {
        body.overlaps(&self.top_rect()) || body.overlaps(&self.bottom_rect())
    }

    /// Fully past the left edge, width included.
    pub fn off_screen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }
}

// ── Decorations ─────────────────────────────────────────────────────────────

/// Drifting background cloud. Never interacts with gameplay.
#[derive(Clone, Debug)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub speed: f64,
}

impl Cloud {
    pub fn drift(rng: &mut impl Rng) -> Self {
        Cloud {
            x: WIDTH + rng.gen_range(10.0..100.0),
            y: rng.gen_range(50.0..200.0),
            w: rng.gen_range(60.0..120.0),
            h: rng.gen_range(30.0..50.0),
            speed: rng.gen_range(0.5..1.5),
        }
    }

    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    pub fn gone(&self) -> bool {
        self.x + self.w < 0.0
    }
}

/// Phase of the animated water line. The wave rides on the same
/// constant as the loss boundary, so what the player sees is what
/// kills them.
#[derive(Clone, Debug, Default)]
pub struct Water {
    pub phase: f64,
}

impl Water {
    pub fn tick(&mut self) {
        self.phase += WAVE_PHASE_STEP;
        if self.phase > WAVE_PHASE_WRAP {
            self.phase = 0.0;
        }
    }

    /// Surface polyline sampled left to right, one point every
    /// [`WAVE_SAMPLE_STEP`] pixels, slightly past the right edge.
    pub fn surface_points(&self) -> Vec<(f64, f64)> {
        let mut pts = Vec::new();
        let mut x = 0.0;
        while x <= WIDTH + WAVE_SAMPLE_STEP {
            let y = SHORE_Y + (x / WAVE_LENGTH + self.phase).sin() * WAVE_AMPLITUDE;
            pts.push((x, y));
            x += WAVE_SAMPLE_STEP;
        }
        pts
    }
}

// ── Session ─────────────────────────────────────────────────────────────────

/// One run of the game, replaced wholesale on restart. `active` is the
/// whole state machine: true while playing, false once the player hit
/// something, until the next restart builds a fresh value.
#[derive(Clone, Debug)]
pub struct Game {
    pub player: Player,
    /// In spawn order, which is also left-to-right on screen.
    pub pipes: Vec<Pipe>,
    pub clouds: Vec<Cloud>,
    pub water: Water,
    pub score: u32,
    pub active: bool,
    pub last_pipe_ms: u64,
    pub last_cloud_ms: u64,
    clouds_on: bool,
    waves_on: bool,
}

impl Game {
    pub fn new(theme: &Theme, now_ms: u64, rng: &mut impl Rng) -> Self {
        let clouds_on = theme.clouds;
        let mut clouds = Vec::new();
        if clouds_on {
            for _ in 0..INITIAL_CLOUDS {
                clouds.push(Cloud::drift(rng));
            }
        }
        Game {
            player: Player::new(theme.player_size),
            pipes: Vec::new(),
            clouds,
            water: Water::default(),
            score: 0,
            active: true,
            last_pipe_ms: now_ms,
            last_cloud_ms: now_ms,
            clouds_on,
            waves_on: theme.shore == crate::theme::ShoreStyle::Water,
        }
    }

    /// Flap input. Meaningful only while active; the orchestrator turns
    /// the same key into a restart once the session is over.
    pub fn flap(&mut self) {
        if self.active {
            self.player.flap();
        }
    }

    /// Advances the world by one frame. Order matters and is fixed:
    /// player physics, decorations, pipe spawning, then each pipe
    /// advances, collides and pass-checks in turn, then pruning, then
    /// the shore check. A collision mid-loop still lets the remaining
    /// pipes move and score this frame; the freeze starts on the next
    /// call.
    pub fn update(&mut self, now_ms: u64, rng: &mut impl Rng) {
        if !self.active {
            return;
        }

        self.player.update();

        if self.waves_on {
            self.water.tick();
        }
        if self.clouds_on {
            if now_ms.saturating_sub(self.last_cloud_ms) > CLOUD_CHECK_MS {
                if rng.gen_bool(CLOUD_CHANCE) {
                    self.clouds.push(Cloud::drift(rng));
                }
                self.last_cloud_ms = now_ms;
            }
            for cloud in &mut self.clouds {
                cloud.advance();
            }
            self.clouds.retain(|c| !c.gone());
        }

        if now_ms.saturating_sub(self.last_pipe_ms) > PIPE_SPAWN_MS {
            self.pipes.push(Pipe::spawn(rng));
            self.last_pipe_ms = now_ms;
        }

        let body = self.player.rect();
        for pipe in &mut self.pipes {
            pipe.advance();
            if pipe.hits(&body) {
                self.active = false;
            }
            if !pipe.passed && pipe.x < PLAYER_X {
                pipe.passed = true;
                self.score += 1;
            }
        }
        self.pipes.retain(|p| !p.off_screen());

        if self.player.y + self.player.h >= SHORE_Y {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn fresh(theme: &Theme) -> Game {
        Game::new(theme, 0, &mut rng())
    }

    /// A pipe whose gap brackets the player's starting row, so physics
    /// tests can run without accidental collisions.
    fn harmless_pipe(x: f64) -> Pipe {
        Pipe {
            x,
            gap_top: 250.0,
            passed: false,
        }
    }

    #[test]
    fn test_flap_overwrites_velocity_in_both_directions() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        game.player.vel = 12.5;
        game.flap();
        assert_eq!(game.player.vel, FLAP_STRENGTH);
        game.player.vel = -3.0;
        game.flap();
        assert_eq!(game.player.vel, FLAP_STRENGTH);
    }

    #[test]
    fn test_one_frame_of_gravity() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        let y0 = game.player.y;
        game.update(0, &mut rng());
        assert_eq!(game.player.vel, GRAVITY);
        assert_eq!(game.player.y, y0 + GRAVITY);
    }

    #[test]
    fn test_ceiling_clamp_is_survivable() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        game.player.y = 2.0;
        game.player.vel = -7.0;
        game.update(0, &mut rng());
        assert_eq!(game.player.y, 0.0);
        assert_eq!(game.player.vel, 0.0);
        assert!(game.active);
    }

    #[test]
    fn test_shore_contact_ends_the_session() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        game.player.y = SHORE_Y - game.player.h - 0.1;
        game.player.vel = 1.0;
        game.update(0, &mut rng());
        assert!(!game.active);
    }

    #[test]
    fn test_pass_scores_exactly_once() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        game.pipes.push(harmless_pipe(PLAYER_X + 1.0));
        game.update(0, &mut rng());
        assert_eq!(game.score, 1);
        assert!(game.pipes[0].passed);
        for _ in 0..5 {
            game.update(0, &mut rng());
        }
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_collision_with_bottom_bar_ends_the_session() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        // Gap well above the player: the bottom bar covers the player's row.
        game.pipes.push(Pipe {
            x: PLAYER_X + PIPE_SPEED,
            gap_top: 100.0,
            passed: false,
        });
        game.update(0, &mut rng());
        assert!(!game.active);
    }

    #[test]
    fn test_collision_mid_loop_still_moves_later_pipes_this_frame() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        game.pipes.push(Pipe {
            x: PLAYER_X,
            gap_top: 100.0,
            passed: false,
        });
        let far = harmless_pipe(300.0);
        game.pipes.push(far.clone());
        game.update(0, &mut rng());
        assert!(!game.active);
        assert_eq!(game.pipes[1].x, far.x - PIPE_SPEED);
    }

    #[test]
    fn test_frozen_once_over() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        game.active = false;
        game.pipes.push(harmless_pipe(200.0));
        let y = game.player.y;
        game.update(60_000, &mut rng());
        assert_eq!(game.player.y, y);
        assert_eq!(game.pipes[0].x, 200.0);
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_prune_keeps_credited_score() {
        let theme = Theme::mouse();
        let mut game = fresh(&theme);
        game.pipes.push(Pipe {
            x: -PIPE_WIDTH + 1.0,
            gap_top: 250.0,
            passed: true,
        });
        game.score = 4;
        game.update(0, &mut rng());
        assert!(game.pipes.is_empty());
        assert_eq!(game.score, 4);
    }

    #[test]
    fn test_spawned_gaps_stay_in_range_and_sum_to_full_height() {
        let mut r = rng();
        for _ in 0..200 {
            let pipe = Pipe::spawn(&mut r);
            assert!(pipe.gap_top >= GAP_TOP_MIN && pipe.gap_top <= GAP_TOP_MAX);
            let total = pipe.top_rect().h + PIPE_GAP + pipe.bottom_rect().h;
            assert!((total - HEIGHT).abs() < 1e-9);
        }
    }

    #[test]
    fn test_clouds_only_for_cloudy_themes() {
        assert_eq!(fresh(&Theme::fish()).clouds.len(), INITIAL_CLOUDS);
        assert!(fresh(&Theme::mouse()).clouds.is_empty());
    }

    #[test]
    fn test_water_phase_wraps() {
        let mut water = Water::default();
        for _ in 0..150 {
            water.tick();
            assert!(water.phase <= WAVE_PHASE_WRAP);
        }
    }

    #[test]
    fn test_wave_points_hug_the_shore_line() {
        let water = Water { phase: 3.3 };
        let pts = water.surface_points();
        assert!(!pts.is_empty());
        assert_eq!(pts[0].0, 0.0);
        for (_, y) in pts {
            assert!((y - SHORE_Y).abs() <= WAVE_AMPLITUDE);
        }
    }
}
