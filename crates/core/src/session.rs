//! Game session - the engine state machine
//!
//! Orchestrates spawn -> active piece -> lock -> effects -> line clear ->
//! next spawn, owns score/level/gravity timing, and exposes the command API
//! plus `tick`. Single-writer: the driver calls `tick(now_ms)` on a fixed
//! cadence and forwards discrete commands between ticks.
//!
//! The session never reads wall clocks. `now_ms` is driver-supplied
//! monotonic milliseconds since session start; command timestamps and the
//! freeze/multiplier windows all use that clock, so identical tick/command
//! sequences replay identically.

use blocktris_types::{
    Command, LockedCell, Spin, BASE_GRAVITY_MS, BOARD_WIDTH, GRAVITY_DECAY, GRAVITY_FLOOR_MS,
    HARD_DROP_POINTS_PER_ROW, LINE_SCORES, MULTIPLIER_WINDOW_MS, PERFECT_CLEAR_BONUS,
    TIME_FREEZE_WINDOW_MS,
};

use crate::board::Board;
use crate::catalog::{PieceDef, Shape};
use crate::effects::{self, TimerEffect};
use crate::sequencer::{PieceSource, SequenceError, SimpleRng};

/// Kick offsets tried, in order, after the unkicked rotation fails
const KICK_OFFSETS: [(i8, i8); 6] = [(1, 0), (-1, 0), (0, -1), (2, 0), (-2, 0), (0, -2)];

/// The falling piece
#[derive(Debug, Clone, Copy)]
pub struct ActivePiece {
    pub def: &'static PieceDef,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
}

impl ActivePiece {
    fn spawn(def: &'static PieceDef) -> Self {
        Self {
            def,
            shape: def.shape,
            x: (BOARD_WIDTH as i8 - def.shape.size() as i8) / 2,
            y: 0,
            rotation: 0,
        }
    }

    fn material(&self) -> LockedCell {
        LockedCell {
            color: self.def.color,
            piece: self.def.id,
            effect: self.def.effect,
        }
    }

    /// Center cell of the bounding box; effects anchor here
    fn anchor(&self) -> (i8, i8) {
        let half = (self.shape.size() / 2) as i8;
        (self.x + half, self.y + half)
    }
}

/// A command that took effect, with the session clock at which it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedCommand {
    pub command: Command,
    pub at_ms: u64,
}

/// Board snapshot recorded at every lock, for replay verification
#[derive(Debug, Clone, Copy)]
pub struct KeyFrame {
    pub board: Board,
    pub score: u32,
    pub lines_cleared: u32,
    pub at_ms: u64,
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    game_id: String,
    source: PieceSource,
    board: Board,
    active: Option<ActivePiece>,
    next: &'static PieceDef,
    sequence_index: u64,
    score: u32,
    lines_cleared: u32,
    game_over: bool,
    clock_ms: u64,
    last_drop_ms: u64,
    time_freeze_until: u64,
    multiplier_until: u64,
    perfect_clears: u32,
    specials_used: u32,
    actions: Vec<LoggedCommand>,
    key_frames: Vec<KeyFrame>,
    ended_at_ms: Option<u64>,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a session deriving its sequence from the seed alone
    pub fn new(game_id: impl Into<String>, seed: u64) -> Self {
        Self::from_source(game_id.into(), PieceSource::derived(seed))
    }

    /// Create a session consuming a precomputed value sequence.
    ///
    /// Fails fast on a malformed sequence; this is the only construction
    /// error.
    pub fn with_sequence(
        game_id: impl Into<String>,
        seed: u64,
        sequence: Vec<u64>,
    ) -> Result<Self, SequenceError> {
        Ok(Self::from_source(
            game_id.into(),
            PieceSource::precomputed(seed, sequence)?,
        ))
    }

    fn from_source(game_id: String, source: PieceSource) -> Self {
        let seed = source.seed();
        let first = source.piece_at(0);
        let next = source.piece_at(1);
        let mut session = Self {
            game_id,
            source,
            board: Board::new(),
            active: None,
            next: first,
            sequence_index: 1,
            score: 0,
            lines_cleared: 0,
            game_over: false,
            clock_ms: 0,
            last_drop_ms: 0,
            time_freeze_until: 0,
            multiplier_until: 0,
            perfect_clears: 0,
            specials_used: 0,
            actions: Vec::new(),
            key_frames: Vec::new(),
            ended_at_ms: None,
            rng: SimpleRng::new(seed as u32),
        };
        // Promote the first piece to active and queue the second
        session.active = Some(ActivePiece::spawn(first));
        session.next = next;
        session.sequence_index = 2;
        session
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn source(&self) -> &PieceSource {
        &self.source
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> &'static PieceDef {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Displayed level, minimum 1; advances every 10 cleared lines
    pub fn level(&self) -> u32 {
        self.level_index() + 1
    }

    fn level_index(&self) -> u32 {
        self.lines_cleared / 10
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn perfect_clears(&self) -> u32 {
        self.perfect_clears
    }

    pub fn specials_used(&self) -> u32 {
        self.specials_used
    }

    pub fn actions(&self) -> &[LoggedCommand] {
        &self.actions
    }

    pub fn key_frames(&self) -> &[KeyFrame] {
        &self.key_frames
    }

    /// Session clock of the game-over transition, if it happened
    pub fn ended_at_ms(&self) -> Option<u64> {
        self.ended_at_ms
    }

    /// Elapsed session time; frozen at the game-over clock once terminal
    pub fn duration_ms(&self) -> u64 {
        self.ended_at_ms.unwrap_or(self.clock_ms)
    }

    /// Gravity interval for the current level:
    /// `max(100, 1000 * 0.95^level_index)` ms, monotonically decreasing
    pub fn gravity_interval_ms(&self) -> u64 {
        let interval = BASE_GRAVITY_MS as f64 * GRAVITY_DECAY.powi(self.level_index() as i32);
        (interval as u64).max(GRAVITY_FLOOR_MS)
    }

    fn time_freeze_active(&self) -> bool {
        self.clock_ms < self.time_freeze_until
    }

    fn multiplier_active(&self) -> bool {
        self.clock_ms < self.multiplier_until
    }

    /// Lowest valid y for the active piece at its current x/shape
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active.as_ref()?;
        let mut y = piece.y;
        while self.board.can_place(&piece.shape, piece.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Apply a discrete command. Rejected commands are silent no-ops
    /// returning false; every command is a no-op once the game is over.
    pub fn handle(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }
        let applied = match command {
            Command::Left => self.try_move(-1, 0),
            Command::Right => self.try_move(1, 0),
            Command::Down => self.soft_drop(),
            Command::RotateCw => self.try_rotate(Spin::Cw),
            Command::RotateCcw => self.try_rotate(Spin::Ccw),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
        };
        if applied {
            self.actions.push(LoggedCommand {
                command,
                at_ms: self.clock_ms,
            });
        }
        applied
    }

    /// Try to move the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if self.board.can_place(&piece.shape, piece.x + dx, piece.y + dy) {
            self.active = Some(ActivePiece {
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
            return true;
        }
        false
    }

    /// Try to rotate the active piece, attempting the unkicked position
    /// first and then each kick offset in order. Shape and position update
    /// atomically on the first valid candidate.
    pub fn try_rotate(&mut self, spin: Spin) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let rotated = match spin {
            Spin::Cw => piece.shape.rotate_cw(),
            Spin::Ccw => piece.shape.rotate_ccw(),
        };
        let step: i8 = match spin {
            Spin::Cw => 1,
            Spin::Ccw => -1,
        };

        if self.board.can_place(&rotated, piece.x, piece.y) {
            self.active = Some(ActivePiece {
                shape: rotated,
                rotation: ((piece.rotation as i8 + step).rem_euclid(4)) as u8,
                ..piece
            });
            return true;
        }

        for (kx, ky) in KICK_OFFSETS {
            if self.board.can_place(&rotated, piece.x + kx, piece.y + ky) {
                self.active = Some(ActivePiece {
                    shape: rotated,
                    x: piece.x + kx,
                    y: piece.y + ky,
                    rotation: ((piece.rotation as i8 + step).rem_euclid(4)) as u8,
                    ..piece
                });
                return true;
            }
        }
        false
    }

    /// Advance one row; locks the piece when it cannot descend
    pub fn soft_drop(&mut self) -> bool {
        if self.try_move(0, 1) {
            true
        } else {
            self.lock();
            false
        }
    }

    /// Drop to rest, award +2 per row descended, and lock unconditionally.
    /// Returns the number of rows descended (0 for a grounded piece).
    pub fn hard_drop(&mut self) -> u32 {
        let Some(piece) = self.active else {
            return 0;
        };
        let mut distance: i8 = 0;
        while self
            .board
            .can_place(&piece.shape, piece.x, piece.y + distance + 1)
        {
            distance += 1;
        }
        if distance > 0 {
            self.active = Some(ActivePiece {
                y: piece.y + distance,
                ..piece
            });
        }
        self.score = self
            .score
            .saturating_add(distance as u32 * HARD_DROP_POINTS_PER_ROW);
        self.lock();
        distance as u32
    }

    /// Write the active piece into the board, run its effect, clear lines,
    /// score, and spawn the successor
    fn lock(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        // Only a window opened by previous pieces doubles this lock's
        // scores; a freshly locked Multiplier affects later locks
        let doubled = self.multiplier_active();

        let mut board = self
            .board
            .place(&piece.shape, piece.x, piece.y, piece.material());

        if let Some(effect) = piece.def.effect {
            let (ax, ay) = piece.anchor();
            let outcome = effects::apply(&board, effect, ax, ay, &mut self.rng);
            board = outcome.board;
            let bonus = if doubled {
                outcome.bonus.saturating_mul(2)
            } else {
                outcome.bonus
            };
            self.score = self.score.saturating_add(bonus);
            self.specials_used += 1;
            match outcome.timer {
                Some(TimerEffect::Freeze) => {
                    self.time_freeze_until = self.clock_ms + TIME_FREEZE_WINDOW_MS;
                }
                Some(TimerEffect::Multiplier) => {
                    self.multiplier_until = self.clock_ms + MULTIPLIER_WINDOW_MS;
                }
                None => {}
            }
        }

        let full = board.full_rows();
        if !full.is_empty() {
            board = board.clear_rows(&full);
            self.lines_cleared += full.len() as u32;

            let mut line_score = LINE_SCORES[full.len().min(4)] * (self.level_index() + 1);
            if board.is_empty() {
                line_score += PERFECT_CLEAR_BONUS;
                self.perfect_clears += 1;
            }
            if doubled {
                line_score = line_score.saturating_mul(2);
            }
            self.score = self.score.saturating_add(line_score);
        }

        self.board = board;
        self.key_frames.push(KeyFrame {
            board,
            score: self.score,
            lines_cleared: self.lines_cleared,
            at_ms: self.clock_ms,
        });

        if board.top_row_occupied() {
            self.end_game();
        } else {
            self.spawn();
        }
    }

    /// Promote the pending next piece and draw a new one. An invalid
    /// initial position is the terminal transition.
    fn spawn(&mut self) {
        let piece = ActivePiece::spawn(self.next);
        self.next = self.source.piece_at(self.sequence_index);
        self.sequence_index += 1;

        let blocked = !self.board.can_place(&piece.shape, piece.x, piece.y);
        self.active = Some(piece);
        if blocked {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        if !self.game_over {
            self.game_over = true;
            self.ended_at_ms = Some(self.clock_ms);
        }
    }

    /// Advance the session clock and apply one gravity descent if the
    /// elapsed interval demands it. The interval doubles while a
    /// time-freeze window is active.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.game_over {
            return false;
        }
        self.clock_ms = self.clock_ms.max(now_ms);

        let mut interval = self.gravity_interval_ms();
        if self.time_freeze_active() {
            interval *= 2;
        }

        if self.clock_ms.saturating_sub(self.last_drop_ms) > interval {
            self.last_drop_ms = self.clock_ms;
            self.soft_drop();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocktris_types::SpecialEffect;

    // Seed 17: (17 + 0) % 100 = 17 -> standard[3] = O, then 18 -> standard[4] = S
    const O_FIRST_SEED: u64 = 17;

    fn filler(color: u8) -> LockedCell {
        LockedCell {
            color,
            piece: color,
            effect: None,
        }
    }

    #[test]
    fn test_new_session_spawns_first_two_pieces() {
        let session = GameSession::new("g", 42);
        // (42+0)%100 = 42 -> I, (42+1)%100 = 43 -> J
        assert_eq!(session.active().unwrap().def.name, "I");
        assert_eq!(session.next_piece().name, "J");
        assert!(!session.game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn test_spawn_position_is_centered() {
        let session = GameSession::new("g", O_FIRST_SEED);
        let piece = session.active().unwrap();
        assert_eq!(piece.def.name, "O");
        assert_eq!(piece.x, 4);
        assert_eq!(piece.y, 0);
    }

    #[test]
    fn test_move_bounds() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        // O spawns at x=4; 4 moves to the wall, further moves rejected
        for _ in 0..4 {
            assert!(session.handle(Command::Left));
        }
        assert!(!session.handle(Command::Left));
        assert_eq!(session.active().unwrap().x, 0);

        for _ in 0..8 {
            assert!(session.handle(Command::Right));
        }
        assert!(!session.handle(Command::Right));
        // Right edge: x = width - shape width
        assert_eq!(session.active().unwrap().x, 8);
    }

    #[test]
    fn test_o_piece_hard_drop_scenario() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        assert!(session.handle(Command::HardDrop));
        // 18 rows descended at +2 each
        assert_eq!(session.score(), 36);
        // Resting position recorded in the keyframe
        let frame = &session.key_frames()[0];
        assert!(frame.board.is_occupied(4, 18));
        assert!(frame.board.is_occupied(5, 18));
        assert!(frame.board.is_occupied(4, 19));
        assert!(frame.board.is_occupied(5, 19));
    }

    #[test]
    fn test_hard_drop_on_grounded_piece_advances_zero_and_locks() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        // Walk the O piece to the floor manually
        while session.try_move(0, 1) {}
        let score_before = session.score();
        let distance = session.hard_drop();
        assert_eq!(distance, 0);
        assert_eq!(session.score(), score_before);
        // Piece locked: a fresh piece is active and the floor is occupied
        assert!(session.board().is_occupied(4, 19));
    }

    #[test]
    fn test_rotation_updates_rotation_state() {
        // Seed 42 spawns an I piece
        let mut session = GameSession::new("g", 42);
        assert!(session.handle(Command::RotateCw));
        assert_eq!(session.active().unwrap().rotation, 1);
        assert!(session.handle(Command::RotateCcw));
        assert_eq!(session.active().unwrap().rotation, 0);
    }

    #[test]
    fn test_rotation_kick_at_wall() {
        let mut session = GameSession::new("g", 42);
        // Vertical I against the left wall
        assert!(session.handle(Command::RotateCw));
        while session.try_move(-1, 0) {}
        // Rotating back to horizontal needs a kick; it must either succeed
        // with an in-bounds position or fail with no state change
        let before = (session.active().unwrap().x, session.active().unwrap().y);
        let rotated = session.handle(Command::RotateCcw);
        let piece = session.active().unwrap();
        if rotated {
            assert!(session.board().can_place(&piece.shape, piece.x, piece.y));
        } else {
            assert_eq!((piece.x, piece.y), before);
        }
    }

    #[test]
    fn test_soft_drop_advances_and_locks() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        assert!(session.handle(Command::Down));
        assert_eq!(session.active().unwrap().y, 1);
        // Down to the floor, then one more locks
        while session.try_move(0, 1) {}
        assert!(!session.soft_drop());
        assert!(!session.board().is_empty());
    }

    #[test]
    fn test_ghost_y_tracks_column() {
        let session = GameSession::new("g", O_FIRST_SEED);
        assert_eq!(session.ghost_y(), Some(18));
    }

    #[test]
    fn test_line_clear_scoring() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        // Fill the bottom two rows except the O column pair at x=4,5, plus
        // a stray cell higher up so the clear is not perfect
        for y in [18i8, 19] {
            for x in 0..10i8 {
                if x != 4 && x != 5 {
                    session.board = session.board.with_cell(x, y, Some(filler(0)));
                }
            }
        }
        session.board = session.board.with_cell(0, 10, Some(filler(9)));
        session.handle(Command::HardDrop);
        assert_eq!(session.lines_cleared(), 2);
        // 36 hard drop + 300 double-line at level index 0
        assert_eq!(session.score(), 36 + 300);
    }

    #[test]
    fn test_perfect_clear_bonus() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        for y in [18i8, 19] {
            for x in 0..10i8 {
                if x != 4 && x != 5 {
                    session.board = session.board.with_cell(x, y, Some(filler(0)));
                }
            }
        }
        session.handle(Command::HardDrop);
        assert!(session.board().is_empty());
        assert_eq!(session.perfect_clears(), 1);
        assert_eq!(session.score(), 36 + 300 + 1500);
    }

    #[test]
    fn test_level_progression_and_gravity() {
        let mut session = GameSession::new("g", 42);
        assert_eq!(session.level(), 1);
        assert_eq!(session.gravity_interval_ms(), 1000);

        session.lines_cleared = 10;
        assert_eq!(session.level(), 2);
        assert_eq!(session.gravity_interval_ms(), 950);

        // Gravity floors at 100ms
        session.lines_cleared = 1000;
        assert_eq!(session.gravity_interval_ms(), 100);
    }

    #[test]
    fn test_tick_applies_gravity() {
        let mut session = GameSession::new("g", 42);
        assert!(!session.tick(500));
        assert_eq!(session.active().unwrap().y, 0);
        assert!(session.tick(1001));
        assert_eq!(session.active().unwrap().y, 1);
        // Next descent waits for another interval
        assert!(!session.tick(1500));
        assert!(session.tick(2002));
        assert_eq!(session.active().unwrap().y, 2);
    }

    #[test]
    fn test_time_freeze_doubles_interval() {
        let mut session = GameSession::new("g", 42);
        session.time_freeze_until = 60_000;
        session.tick(1);
        assert_eq!(session.active().unwrap().y, 0);
        // 1001ms would normally drop; frozen interval is 2000ms
        assert!(!session.tick(1001));
        assert!(session.tick(2001));
        assert_eq!(session.active().unwrap().y, 1);
    }

    #[test]
    fn test_multiplier_doubles_line_score() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        session.multiplier_until = 60_000;
        for y in [18i8, 19] {
            for x in 0..10i8 {
                if x != 4 && x != 5 {
                    session.board = session.board.with_cell(x, y, Some(filler(0)));
                }
            }
        }
        session.handle(Command::HardDrop);
        // Hard drop bonus is not doubled; line + perfect clear are
        assert_eq!(session.score(), 36 + (300 + 1500) * 2);
    }

    #[test]
    fn test_fresh_multiplier_does_not_double_its_own_line_clear() {
        let mut session = GameSession::new("g", 42);
        // Bottom row filled except where the Multiplier's wide row lands
        for x in 3..10i8 {
            session.board = session.board.with_cell(x, 19, Some(filler(0)));
        }
        let multiplier = &crate::catalog::special_pieces()[5];
        assert_eq!(multiplier.effect, Some(SpecialEffect::Multiplier));
        session.active = Some(ActivePiece {
            x: 0,
            ..ActivePiece::spawn(multiplier)
        });

        session.handle(Command::HardDrop);
        // 17 rows descended, +50 effect bonus, single line at level 1.
        // Neither the bonus nor the line score is doubled by the window
        // this very lock opened.
        assert_eq!(session.score(), 17 * 2 + 50 + 100);
        // The window is open for subsequent locks
        assert_eq!(session.multiplier_until, MULTIPLIER_WINDOW_MS);
    }

    #[test]
    fn test_explosion_lock_applies_effect() {
        // Force an Explosion piece into the active slot
        let mut session = GameSession::new("g", 42);
        let explosion = &crate::catalog::special_pieces()[0];
        assert_eq!(explosion.effect, Some(SpecialEffect::Explosion));
        session.active = Some(ActivePiece::spawn(explosion));
        session.handle(Command::HardDrop);
        assert_eq!(session.specials_used(), 1);
        // The explosion cleared its own 3x3 center; bonus was awarded
        assert!(session.score() > 0);
    }

    #[test]
    fn test_timer_effect_opens_window() {
        let mut session = GameSession::new("g", 42);
        let freeze = &crate::catalog::special_pieces()[4];
        assert_eq!(freeze.effect, Some(SpecialEffect::TimeFreeze));
        session.clock_ms = 5_000;
        session.active = Some(ActivePiece::spawn(freeze));
        // 3x3 diamond rests with its lowest row on the floor: 17 rows down
        let distance = session.hard_drop();
        assert_eq!(distance, 17);
        assert_eq!(session.time_freeze_until, 5_000 + TIME_FREEZE_WINDOW_MS);
        assert_eq!(session.score(), 17 * 2 + 75);
    }

    #[test]
    fn test_game_over_on_blocked_spawn() {
        let mut session = GameSession::new("g", 42);
        // Occupy the spawn rows across the middle columns
        for x in 2..8i8 {
            for y in 0..2i8 {
                session.board = session.board.with_cell(x, y, Some(filler(0)));
            }
        }
        session.spawn();
        assert!(session.game_over());
        assert!(!session.handle(Command::Left));
        assert!(!session.handle(Command::HardDrop));
        assert!(!session.tick(10_000));
    }

    #[test]
    fn test_game_over_on_top_row_after_lock() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        // A column of filler right where the O will land, reaching row 1
        for y in 2..20i8 {
            session.board = session.board.with_cell(4, y, Some(filler(0)));
            session.board = session.board.with_cell(5, y, Some(filler(0)));
        }
        session.handle(Command::HardDrop);
        assert!(session.game_over());
        assert!(session.ended_at_ms().is_some());
    }

    #[test]
    fn test_actions_log_successful_commands_only() {
        let mut session = GameSession::new("g", O_FIRST_SEED);
        session.clock_ms = 123;
        assert!(session.handle(Command::Left));
        for _ in 0..3 {
            session.handle(Command::Left);
        }
        // Spawn x=4: exactly 4 lefts succeed
        assert!(!session.handle(Command::Left));
        assert_eq!(session.actions().len(), 4);
        assert!(session
            .actions()
            .iter()
            .all(|a| a.command == Command::Left && a.at_ms == 123));
    }

    #[test]
    fn test_keyframe_recorded_per_lock() {
        let mut session = GameSession::new("g", 42);
        assert!(session.key_frames().is_empty());
        session.handle(Command::HardDrop);
        assert_eq!(session.key_frames().len(), 1);
        session.handle(Command::HardDrop);
        assert_eq!(session.key_frames().len(), 2);
    }

    #[test]
    fn test_identical_sessions_replay_identically() {
        let script = [
            Command::Left,
            Command::RotateCw,
            Command::Right,
            Command::HardDrop,
            Command::Down,
            Command::HardDrop,
        ];
        let mut a = GameSession::new("g", 7);
        let mut b = GameSession::new("g", 7);
        for (i, cmd) in script.iter().enumerate() {
            a.tick((i as u64 + 1) * 400);
            b.tick((i as u64 + 1) * 400);
            a.handle(*cmd);
            b.handle(*cmd);
        }
        assert_eq!(a.score(), b.score());
        assert_eq!(a.board(), b.board());
        assert_eq!(a.lines_cleared(), b.lines_cleared());
    }
}
