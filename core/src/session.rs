use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Playing (first activation)
/// - Playing -> Won
/// - Playing -> Lost
///
/// Won and Lost are terminal until the session is restarted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActivateOutcome {
    NoChange,
    /// The first activation started the round but revealed nothing, e.g. the
    /// target was flagged.
    Started,
    Revealed,
    Lost,
    Won,
}

impl ActivateOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// One player's game from first click to win or loss, plus everything that
/// outlives a single round: the best-time store, clock and mine RNG.
#[derive(Debug)]
pub struct GameSession<S, C = SystemClock> {
    difficulty: Difficulty,
    grid: Grid,
    status: GameStatus,
    revealed_count: CellCount,
    flag_count: CellCount,
    losing_cell: Option<Coord2>,
    stopwatch: Stopwatch,
    generator: RandomMineGenerator,
    best_times: S,
    clock: C,
}

impl<S: BestTimeStore> GameSession<S> {
    pub fn new(difficulty: Difficulty, seed: u64, best_times: S) -> Self {
        Self::with_clock(difficulty, seed, best_times, SystemClock)
    }
}

impl<S: BestTimeStore, C: Clock> GameSession<S, C> {
    pub fn with_clock(difficulty: Difficulty, seed: u64, best_times: S, clock: C) -> Self {
        let (rows, cols) = difficulty.size();
        Self {
            difficulty,
            grid: Grid::new(rows, cols),
            status: GameStatus::NotStarted,
            revealed_count: 0,
            flag_count: 0,
            losing_cell: None,
            stopwatch: Stopwatch::default(),
            generator: RandomMineGenerator::new(seed),
            best_times,
            clock,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines minus flags; goes negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.difficulty.mines()) - i32::from(self.flag_count)
    }

    pub fn losing_cell(&self) -> Option<Coord2> {
        self.losing_cell
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.stopwatch.elapsed_secs(self.clock.now())
    }

    pub fn is_timer_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn best_time(&self) -> Option<u32> {
        self.best_times.get_best(self.difficulty)
    }

    pub fn best_times(&self) -> &S {
        &self.best_times
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.grid.get(coords)?.view())
    }

    pub fn end_message(&self) -> Option<&'static str> {
        end_message(self.status)
    }

    /// Discards the current round and starts a fresh one on the same difficulty.
    pub fn restart(&mut self) {
        self.reset(self.difficulty);
    }

    /// Discards the current round and starts a fresh one on `difficulty`.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.reset(difficulty);
    }

    fn reset(&mut self, difficulty: Difficulty) {
        self.stopwatch.stop(self.clock.now());
        log::debug!(
            "New {} game (previous {:?} after {}s)",
            difficulty,
            self.status,
            self.elapsed_secs()
        );

        let (rows, cols) = difficulty.size();
        self.difficulty = difficulty;
        self.grid = Grid::new(rows, cols);
        self.status = GameStatus::NotStarted;
        self.revealed_count = 0;
        self.flag_count = 0;
        self.losing_cell = None;
        self.stopwatch = Stopwatch::default();
    }

    /// Primary action on a cell. The first activation lays the mines around
    /// it and starts the clock. No-op once the game has ended.
    pub fn activate(&mut self, coords: Coord2) -> Result<ActivateOutcome> {
        let coords = self.grid.check_bounds(coords)?;

        let started = match self.status {
            GameStatus::Won | GameStatus::Lost => return Ok(ActivateOutcome::NoChange),
            GameStatus::NotStarted => {
                self.start(coords)?;
                true
            }
            GameStatus::Playing => false,
        };

        Ok(match reveal(&mut self.grid, coords)? {
            RevealResult::AlreadyDone if started => ActivateOutcome::Started,
            RevealResult::AlreadyDone => ActivateOutcome::NoChange,
            RevealResult::HitMine => {
                self.revealed_count += 1;
                self.lose(coords);
                ActivateOutcome::Lost
            }
            RevealResult::Revealed(count) => {
                self.revealed_count += count;
                if is_win(&self.grid, self.revealed_count, self.difficulty.mines()) {
                    self.win();
                    ActivateOutcome::Won
                } else {
                    ActivateOutcome::Revealed
                }
            }
        })
    }

    /// Secondary action on a cell. Ignored on revealed cells and once the game
    /// has ended.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.check_bounds(coords)?;
        if self.status.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.grid[coords];
        if cell.is_revealed {
            return Ok(MarkOutcome::NoChange);
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        log::trace!("Flag at {:?}: {}", coords, cell.is_flagged);
        Ok(MarkOutcome::Changed)
    }

    fn start(&mut self, first: Coord2) -> Result<()> {
        self.generator
            .place_mines(&mut self.grid, self.difficulty.mines(), first)?;
        compute_neighbor_counts(&mut self.grid);
        self.stopwatch.start(self.clock.now());
        self.status = GameStatus::Playing;
        log::debug!("Started {} game at {:?}", self.difficulty, first);
        Ok(())
    }

    fn lose(&mut self, coords: Coord2) {
        self.stopwatch.stop(self.clock.now());
        self.status = GameStatus::Lost;
        self.losing_cell = Some(coords);
        let shown = reveal_all_mines(&mut self.grid);
        log::debug!(
            "Lost at {:?} after {}s, {} mines shown",
            coords,
            self.elapsed_secs(),
            shown
        );
    }

    fn win(&mut self) {
        self.stopwatch.stop(self.clock.now());
        self.status = GameStatus::Won;
        let seconds = self.elapsed_secs();
        log::debug!("Won {} game in {}s", self.difficulty, seconds);
        record_if_best(&mut self.best_times, self.difficulty, seconds);
    }
}
